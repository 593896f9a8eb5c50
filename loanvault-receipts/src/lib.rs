//! Receipt envelope service for LoanVault.
//!
//! Payment-proof uploads are sealed before they reach the database and
//! opened again on authorized retrieval:
//!
//! - **Seal**: fresh receipt key → AES-256-GCM payload → key wrapped under the
//!   service's RSA public key. The `(payload, wrapped_key)` pair is stored
//!   under the record identifier.
//! - **Open**: unwrap the receipt key with the RSA private key → decrypt and
//!   authenticate the payload.
//!
//! Who may open a receipt is decided by the caller; this crate trusts that
//! every `open` request is already authorized.

pub mod config;
pub mod desk;
pub mod envelope;
pub mod error;
pub mod keyring;
pub mod service;
pub mod store;

pub use config::{KeyLifecycle, ReceiptConfig};
pub use desk::ReceiptDesk;
pub use envelope::ReceiptEnvelope;
pub use error::{Disposition, ReceiptError, ReceiptResult};
pub use keyring::KeyRing;
pub use service::{ReceiptEnvelopeService, ReceiptSealer};
pub use store::{MemoryReceiptStore, ReceiptStore};
