//! Envelope encryption primitives for LoanVault payment receipts.
//!
//! Each uploaded receipt is protected with two layers:
//!
//! 1. **Receipt Key**: a fresh random 256-bit key per receipt. The file bytes
//!    are sealed with AES-256-GCM under this key.
//!
//! 2. **Key Pair**: a long-lived RSA-2048 pair owned by the service. The
//!    receipt key is wrapped with the public half (PKCS#1 v1.5) and stored
//!    next to the ciphertext; only the private half can recover it.
//!
//! The receipt key never exists outside memory in raw form and is zeroized
//! when dropped.

mod cipher;
mod error;
mod key;
pub mod keypair;
mod wrap;

pub use cipher::{NONCE_SIZE, TAG_SIZE, decrypt, encrypt, encrypted_len};
pub use error::{CryptoError, CryptoResult};
pub use key::{KEY_SIZE, SymmetricKey, generate_symmetric_key};
pub use keypair::{
    KEY_BITS, MODULUS_BYTES, ReceiptKeyPair, generate_key_pair, load_key_pair, load_private_key,
    load_public_key, persist_key_pair,
};
pub use wrap::{PKCS1_V15_OVERHEAD, max_wrap_len, unwrap_key, wrap_key};

pub use rsa::{RsaPrivateKey, RsaPublicKey};
