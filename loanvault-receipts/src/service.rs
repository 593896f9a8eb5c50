//! Receipt envelope orchestration.
//!
//! `seal` runs on the upload path, `open` on the retrieval path. Each call
//! owns its receipt key and buffers; the only shared state is the read-only
//! key pair, so the service is safe to call from any number of threads.

use crate::envelope::ReceiptEnvelope;
use crate::error::ReceiptResult;
use crate::keyring::KeyRing;
use loanvault_crypto::{decrypt, encrypt, generate_symmetric_key, unwrap_key, wrap_key};
use tracing::debug;

/// Seals and opens receipt envelopes.
///
/// Upload and retrieval handlers hold an `Arc<dyn ReceiptSealer>` and never
/// see key material.
pub trait ReceiptSealer: Send + Sync {
    /// Encrypts `plaintext` into a new envelope.
    fn seal(&self, plaintext: &[u8]) -> ReceiptResult<ReceiptEnvelope>;

    /// Recovers the plaintext of an envelope produced by `seal`.
    fn open(&self, envelope: &ReceiptEnvelope) -> ReceiptResult<Vec<u8>>;
}

/// Envelope service backed by the process key pair.
#[derive(Clone, Debug)]
pub struct ReceiptEnvelopeService {
    keys: KeyRing,
}

impl ReceiptEnvelopeService {
    pub fn new(keys: KeyRing) -> Self {
        Self { keys }
    }

    pub fn key_ring(&self) -> &KeyRing {
        &self.keys
    }
}

impl ReceiptSealer for ReceiptEnvelopeService {
    fn seal(&self, plaintext: &[u8]) -> ReceiptResult<ReceiptEnvelope> {
        // The key is zeroized when it drops at the end of this call.
        let key = generate_symmetric_key()?;
        let payload = encrypt(plaintext, &key)?;
        let wrapped_key = wrap_key(&key, self.keys.key_pair().public())?;
        drop(key);

        debug!(
            plaintext_len = plaintext.len(),
            payload_len = payload.len(),
            "sealed receipt envelope"
        );
        Ok(ReceiptEnvelope::from_parts(payload, wrapped_key))
    }

    fn open(&self, envelope: &ReceiptEnvelope) -> ReceiptResult<Vec<u8>> {
        let key = unwrap_key(envelope.wrapped_key(), self.keys.key_pair().private())?;
        let plaintext = decrypt(envelope.payload(), &key)?;
        drop(key);

        debug!(plaintext_len = plaintext.len(), "opened receipt envelope");
        Ok(plaintext)
    }
}
