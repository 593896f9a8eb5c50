//! The stored form of a sealed receipt.

use loanvault_crypto::{NONCE_SIZE, TAG_SIZE};
use serde::{Deserialize, Serialize};

/// A sealed receipt: the encrypted file plus its wrapped key.
///
/// Both buffers are opaque. `payload` is `nonce || ciphertext || tag`;
/// `wrapped_key` is the raw RSA ciphertext of the receipt key. The store
/// persists them side by side under the record identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptEnvelope {
    payload: Vec<u8>,
    wrapped_key: Vec<u8>,
}

impl ReceiptEnvelope {
    /// Reassembles an envelope from the two stored buffers.
    pub fn from_parts(payload: Vec<u8>, wrapped_key: Vec<u8>) -> Self {
        Self {
            payload,
            wrapped_key,
        }
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn wrapped_key(&self) -> &[u8] {
        &self.wrapped_key
    }

    /// Splits the envelope into `(payload, wrapped_key)` for persistence.
    pub fn into_parts(self) -> (Vec<u8>, Vec<u8>) {
        (self.payload, self.wrapped_key)
    }

    /// Plaintext length implied by the payload, if it is well formed.
    pub fn plaintext_len(&self) -> Option<usize> {
        self.payload.len().checked_sub(NONCE_SIZE + TAG_SIZE)
    }
}
