//! Crypto error types.

use thiserror::Error;

/// Result type for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;

/// Errors that can occur during receipt encryption.
///
/// `AuthenticationFailure` and `Unwrap` deliberately carry no detail: a
/// caller must not be able to tell a wrong key from corrupted data.
#[derive(Debug, Error)]
pub enum CryptoError {
    #[error("key generation failed: {0}")]
    KeyGeneration(String),

    #[error("failed to persist key material: {0}")]
    KeyPersist(String),

    #[error("failed to load key material: {0}")]
    KeyLoad(String),

    #[error("invalid symmetric key length: expected {expected}, got {actual}")]
    CipherInit { expected: usize, actual: usize },

    #[error("ciphertext too short: {actual} bytes, need at least {minimum}")]
    ShortCiphertext { minimum: usize, actual: usize },

    #[error("payload authentication failed")]
    AuthenticationFailure,

    #[error("payload encryption failed")]
    Encryption,

    #[error("key wrap failed: {0}")]
    Wrap(String),

    #[error("key unwrap failed")]
    Unwrap,
}

impl CryptoError {
    /// True for failures that mean the stored payload cannot be read back.
    ///
    /// Short and unauthenticated payloads are reported the same way at the
    /// service boundary.
    pub fn is_unreadable(&self) -> bool {
        matches!(
            self,
            CryptoError::ShortCiphertext { .. } | CryptoError::AuthenticationFailure
        )
    }

    /// True for key-wrapping failures.
    pub fn is_key_unrecoverable(&self) -> bool {
        matches!(self, CryptoError::Wrap(_) | CryptoError::Unwrap)
    }
}
