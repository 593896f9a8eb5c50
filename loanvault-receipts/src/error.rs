//! Receipt service error types.

use loanvault_crypto::CryptoError;
use thiserror::Error;

/// Result type for receipt operations.
pub type ReceiptResult<T> = Result<T, ReceiptError>;

/// Errors that can occur while sealing, storing or opening receipts.
#[derive(Debug, Error)]
pub enum ReceiptError {
    #[error("crypto error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("receipt too large: {size} bytes exceeds the {limit} byte limit")]
    ReceiptTooLarge { size: usize, limit: usize },

    #[error("record identifier must not be empty")]
    EmptyRecordId,

    #[error("no receipt stored for record {0}")]
    NotFound(String),

    #[error("a receipt is already stored for record {0}")]
    AlreadyExists(String),

    #[error("storage error: {0}")]
    Storage(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}

/// How a failure should be surfaced to the client.
///
/// The HTTP collaborator maps these to status codes. Unreadable payloads
/// share one disposition whether they were truncated or failed
/// authentication.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Disposition {
    InvalidRequest,
    NotFound,
    Conflict,
    Unreadable,
    KeyUnrecoverable,
    Internal,
}

impl Disposition {
    /// Client-facing message. Never includes error detail.
    pub fn public_message(self) -> &'static str {
        match self {
            Disposition::InvalidRequest => "invalid receipt upload",
            Disposition::NotFound => "no receipt found",
            Disposition::Conflict => "receipt already uploaded",
            Disposition::Unreadable => "receipt unreadable",
            Disposition::KeyUnrecoverable => "receipt key unrecoverable",
            Disposition::Internal => "internal error",
        }
    }
}

impl ReceiptError {
    pub fn disposition(&self) -> Disposition {
        match self {
            ReceiptError::Crypto(e) if e.is_unreadable() => Disposition::Unreadable,
            ReceiptError::Crypto(e) if e.is_key_unrecoverable() => Disposition::KeyUnrecoverable,
            ReceiptError::Crypto(_) => Disposition::Internal,
            ReceiptError::ReceiptTooLarge { .. } | ReceiptError::EmptyRecordId => {
                Disposition::InvalidRequest
            }
            ReceiptError::NotFound(_) => Disposition::NotFound,
            ReceiptError::AlreadyExists(_) => Disposition::Conflict,
            ReceiptError::Storage(_) | ReceiptError::Config(_) => Disposition::Internal,
        }
    }
}
