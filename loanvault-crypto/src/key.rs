//! Per-receipt symmetric keys.

use crate::error::{CryptoError, CryptoResult};
use rand::RngCore;
use rand::rngs::OsRng;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of a symmetric key in bytes (256 bits).
pub const KEY_SIZE: usize = 32;

/// A 256-bit AES key used for exactly one receipt payload.
///
/// Zeroized on drop. Never persisted in raw form: it only leaves memory
/// wrapped under the RSA public key.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey {
    bytes: [u8; KEY_SIZE],
}

impl SymmetricKey {
    /// Draws a fresh key from the operating system RNG.
    pub fn generate() -> CryptoResult<Self> {
        let mut bytes = [0u8; KEY_SIZE];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CryptoError::KeyGeneration(format!("random source failed: {e}")))?;
        Ok(Self { bytes })
    }

    /// Builds a key from raw bytes, which must be exactly [`KEY_SIZE`] long.
    pub fn from_slice(bytes: &[u8]) -> CryptoResult<Self> {
        if bytes.len() != KEY_SIZE {
            return Err(CryptoError::CipherInit {
                expected: KEY_SIZE,
                actual: bytes.len(),
            });
        }
        let mut key = [0u8; KEY_SIZE];
        key.copy_from_slice(bytes);
        Ok(Self { bytes: key })
    }

    /// Returns the raw key bytes.
    pub fn as_bytes(&self) -> &[u8; KEY_SIZE] {
        &self.bytes
    }
}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SymmetricKey([REDACTED])")
    }
}

/// Generates a fresh random symmetric key.
pub fn generate_symmetric_key() -> CryptoResult<SymmetricKey> {
    SymmetricKey::generate()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_keys_are_32_bytes_and_distinct() {
        let a = generate_symmetric_key().unwrap();
        let b = generate_symmetric_key().unwrap();
        assert_eq!(a.as_bytes().len(), KEY_SIZE);
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        let err = SymmetricKey::from_slice(&[0u8; 16]).unwrap_err();
        assert!(matches!(
            err,
            CryptoError::CipherInit {
                expected: 32,
                actual: 16
            }
        ));
    }

    #[test]
    fn debug_output_is_redacted() {
        let key = SymmetricKey::from_slice(&[0xAB; KEY_SIZE]).unwrap();
        let rendered = format!("{key:?}");
        assert_eq!(rendered, "SymmetricKey([REDACTED])");
        assert!(!rendered.contains("171"));
    }
}
