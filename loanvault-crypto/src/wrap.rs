//! RSA key wrapping of per-receipt symmetric keys (PKCS#1 v1.5).

use crate::error::{CryptoError, CryptoResult};
use crate::key::{KEY_SIZE, SymmetricKey};
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};
use zeroize::Zeroizing;

/// Bytes of PKCS#1 v1.5 encryption padding overhead.
pub const PKCS1_V15_OVERHEAD: usize = 11;

/// Largest message PKCS#1 v1.5 can encrypt under a modulus of `modulus_len` bytes.
pub const fn max_wrap_len(modulus_len: usize) -> usize {
    modulus_len.saturating_sub(PKCS1_V15_OVERHEAD)
}

/// Encrypts the raw key bytes under `public`.
///
/// The result is always exactly the modulus length.
pub fn wrap_key(key: &SymmetricKey, public: &RsaPublicKey) -> CryptoResult<Vec<u8>> {
    let limit = max_wrap_len(public.size());
    if key.as_bytes().len() > limit {
        return Err(CryptoError::Wrap(format!(
            "{} byte key exceeds the {limit} byte PKCS#1 v1.5 limit",
            key.as_bytes().len()
        )));
    }

    public
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, key.as_bytes())
        .map_err(|e| CryptoError::Wrap(e.to_string()))
}

/// Decrypts a wrapped key with `private`, blinding the RSA operation.
///
/// A wrong private key and a corrupted ciphertext produce the same error.
pub fn unwrap_key(wrapped: &[u8], private: &RsaPrivateKey) -> CryptoResult<SymmetricKey> {
    if wrapped.len() != private.size() {
        return Err(CryptoError::Unwrap);
    }

    let raw = private
        .decrypt_blinded(&mut OsRng, Pkcs1v15Encrypt, wrapped)
        .map(Zeroizing::new)
        .map_err(|_| CryptoError::Unwrap)?;

    if raw.len() != KEY_SIZE {
        return Err(CryptoError::Unwrap);
    }
    SymmetricKey::from_slice(&raw).map_err(|_| CryptoError::Unwrap)
}
