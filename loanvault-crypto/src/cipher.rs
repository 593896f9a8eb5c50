//! AES-256-GCM encryption of receipt payloads.
//!
//! Wire format (no version byte, no length prefix):
//! [12 bytes: nonce][N bytes: ciphertext][16 bytes: tag]

use crate::error::{CryptoError, CryptoResult};
use crate::key::SymmetricKey;
use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use rand::RngCore;
use rand::rngs::OsRng;

/// Size of the AES-GCM nonce in bytes (96 bits).
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes.
pub const TAG_SIZE: usize = 16;

/// Length of the payload `encrypt` produces for a plaintext of `plaintext_len` bytes.
pub const fn encrypted_len(plaintext_len: usize) -> usize {
    NONCE_SIZE + plaintext_len + TAG_SIZE
}

fn build_cipher(key: &SymmetricKey) -> CryptoResult<Aes256Gcm> {
    let bytes = key.as_bytes();
    Aes256Gcm::new_from_slice(bytes).map_err(|_| CryptoError::CipherInit {
        expected: crate::key::KEY_SIZE,
        actual: bytes.len(),
    })
}

fn generate_nonce() -> CryptoResult<[u8; NONCE_SIZE]> {
    let mut nonce = [0u8; NONCE_SIZE];
    OsRng
        .try_fill_bytes(&mut nonce)
        .map_err(|e| CryptoError::KeyGeneration(format!("nonce generation failed: {e}")))?;
    Ok(nonce)
}

/// Encrypts `plaintext` under `key` with a fresh random nonce.
///
/// Returns `nonce || ciphertext || tag` as a single buffer.
pub fn encrypt(plaintext: &[u8], key: &SymmetricKey) -> CryptoResult<Vec<u8>> {
    let cipher = build_cipher(key)?;
    let nonce = generate_nonce()?;

    let ciphertext = cipher
        .encrypt(Nonce::from_slice(&nonce), plaintext)
        .map_err(|_| CryptoError::Encryption)?;

    let mut payload = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
    payload.extend_from_slice(&nonce);
    payload.extend_from_slice(&ciphertext);
    Ok(payload)
}

/// Decrypts a payload produced by [`encrypt`].
///
/// Buffers shorter than the nonce are rejected before any decryption is
/// attempted. Every other failure is reported as `AuthenticationFailure`.
pub fn decrypt(payload: &[u8], key: &SymmetricKey) -> CryptoResult<Vec<u8>> {
    if payload.len() < NONCE_SIZE {
        return Err(CryptoError::ShortCiphertext {
            minimum: NONCE_SIZE,
            actual: payload.len(),
        });
    }

    let cipher = build_cipher(key)?;
    let (nonce, ciphertext) = payload.split_at(NONCE_SIZE);

    cipher
        .decrypt(Nonce::from_slice(nonce), ciphertext)
        .map_err(|_| CryptoError::AuthenticationFailure)
}
