//! RSA key pair used to wrap per-receipt keys.
//!
//! Private keys are stored as PKCS#1 `RSA PRIVATE KEY` PEM, public keys as
//! SubjectPublicKeyInfo `PUBLIC KEY` PEM, one block per file.

use crate::error::{CryptoError, CryptoResult};
use rand::rngs::OsRng;
use rsa::pkcs1::{DecodeRsaPrivateKey, EncodeRsaPrivateKey};
use rsa::pkcs8::der::pem;
use rsa::pkcs8::{DecodePublicKey, EncodePublicKey, LineEnding};
use rsa::traits::PublicKeyParts;
use rsa::{RsaPrivateKey, RsaPublicKey};
use std::fmt;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Modulus size of every receipt key pair.
pub const KEY_BITS: usize = 2048;

/// Modulus size in bytes; also the length of every wrapped key.
pub const MODULUS_BYTES: usize = KEY_BITS / 8;

const PRIVATE_KEY_LABEL: &str = "RSA PRIVATE KEY";
const PUBLIC_KEY_LABEL: &str = "PUBLIC KEY";

/// RSA-2048 key pair held by the service for its whole lifetime.
///
/// Read-only after construction, so it can be shared behind an `Arc`
/// without locking. The private half zeroizes itself on drop.
#[derive(Clone)]
pub struct ReceiptKeyPair {
    private: RsaPrivateKey,
    public: RsaPublicKey,
}

impl ReceiptKeyPair {
    /// Builds a pair from a private key, deriving the public half.
    pub fn from_private(private: RsaPrivateKey) -> Self {
        let public = private.to_public_key();
        Self { private, public }
    }

    pub fn public(&self) -> &RsaPublicKey {
        &self.public
    }

    pub fn private(&self) -> &RsaPrivateKey {
        &self.private
    }

    /// Modulus length in bytes.
    pub fn modulus_len(&self) -> usize {
        self.public.size()
    }
}

impl fmt::Debug for ReceiptKeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReceiptKeyPair")
            .field("modulus_bits", &(self.public.size() * 8))
            .field("private", &"[REDACTED]")
            .finish()
    }
}

/// Generates a fresh 2048-bit key pair from the operating system RNG.
pub fn generate_key_pair() -> CryptoResult<ReceiptKeyPair> {
    let private = RsaPrivateKey::new(&mut OsRng, KEY_BITS)
        .map_err(|e| CryptoError::KeyGeneration(format!("RSA key generation failed: {e}")))?;
    Ok(ReceiptKeyPair::from_private(private))
}

/// Writes the private key (PKCS#1 PEM) and public key (SPKI PEM) to their files.
///
/// Both files are fully written to temporaries beside their targets before
/// either is renamed into place, so a failed write never truncates an
/// existing key file.
pub fn persist_key_pair(
    pair: &ReceiptKeyPair,
    private_path: impl AsRef<Path>,
    public_path: impl AsRef<Path>,
) -> CryptoResult<()> {
    let private_pem = pair
        .private
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| CryptoError::KeyPersist(format!("private key encoding failed: {e}")))?;
    let public_pem = pair
        .public
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| CryptoError::KeyPersist(format!("public key encoding failed: {e}")))?;

    let private_tmp = stage_file(private_path.as_ref(), private_pem.as_bytes(), 0o600)?;
    let public_tmp = stage_file(public_path.as_ref(), public_pem.as_bytes(), 0o644)?;

    commit_file(private_tmp, private_path.as_ref())?;
    commit_file(public_tmp, public_path.as_ref())?;
    Ok(())
}

/// Loads an RSA public key from a SubjectPublicKeyInfo PEM file.
pub fn load_public_key(path: impl AsRef<Path>) -> CryptoResult<RsaPublicKey> {
    let path = path.as_ref();
    let pem = read_pem(path, PUBLIC_KEY_LABEL)?;

    let public = RsaPublicKey::from_public_key_pem(&pem).map_err(|e| match e {
        rsa::pkcs8::spki::Error::OidUnknown { .. } => {
            CryptoError::KeyLoad(format!("{}: not an RSA public key", path.display()))
        }
        other => CryptoError::KeyLoad(format!(
            "{}: malformed public key: {other}",
            path.display()
        )),
    })?;

    check_modulus(path, public.size())?;
    Ok(public)
}

/// Loads an RSA private key from a PKCS#1 PEM file.
pub fn load_private_key(path: impl AsRef<Path>) -> CryptoResult<RsaPrivateKey> {
    let path = path.as_ref();
    let pem = read_pem(path, PRIVATE_KEY_LABEL)?;

    // The error is not rendered: it could echo parts of the key.
    let private = RsaPrivateKey::from_pkcs1_pem(&pem).map_err(|_| {
        CryptoError::KeyLoad(format!("{}: malformed RSA private key", path.display()))
    })?;
    private.validate().map_err(|_| {
        CryptoError::KeyLoad(format!("{}: inconsistent RSA private key", path.display()))
    })?;

    check_modulus(path, private.size())?;
    Ok(private)
}

/// Loads both halves and checks that they belong to the same key pair.
pub fn load_key_pair(
    private_path: impl AsRef<Path>,
    public_path: impl AsRef<Path>,
) -> CryptoResult<ReceiptKeyPair> {
    let private = load_private_key(private_path)?;
    let public = load_public_key(public_path.as_ref())?;

    if private.to_public_key() != public {
        return Err(CryptoError::KeyLoad(format!(
            "{}: public key does not match the private key",
            public_path.as_ref().display()
        )));
    }
    Ok(ReceiptKeyPair { private, public })
}

/// Reads a PEM file that must contain exactly one block with `label`.
fn read_pem(path: &Path, label: &str) -> CryptoResult<zeroize::Zeroizing<String>> {
    let text = std::fs::read_to_string(path)
        .map(zeroize::Zeroizing::new)
        .map_err(|e| CryptoError::KeyLoad(format!("{}: {e}", path.display())))?;

    let found = pem_label(&text)
        .map_err(|reason| CryptoError::KeyLoad(format!("{}: {reason}", path.display())))?;
    if found != label {
        return Err(CryptoError::KeyLoad(format!(
            "{}: expected PEM block \"{label}\", found \"{found}\"",
            path.display()
        )));
    }
    Ok(text)
}

fn pem_label(text: &str) -> Result<&str, String> {
    let blocks = text.matches("-----BEGIN ").count();
    if blocks != 1 {
        return Err(format!("expected exactly one PEM block, found {blocks}"));
    }
    pem::decode_label(text.as_bytes()).map_err(|e| format!("malformed PEM block: {e}"))
}

fn check_modulus(path: &Path, modulus_len: usize) -> CryptoResult<()> {
    if modulus_len != MODULUS_BYTES {
        return Err(CryptoError::KeyLoad(format!(
            "{}: expected a {KEY_BITS}-bit key, found {} bits",
            path.display(),
            modulus_len * 8
        )));
    }
    Ok(())
}

fn stage_file(target: &Path, contents: &[u8], mode: u32) -> CryptoResult<NamedTempFile> {
    let dir = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let persist_err =
        |e: std::io::Error| CryptoError::KeyPersist(format!("{}: {e}", target.display()));

    std::fs::create_dir_all(dir).map_err(persist_err)?;
    let mut tmp = NamedTempFile::new_in(dir).map_err(persist_err)?;
    tmp.write_all(contents).map_err(persist_err)?;
    tmp.as_file().sync_all().map_err(persist_err)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tmp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(mode))
            .map_err(persist_err)?;
    }
    #[cfg(not(unix))]
    let _ = mode;

    Ok(tmp)
}

fn commit_file(tmp: NamedTempFile, target: &Path) -> CryptoResult<()> {
    tmp.persist(target)
        .map_err(|e| CryptoError::KeyPersist(format!("{}: {}", target.display(), e.error)))?;
    Ok(())
}

