//! Receipt service configuration.

use crate::error::{ReceiptError, ReceiptResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upload cap applied before sealing (50 MiB).
pub const DEFAULT_MAX_RECEIPT_BYTES: usize = 50 << 20;

/// What to do with key material at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyLifecycle {
    /// Both key files must already exist.
    LoadExisting,
    /// Load existing key files, or generate and persist a pair when neither exists.
    #[default]
    LoadOrCreate,
}

/// Configuration for the receipt envelope service.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ReceiptConfig {
    /// PKCS#1 PEM file holding the RSA private key.
    pub private_key_path: PathBuf,

    /// SubjectPublicKeyInfo PEM file holding the RSA public key.
    pub public_key_path: PathBuf,

    pub key_lifecycle: KeyLifecycle,

    /// Largest receipt accepted for sealing, in bytes.
    pub max_receipt_bytes: usize,
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            private_key_path: PathBuf::from("private_key.pem"),
            public_key_path: PathBuf::from("public_key.pem"),
            key_lifecycle: KeyLifecycle::default(),
            max_receipt_bytes: DEFAULT_MAX_RECEIPT_BYTES,
        }
    }
}

impl ReceiptConfig {
    /// Reads a JSON config file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> ReceiptResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ReceiptError::Config(format!("{}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&json)
            .map_err(|e| ReceiptError::Config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Config rooted in `dir`, for tests and embedded setups.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            private_key_path: dir.join("private_key.pem"),
            public_key_path: dir.join("public_key.pem"),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> ReceiptResult<()> {
        if self.max_receipt_bytes == 0 {
            return Err(ReceiptError::Config(
                "max_receipt_bytes must be greater than zero".to_string(),
            ));
        }
        if self.private_key_path == self.public_key_path {
            return Err(ReceiptError::Config(
                "private and public key paths must differ".to_string(),
            ));
        }
        Ok(())
    }
}
