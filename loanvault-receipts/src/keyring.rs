//! Startup handling of the service key pair.
//!
//! The pair is resolved once, according to [`KeyLifecycle`], and then shared
//! read-only for the life of the process. Persisted keys are never replaced:
//! regenerating would orphan every envelope already wrapped under them.

use crate::config::{KeyLifecycle, ReceiptConfig};
use crate::error::ReceiptResult;
use loanvault_crypto::{
    CryptoError, ReceiptKeyPair, generate_key_pair, load_key_pair, persist_key_pair,
};
use std::sync::Arc;
use tracing::{info, warn};

/// Shared handle to the process key pair.
#[derive(Clone, Debug)]
pub struct KeyRing {
    pair: Arc<ReceiptKeyPair>,
}

impl KeyRing {
    /// Wraps an already constructed key pair.
    pub fn new(pair: ReceiptKeyPair) -> Self {
        Self {
            pair: Arc::new(pair),
        }
    }

    /// Loads or creates the key pair described by `config`.
    pub fn initialize(config: &ReceiptConfig) -> ReceiptResult<Self> {
        config.validate()?;

        let private_path = &config.private_key_path;
        let public_path = &config.public_key_path;
        let private_exists = private_path.exists();
        let public_exists = public_path.exists();

        let pair = match (config.key_lifecycle, private_exists, public_exists) {
            (_, true, true) => {
                let pair = load_key_pair(private_path, public_path)?;
                info!(
                    "loaded receipt key pair from {} and {}",
                    private_path.display(),
                    public_path.display()
                );
                pair
            }
            (KeyLifecycle::LoadOrCreate, false, false) => {
                let pair = generate_key_pair()?;
                persist_key_pair(&pair, private_path, public_path)?;
                info!(
                    "generated new receipt key pair at {} and {}",
                    private_path.display(),
                    public_path.display()
                );
                pair
            }
            (lifecycle, _, _) => {
                let missing = if private_exists { public_path } else { private_path };
                warn!(?lifecycle, "receipt key file missing: {}", missing.display());
                return Err(CryptoError::KeyLoad(format!(
                    "{}: key file not found",
                    missing.display()
                ))
                .into());
            }
        };

        Ok(Self::new(pair))
    }

    pub fn key_pair(&self) -> &ReceiptKeyPair {
        &self.pair
    }

    /// Cloned handle to the shared pair.
    pub fn shared(&self) -> Arc<ReceiptKeyPair> {
        Arc::clone(&self.pair)
    }
}
