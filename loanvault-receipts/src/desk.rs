//! Upload and retrieval boundary.
//!
//! Couples a [`ReceiptSealer`] with a [`ReceiptStore`]: validates uploads,
//! seals them and stores complete envelopes only; on retrieval, fetches and
//! opens. Failures are logged here with their disposition, never with key
//! material or plaintext.

use crate::config::ReceiptConfig;
use crate::error::{ReceiptError, ReceiptResult};
use crate::keyring::KeyRing;
use crate::service::{ReceiptEnvelopeService, ReceiptSealer};
use crate::store::ReceiptStore;
use std::sync::Arc;
use tracing::{info, warn};

/// Front desk for receipt uploads and retrievals.
pub struct ReceiptDesk {
    sealer: Arc<dyn ReceiptSealer>,
    store: Arc<dyn ReceiptStore>,
    max_receipt_bytes: usize,
}

impl ReceiptDesk {
    pub fn new(
        sealer: Arc<dyn ReceiptSealer>,
        store: Arc<dyn ReceiptStore>,
        max_receipt_bytes: usize,
    ) -> Self {
        Self {
            sealer,
            store,
            max_receipt_bytes,
        }
    }

    /// Resolves the key pair from `config` and builds a desk over `store`.
    pub fn from_config(
        config: &ReceiptConfig,
        store: Arc<dyn ReceiptStore>,
    ) -> ReceiptResult<Self> {
        let keys = KeyRing::initialize(config)?;
        let sealer = Arc::new(ReceiptEnvelopeService::new(keys));
        Ok(Self::new(sealer, store, config.max_receipt_bytes))
    }

    pub fn max_receipt_bytes(&self) -> usize {
        self.max_receipt_bytes
    }

    /// Seals an uploaded receipt and stores it under `record_id`.
    ///
    /// Nothing is stored unless sealing succeeds completely.
    pub fn deposit(&self, record_id: &str, receipt: &[u8]) -> ReceiptResult<()> {
        let result = self.try_deposit(record_id, receipt);
        match &result {
            Ok(()) => info!(record_id, size = receipt.len(), "receipt sealed and stored"),
            Err(e) => warn!(
                record_id,
                disposition = ?e.disposition(),
                "receipt upload failed: {e}"
            ),
        }
        result
    }

    /// Fetches and opens the receipt stored under `record_id`.
    pub fn retrieve(&self, record_id: &str) -> ReceiptResult<Vec<u8>> {
        let result = self.try_retrieve(record_id);
        match &result {
            Ok(plaintext) => info!(record_id, size = plaintext.len(), "receipt opened"),
            Err(e) => warn!(
                record_id,
                disposition = ?e.disposition(),
                "receipt retrieval failed: {e}"
            ),
        }
        result
    }

    fn try_deposit(&self, record_id: &str, receipt: &[u8]) -> ReceiptResult<()> {
        check_record_id(record_id)?;
        if receipt.len() > self.max_receipt_bytes {
            return Err(ReceiptError::ReceiptTooLarge {
                size: receipt.len(),
                limit: self.max_receipt_bytes,
            });
        }

        let envelope = self.sealer.seal(receipt)?;
        self.store.put(record_id, envelope)
    }

    fn try_retrieve(&self, record_id: &str) -> ReceiptResult<Vec<u8>> {
        check_record_id(record_id)?;
        let envelope = self.store.get(record_id)?;
        self.sealer.open(&envelope)
    }
}

fn check_record_id(record_id: &str) -> ReceiptResult<()> {
    if record_id.trim().is_empty() {
        return Err(ReceiptError::EmptyRecordId);
    }
    Ok(())
}
