//! Storage seam for sealed receipts.
//!
//! Production deployments persist envelopes in the payments table; this crate
//! only needs `put` and `get` keyed by the record identifier.

use crate::envelope::ReceiptEnvelope;
use crate::error::{ReceiptError, ReceiptResult};
use std::collections::HashMap;
use std::sync::RwLock;

/// Persists envelopes keyed by record identifier.
///
/// Envelopes are write-once: `put` must refuse to replace an existing record.
pub trait ReceiptStore: Send + Sync {
    fn put(&self, record_id: &str, envelope: ReceiptEnvelope) -> ReceiptResult<()>;

    fn get(&self, record_id: &str) -> ReceiptResult<ReceiptEnvelope>;
}

/// In-process store, used in tests and local tooling.
#[derive(Debug, Default)]
pub struct MemoryReceiptStore {
    envelopes: RwLock<HashMap<String, ReceiptEnvelope>>,
}

impl MemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored envelopes.
    pub fn len(&self) -> usize {
        self.envelopes.read().map(|m| m.len()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReceiptStore for MemoryReceiptStore {
    fn put(&self, record_id: &str, envelope: ReceiptEnvelope) -> ReceiptResult<()> {
        let mut envelopes = self
            .envelopes
            .write()
            .map_err(|_| ReceiptError::Storage("receipt store lock poisoned".to_string()))?;

        if envelopes.contains_key(record_id) {
            return Err(ReceiptError::AlreadyExists(record_id.to_string()));
        }
        envelopes.insert(record_id.to_string(), envelope);
        Ok(())
    }

    fn get(&self, record_id: &str) -> ReceiptResult<ReceiptEnvelope> {
        self.envelopes
            .read()
            .map_err(|_| ReceiptError::Storage("receipt store lock poisoned".to_string()))?
            .get(record_id)
            .cloned()
            .ok_or_else(|| ReceiptError::NotFound(record_id.to_string()))
    }
}
