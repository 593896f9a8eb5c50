//! Shared fixtures for receipt integration tests.

#![allow(dead_code)]

use loanvault_crypto::{ReceiptKeyPair, generate_key_pair};
use loanvault_receipts::{KeyRing, ReceiptEnvelopeService};
use rand::RngCore;
use std::sync::OnceLock;

static PAIR_A: OnceLock<ReceiptKeyPair> = OnceLock::new();
static PAIR_B: OnceLock<ReceiptKeyPair> = OnceLock::new();

pub fn key_pair() -> &'static ReceiptKeyPair {
    PAIR_A.get_or_init(|| generate_key_pair().unwrap())
}

pub fn other_key_pair() -> &'static ReceiptKeyPair {
    PAIR_B.get_or_init(|| generate_key_pair().unwrap())
}

pub fn service() -> ReceiptEnvelopeService {
    ReceiptEnvelopeService::new(KeyRing::new(key_pair().clone()))
}

pub fn other_service() -> ReceiptEnvelopeService {
    ReceiptEnvelopeService::new(KeyRing::new(other_key_pair().clone()))
}

pub fn random_bytes(len: usize) -> Vec<u8> {
    let mut bytes = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}

/// Installs a test subscriber once; honours `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}
