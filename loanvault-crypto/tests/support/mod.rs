//! Shared fixtures for crypto integration tests.

#![allow(dead_code)]

use loanvault_crypto::{ReceiptKeyPair, generate_key_pair};
use std::sync::OnceLock;

static PAIR_A: OnceLock<ReceiptKeyPair> = OnceLock::new();
static PAIR_B: OnceLock<ReceiptKeyPair> = OnceLock::new();

/// A 2048-bit key pair generated once per test binary.
pub fn key_pair() -> &'static ReceiptKeyPair {
    PAIR_A.get_or_init(|| generate_key_pair().unwrap())
}

/// A second, unrelated key pair for wrong-key tests.
pub fn other_key_pair() -> &'static ReceiptKeyPair {
    PAIR_B.get_or_init(|| generate_key_pair().unwrap())
}
