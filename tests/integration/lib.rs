//! Shared helpers for keyrack integration tests.

use std::sync::Arc;

use keyrack::{Keychain, MemoryStore};

/// A keychain over a fresh in-memory store.
pub fn memory_keychain() -> Keychain {
    Keychain::new(Arc::new(MemoryStore::new()))
}
