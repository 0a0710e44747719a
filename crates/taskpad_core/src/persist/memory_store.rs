//! In-memory state store.
//!
//! Backs tests and smoke runs with the same contract as the durable store.
//! Interior mutability keeps the `StateStore` trait read-signature friendly;
//! the single-threaded event model never shares a store across threads.

use super::{PersistResult, StateStore};
use std::cell::RefCell;
use std::collections::HashMap;

/// Volatile key-value store living entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStateStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the payload currently stored under `key`.
    ///
    /// Lets tests assert on the exact persisted bytes.
    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StateStore for MemoryStateStore {
    fn load(&self, key: &str) -> PersistResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, payload: &str) -> PersistResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), payload.to_string());
        Ok(())
    }
}
