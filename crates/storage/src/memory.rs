//! MemoryStore: in-memory storage backend
//!
//! This module implements the StateBackend trait using:
//! - `BTreeMap<StateKey, Vec<u8>>` for ordered key storage
//! - `parking_lot::RwLock` for thread-safe access
//!
//! # Design Notes
//!
//! - **No version history**: each key stores only its latest value
//! - **Scan consistency**: a family scan collects its range under one
//!   read lock acquisition, so it observes a point-in-time view and no
//!   partial interleaving with concurrent writers

use std::collections::BTreeMap;

use parking_lot::RwLock;
use tracing::trace;

use worldstate_core::{Result, StateBackend, StateKey};

/// In-memory storage backend using BTreeMap with RwLock
///
/// Implements the StateBackend trait. Thread-safe through
/// `parking_lot::RwLock`; the map's key ordering (family → id) gives
/// family scans for free as a contiguous range.
#[derive(Debug, Default)]
pub struct MemoryStore {
    data: RwLock<BTreeMap<StateKey, Vec<u8>>>,
}

impl MemoryStore {
    /// Create a new empty MemoryStore
    pub fn new() -> Self {
        Self {
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of live entries across all families
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }
}

impl StateBackend for MemoryStore {
    fn get(&self, key: &StateKey) -> Result<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put(&self, key: StateKey, value: Vec<u8>) -> Result<()> {
        trace!(key = %key, bytes = value.len(), "put");
        self.data.write().insert(key, value);
        Ok(())
    }

    fn delete(&self, key: &StateKey) -> Result<Option<Vec<u8>>> {
        trace!(key = %key, "delete");
        Ok(self.data.write().remove(key))
    }

    fn scan_family(&self, family: &str) -> Result<Vec<(StateKey, Vec<u8>)>> {
        let data = self.data.read();
        // Family ranges are contiguous: the empty id is the smallest key
        // in a family, and iteration stops at the first foreign key.
        let start = StateKey::new(family, "");
        let entries = data
            .range(start..)
            .take_while(|(key, _)| key.family == family)
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();
        Ok(entries)
    }
}
