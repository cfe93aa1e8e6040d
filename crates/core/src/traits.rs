//! Storage abstraction for the persistence substrate
//!
//! This module defines the StateBackend trait that the record store is
//! written against. Swapping the backing implementation (in-memory map,
//! embedded database, remote state service) must not break upper layers.

use crate::error::Result;
use crate::key::StateKey;

/// Persistence substrate for the world-state store
///
/// Provides the durable key-value primitives the deterministic record
/// store is built on: point get/put/delete plus an ordered family scan.
///
/// Correctness against concurrent writers to the same key (compare-and-
/// swap, read-set versioning at commit time) is the substrate's concern,
/// not this trait's: each method is a single bounded operation and no
/// method spans multiple keys atomically.
///
/// Thread safety: all methods must be safe to call concurrently from
/// multiple threads (requires Send + Sync).
pub trait StateBackend: Send + Sync {
    /// Get the current value for a key
    ///
    /// Returns None if the key doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn get(&self, key: &StateKey) -> Result<Option<Vec<u8>>>;

    /// Put a key-value pair, overwriting any existing value
    ///
    /// Last write wins; the substrate holds exactly one current value
    /// per key.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn put(&self, key: StateKey, value: Vec<u8>) -> Result<()>;

    /// Delete a key entirely
    ///
    /// Returns the deleted value if it existed. Subsequent gets reflect
    /// absence; there is no soft delete.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn delete(&self, key: &StateKey) -> Result<Option<Vec<u8>>>;

    /// Scan all entries of a schema family
    ///
    /// Returns a point-in-time view of the family's entries in ascending
    /// lexicographic key order. The result is finite and single-pass;
    /// re-invoking the scan observes later writes.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn scan_family(&self, family: &str) -> Result<Vec<(StateKey, Vec<u8>)>>;
}
