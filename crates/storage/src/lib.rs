//! Storage layer for worldstate
//!
//! This crate implements the in-memory persistence substrate:
//! - MemoryStore: BTreeMap-based StateBackend with RwLock

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::MemoryStore;
