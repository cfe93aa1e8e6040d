//! worldstate - Deterministic world-state record store
//!
//! worldstate is the storage primitive a ledger-like replicated state
//! machine sits on top of: a key-value record store whose persisted byte
//! form is canonical (order-independent), with existence-checked
//! mutation and ordered range iteration.
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use worldstate::{Executor, MemoryStore};
//!
//! let exec = Executor::new(Arc::new(MemoryStore::new()));
//! exec.invoke("InitLedger", &[]).unwrap();
//!
//! let owner = exec.invoke("TransferAsset", &["icecream1", "Maria"]).unwrap();
//! assert_eq!(owner.render().unwrap().unwrap(), "Paola");
//! ```
//!
//! # Architecture
//!
//! Operations go through the [`Executor`], which dispatches [`Command`]s
//! against an [`AssetStore`] facade over a pluggable [`StateBackend`].
//! Consensus, endorsement, and conflict detection between concurrent
//! writers belong to the surrounding platform, not this core.

pub use worldstate_core::{
    canonicalize, to_canonical_json, validate_id, Error, KeyError, Result, StateBackend, StateKey,
};
pub use worldstate_ledger::{Asset, AssetStore, Command, Executor, Output, ScanEntry, ASSET_FAMILY};
pub use worldstate_storage::MemoryStore;
