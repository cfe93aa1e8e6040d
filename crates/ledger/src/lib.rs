//! Asset ledger layer for worldstate
//!
//! This crate implements the deterministic record store over a
//! [`worldstate_core::StateBackend`]:
//! - Asset: the tracked record type with its schema-family tag
//! - AssetStore: existence-checked CRUD, ownership transfer, ordered scan
//! - Command/Output/Executor: the named-operation surface a transport
//!   layer marshals calls through

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod asset;
pub mod command;
pub mod executor;
pub mod output;
pub mod store;

pub use asset::{Asset, ScanEntry, ASSET_FAMILY};
pub use command::Command;
pub use executor::Executor;
pub use output::Output;
pub use store::AssetStore;
