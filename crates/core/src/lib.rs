//! Core types and traits for worldstate
//!
//! This crate defines the foundational pieces used throughout the system:
//! - StateKey: Composite key (family + id) with range-friendly ordering
//! - Key validation rules (non-empty, no NUL, reserved prefix, length)
//! - Canonical encoding: order-independent JSON bytes
//! - Error: Error type hierarchy
//! - Traits: StateBackend, the persistence substrate seam

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod canonical;
pub mod error;
pub mod key;
pub mod traits;

// Re-export commonly used types and traits
pub use canonical::{canonicalize, to_canonical_json};
pub use error::{Error, Result};
pub use key::{validate_id, KeyError, StateKey, MAX_ID_BYTES, RESERVED_PREFIX};
pub use traits::StateBackend;
