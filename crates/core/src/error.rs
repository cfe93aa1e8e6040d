//! Error types for the worldstate store
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::key::KeyError;
use thiserror::Error;

/// Result type alias for worldstate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the worldstate store
///
/// All errors are returned synchronously to the immediate caller;
/// nothing is retried internally.
#[derive(Debug, Error)]
pub enum Error {
    /// A record already exists under the given id (create on a live key)
    #[error("record {id} already exists")]
    AlreadyExists {
        /// The id that was already present
        id: String,
    },

    /// No record exists under the given id
    #[error("record {id} does not exist")]
    NotFound {
        /// The id that was absent
        id: String,
    },

    /// A stored payload failed structured-text parsing
    ///
    /// Surfaced on read/update/transfer paths. The list operation
    /// recovers locally by substituting the raw payload instead.
    #[error("decode error: {0}")]
    Decode(String),

    /// Key validation failure
    #[error("invalid key: {0}")]
    InvalidKey(#[from] KeyError),

    /// Malformed operation invocation (unknown name, arity, argument parse)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Persistence substrate failure
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Decode(e.to_string())
    }
}
