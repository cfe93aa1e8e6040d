//! Keys and key validation for worldstate
//!
//! A [`StateKey`] combines a schema-family tag with a caller-assigned id.
//! Ordering is family → id, so all records of one family form a single
//! contiguous lexicographic range in an ordered store, and a family scan
//! is an ordinary range query.
//!
//! ## Validation contract
//!
//! Record ids are Unicode strings with the following frozen rules:
//! - Ids must be valid UTF-8 (guaranteed by Rust's &str type)
//! - Ids must not be empty
//! - Ids must not contain NUL bytes (\0)
//! - Ids must not start with the reserved prefix `_state/`
//! - Ids must not exceed [`MAX_ID_BYTES`]

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Reserved system prefix for internal keys
pub const RESERVED_PREFIX: &str = "_state/";

/// Maximum record id length in bytes
pub const MAX_ID_BYTES: usize = 1024;

/// Validate a record id
///
/// This is the primary validation function for user-facing APIs.
/// It validates all id rules: non-empty, no NUL, no reserved prefix, length.
///
/// # Examples
///
/// ```
/// use worldstate_core::key::validate_id;
///
/// // Valid ids
/// assert!(validate_id("icecream1").is_ok());
/// assert!(validate_id("asset:42").is_ok());
///
/// // Invalid ids
/// assert!(validate_id("").is_err()); // empty
/// assert!(validate_id("a\x00b").is_err()); // contains NUL
/// assert!(validate_id("_state/internal").is_err()); // reserved prefix
/// ```
pub fn validate_id(id: &str) -> Result<(), KeyError> {
    // Rule 1: Id cannot be empty
    if id.is_empty() {
        return Err(KeyError::Empty);
    }

    // Rule 2: Id cannot contain NUL bytes
    if id.contains('\x00') {
        return Err(KeyError::ContainsNul);
    }

    // Rule 3: Id cannot use reserved prefix
    if id.starts_with(RESERVED_PREFIX) {
        return Err(KeyError::ReservedPrefix);
    }

    // Rule 4: Id cannot exceed max length
    let len = id.len();
    if len > MAX_ID_BYTES {
        return Err(KeyError::TooLong {
            actual: len,
            max: MAX_ID_BYTES,
        });
    }

    Ok(())
}

/// Key validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    /// Id is empty (length 0)
    #[error("id cannot be empty")]
    Empty,

    /// Id contains NUL byte (\0)
    #[error("id cannot contain NUL bytes")]
    ContainsNul,

    /// Id uses reserved system prefix `_state/`
    #[error("id cannot use reserved prefix '{}'", RESERVED_PREFIX)]
    ReservedPrefix,

    /// Id exceeds maximum length
    #[error("id too long: {actual} bytes exceeds maximum {max}")]
    TooLong {
        /// Actual id length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}

/// Composite key for the world-state store
///
/// A StateKey combines a schema-family tag with the record's
/// caller-assigned id. The family acts as a namespace within a larger
/// store: every record of one schema family shares the same family tag.
///
/// # Ordering
///
/// Keys are ordered by: family → id
///
/// This ordering is what makes range scans work against a BTreeMap:
/// - All keys of one family are grouped together
/// - Within a family, keys are in ascending lexicographic id order
///
/// # Examples
///
/// ```
/// use worldstate_core::StateKey;
///
/// let a = StateKey::new("asset", "icecream1");
/// let b = StateKey::new("asset", "icecream2");
/// assert!(a < b);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StateKey {
    /// Schema-family tag (scan namespace)
    pub family: String,
    /// Caller-assigned record id
    pub id: String,
}

impl StateKey {
    /// Create a new key with the given family and id
    pub fn new(family: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            id: id.into(),
        }
    }
}

impl fmt::Display for StateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.family, self.id)
    }
}
