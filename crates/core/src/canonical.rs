//! Canonical JSON encoding
//!
//! The persisted byte form of a record must be a function purely of its
//! field values: independent of field insertion order, object construction
//! order, or the host runtime's map iteration order. Two independent
//! processes applying the same logical write must produce byte-identical
//! output, which is what lets replicated peers agree on a state hash.
//!
//! The algorithm:
//! 1. Recursively sort all object keys, at every nesting level, in
//!    ascending lexicographic order.
//! 2. Serialize compactly (no whitespace), field order matching the
//!    sorted key order exactly.
//!
//! [`canonicalize`] is a pure function over `serde_json::Value` with no
//! storage or transaction concern.

use crate::error::Result;
use serde::Serialize;
use serde_json::{Map, Value};

/// Encode a JSON value into its canonical byte form
///
/// Object keys are sorted recursively before compact serialization, so
/// the output does not depend on how the value was constructed.
///
/// # Examples
///
/// ```
/// use worldstate_core::canonical::canonicalize;
/// use serde_json::json;
///
/// let v = json!({"b": 1, "a": {"d": 2, "c": 3}});
/// let bytes = canonicalize(&v).unwrap();
/// assert_eq!(bytes, br#"{"a":{"c":3,"d":2},"b":1}"#);
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn canonicalize(value: &Value) -> Result<Vec<u8>> {
    let sorted = sort_keys(value);
    Ok(serde_json::to_vec(&sorted)?)
}

/// Encode any serializable record into its canonical byte form
///
/// Convenience wrapper: converts the record to a `serde_json::Value`
/// first, then applies [`canonicalize`].
///
/// # Errors
///
/// Returns an error if the record cannot be represented as JSON.
pub fn to_canonical_json<T: Serialize>(record: &T) -> Result<Vec<u8>> {
    let value = serde_json::to_value(record)?;
    canonicalize(&value)
}

/// Recursively rebuild a value with all object keys in ascending order
///
/// Arrays keep their element order (position is meaningful); only object
/// key order is normalized.
fn sort_keys(value: &Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            let mut sorted = Map::new();
            for (key, val) in entries {
                sorted.insert(key.clone(), sort_keys(val));
            }
            Value::Object(sorted)
        }
        Value::Array(items) => Value::Array(items.iter().map(sort_keys).collect()),
        scalar => scalar.clone(),
    }
}
