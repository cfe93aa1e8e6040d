//! Output types returned by command execution.
//!
//! Every [`crate::Command`] produces exactly one `Output` variant. The
//! typed form is what embedding callers consume; [`Output::render`]
//! produces the wire payload a transport marshals back (canonical JSON
//! text, a boolean, a scalar string, or a JSON array).

use serde::{Deserialize, Serialize};

use worldstate_core::Result;

use crate::asset::ScanEntry;

/// Result of executing a command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (init, update, delete)
    Unit,

    /// Boolean result (existence checks)
    Bool(bool),

    /// Canonical record bytes (create, read)
    Record(Vec<u8>),

    /// Previous owner of a transferred asset — the one scalar return
    Owner(String),

    /// Full-scan result in ascending key order
    Records(Vec<ScanEntry>),
}

impl Output {
    /// Render the wire payload for this output
    ///
    /// Returns `None` for side-effect-only operations. Record bytes are
    /// passed through verbatim (they are already canonical JSON text);
    /// scan results serialize to a JSON array with decoded records as
    /// objects and raw payloads as strings.
    ///
    /// # Errors
    ///
    /// Returns an error if a scan result fails to serialize.
    pub fn render(&self) -> Result<Option<String>> {
        match self {
            Output::Unit => Ok(None),
            Output::Bool(flag) => Ok(Some(flag.to_string())),
            Output::Record(bytes) => Ok(Some(String::from_utf8_lossy(bytes).into_owned())),
            Output::Owner(owner) => Ok(Some(owner.clone())),
            Output::Records(entries) => Ok(Some(serde_json::to_string(entries)?)),
        }
    }
}
