//! Asset: the tracked record type
//!
//! An Asset is one tracked entity in the world state. Its `docType` field
//! is a literal schema-family tag stored inside the record itself, so a
//! future scan over a store shared by several record types can
//! disambiguate them. The same tag doubles as the key family under which
//! assets are stored.

use serde::{Deserialize, Serialize};
use worldstate_core::StateKey;

/// Schema-family tag for asset records
///
/// Stored as the `docType` field of every asset and used as the key
/// family for scans.
pub const ASSET_FAMILY: &str = "asset";

/// One tracked entity in the world state
///
/// The id is caller-assigned and immutable after creation. All other
/// fields are caller-supplied values; `client` is the ownership field
/// changed by transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Asset {
    /// Schema-family tag (always [`ASSET_FAMILY`])
    #[serde(rename = "docType")]
    pub doc_type: String,
    /// Unique record id, assigned by the caller
    #[serde(rename = "ID")]
    pub id: String,
    /// Flavor of the asset
    pub flavor: String,
    /// Size class
    pub size: String,
    /// Current owner (the ownership field)
    pub client: String,
    /// Container type
    pub cone: String,
    /// Appraised numeric value
    pub value: u64,
}

impl Asset {
    /// Create an asset with the schema-family tag filled in
    pub fn new(
        id: impl Into<String>,
        flavor: impl Into<String>,
        size: impl Into<String>,
        client: impl Into<String>,
        cone: impl Into<String>,
        value: u64,
    ) -> Self {
        Self {
            doc_type: ASSET_FAMILY.to_string(),
            id: id.into(),
            flavor: flavor.into(),
            size: size.into(),
            client: client.into(),
            cone: cone.into(),
            value,
        }
    }

    /// Storage key for this asset
    pub fn key(&self) -> StateKey {
        StateKey::new(ASSET_FAMILY, &self.id)
    }
}

/// One entry produced by a full scan
///
/// A malformed stored payload does not abort the scan: it degrades to
/// the raw text instead of a decoded record. Serde's untagged
/// representation renders `Decoded` entries as JSON objects and `Raw`
/// entries as JSON strings inside the same array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScanEntry {
    /// Payload parsed as a well-formed asset record
    Decoded(Asset),
    /// Payload that failed parsing, carried verbatim
    Raw(String),
}

impl ScanEntry {
    /// The decoded asset, if this entry parsed
    pub fn as_asset(&self) -> Option<&Asset> {
        match self {
            ScanEntry::Decoded(asset) => Some(asset),
            ScanEntry::Raw(_) => None,
        }
    }
}
