//! AssetStore: the deterministic record store facade
//!
//! ## Design
//!
//! AssetStore is a stateless facade: it holds only an
//! `Arc<dyn StateBackend>` reference. Every operation takes a single
//! bounded trip (or one ordered scan) against the backend; the backend
//! handle is injected explicitly rather than threaded through an ambient
//! transaction context.
//!
//! ## Consistency
//!
//! Create and update perform a read-then-write sequence without an
//! explicit lock; protection against concurrent writers to the same key
//! is the substrate's concern (compare-and-swap or read-set validation
//! at commit time). Within this core every write persists canonical
//! bytes, so independently executing replicas produce byte-identical
//! state for the same logical operation.

use std::sync::Arc;

use tracing::{debug, warn};

use worldstate_core::{to_canonical_json, validate_id, Error, Result, StateBackend, StateKey};

use crate::asset::{Asset, ScanEntry, ASSET_FAMILY};

/// Deterministic record store for assets
///
/// Stateless facade over a [`StateBackend`]; multiple AssetStore
/// instances over the same backend are safe.
#[derive(Clone)]
pub struct AssetStore {
    backend: Arc<dyn StateBackend>,
}

impl AssetStore {
    /// Create a new AssetStore over the given backend
    pub fn new(backend: Arc<dyn StateBackend>) -> Self {
        Self { backend }
    }

    /// The underlying backend handle
    pub fn backend(&self) -> &Arc<dyn StateBackend> {
        &self.backend
    }

    fn key_for(id: &str) -> StateKey {
        StateKey::new(ASSET_FAMILY, id)
    }

    /// Create a new asset record
    ///
    /// Fails with [`Error::AlreadyExists`] if a record is already live
    /// under the asset's id. On success exactly one write hits the
    /// backing key space and the canonical bytes that were persisted are
    /// returned.
    pub fn create(&self, asset: Asset) -> Result<Vec<u8>> {
        validate_id(&asset.id)?;
        if self.exists(&asset.id)? {
            return Err(Error::AlreadyExists {
                id: asset.id.clone(),
            });
        }

        let bytes = to_canonical_json(&asset)?;
        debug!(id = %asset.id, "create asset");
        self.backend.put(asset.key(), bytes.clone())?;
        Ok(bytes)
    }

    /// Read the raw canonical bytes of an asset record
    ///
    /// Fails with [`Error::NotFound`] if the key is absent or holds a
    /// zero-length value. The caller decodes.
    pub fn read(&self, id: &str) -> Result<Vec<u8>> {
        match self.backend.get(&Self::key_for(id))? {
            Some(bytes) if !bytes.is_empty() => Ok(bytes),
            _ => Err(Error::NotFound { id: id.to_string() }),
        }
    }

    /// Read and decode an asset record
    pub fn read_decoded(&self, id: &str) -> Result<Asset> {
        let bytes = self.read(id)?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Overwrite an asset's flavor, preserving every other field
    ///
    /// This is a whole-record overwrite, not a storage-layer patch: the
    /// stored record is re-read, the replacement record is built from the
    /// new flavor plus the previously stored size, client, cone, and
    /// value, and the result is re-encoded canonically.
    pub fn update(&self, id: &str, flavor: &str) -> Result<()> {
        if !self.exists(id)? {
            return Err(Error::NotFound { id: id.to_string() });
        }
        let current = self.read_decoded(id)?;

        let updated = Asset::new(
            id,
            flavor,
            current.size,
            current.client,
            current.cone,
            current.value,
        );
        let bytes = to_canonical_json(&updated)?;
        debug!(id = %id, flavor = %flavor, "update asset");
        self.backend.put(updated.key(), bytes)?;
        Ok(())
    }

    /// Delete an asset record
    ///
    /// Fails with [`Error::NotFound`] if no record is live under the id.
    pub fn delete(&self, id: &str) -> Result<()> {
        if !self.exists(id)? {
            return Err(Error::NotFound { id: id.to_string() });
        }
        debug!(id = %id, "delete asset");
        self.backend.delete(&Self::key_for(id))?;
        Ok(())
    }

    /// Whether a record is live under the id
    ///
    /// Absent and zero-length values both count as non-existent. The
    /// check never deserializes the payload.
    pub fn exists(&self, id: &str) -> Result<bool> {
        Ok(self
            .backend
            .get(&Self::key_for(id))?
            .is_some_and(|bytes| !bytes.is_empty()))
    }

    /// Transfer ownership of an asset
    ///
    /// Decodes the record, overwrites its `client` field with the new
    /// owner, re-encodes canonically, and writes back. Returns the owner
    /// that was current before the call; an absent record surfaces as
    /// the underlying read's [`Error::NotFound`].
    pub fn transfer(&self, id: &str, new_owner: &str) -> Result<String> {
        let mut asset = self.read_decoded(id)?;
        let previous_owner = std::mem::replace(&mut asset.client, new_owner.to_string());

        let bytes = to_canonical_json(&asset)?;
        debug!(id = %id, from = %previous_owner, to = %new_owner, "transfer asset");
        self.backend.put(asset.key(), bytes)?;
        Ok(previous_owner)
    }

    /// List every asset record in ascending key order
    ///
    /// Performs one ordered scan over the asset family. Each payload is
    /// parsed as a record; a payload that fails parsing degrades to
    /// [`ScanEntry::Raw`] instead of aborting the scan.
    pub fn list_all(&self) -> Result<Vec<ScanEntry>> {
        let entries = self.backend.scan_family(ASSET_FAMILY)?;
        let records = entries
            .into_iter()
            .map(|(key, bytes)| match serde_json::from_slice(&bytes) {
                Ok(asset) => ScanEntry::Decoded(asset),
                Err(err) => {
                    warn!(key = %key, error = %err, "malformed record, keeping raw payload");
                    ScanEntry::Raw(String::from_utf8_lossy(&bytes).into_owned())
                }
            })
            .collect();
        Ok(records)
    }

    /// Populate the fixed seed set of records
    ///
    /// Writes the nine seed assets unconditionally (canonical puts), so
    /// re-running the operation refreshes them to their seeded values.
    pub fn init_ledger(&self) -> Result<()> {
        for asset in seed_assets() {
            let bytes = to_canonical_json(&asset)?;
            self.backend.put(asset.key(), bytes)?;
        }
        debug!("ledger seeded");
        Ok(())
    }
}

/// The fixed seed set written by init_ledger
fn seed_assets() -> Vec<Asset> {
    vec![
        Asset::new("icecream1", "chocolate", "small", "Paola", "waffle", 300),
        Asset::new("icecream2", "vanilla", "medium", "Bruno", "sugar", 400),
        Asset::new("icecream3", "pistachio", "large", "Chiara", "cake", 500),
        Asset::new("icecream4", "stracciatella", "small", "Marco", "waffle", 600),
        Asset::new("icecream5", "lemon", "medium", "Giulia", "sugar", 700),
        Asset::new("icecream6", "hazelnut", "large", "Dario", "cake", 800),
        Asset::new("icecream7", "mango", "small", "Elena", "waffle", 900),
        Asset::new("icecream8", "coffee", "medium", "Luca", "sugar", 1000),
        Asset::new("icecream9", "raspberry", "large", "Sofia", "cake", 1100),
    ]
}
