//! Executor: dispatches commands against an AssetStore.
//!
//! The executor is the single entry point a transport layer drives.
//! Every operation that can be performed on the ledger goes through
//! [`Executor::execute`]; errors propagate synchronously so the caller
//! can decide whether the enclosing transaction aborts.

use std::sync::Arc;

use worldstate_core::{Result, StateBackend};

use crate::command::Command;
use crate::output::Output;
use crate::store::AssetStore;

/// Command dispatcher over an [`AssetStore`].
#[derive(Clone)]
pub struct Executor {
    store: AssetStore,
}

impl Executor {
    /// Create an executor over the given backend
    pub fn new(backend: Arc<dyn StateBackend>) -> Self {
        Self {
            store: AssetStore::new(backend),
        }
    }

    /// Create an executor over an existing store facade
    pub fn with_store(store: AssetStore) -> Self {
        Self { store }
    }

    /// The underlying store facade
    pub fn store(&self) -> &AssetStore {
        &self.store
    }

    /// Execute a single command
    ///
    /// # Errors
    ///
    /// Propagates the store's error taxonomy unchanged: `AlreadyExists`
    /// on duplicate create, `NotFound` on absent read/update/delete/
    /// transfer, `Decode` on corrupt payloads, `InvalidArgument` from
    /// malformed invocations.
    pub fn execute(&self, command: Command) -> Result<Output> {
        match command {
            Command::InitLedger => {
                self.store.init_ledger()?;
                Ok(Output::Unit)
            }
            Command::CreateAsset {
                id,
                flavor,
                size,
                client,
                cone,
                value,
            } => {
                let asset = crate::asset::Asset::new(id, flavor, size, client, cone, value);
                let bytes = self.store.create(asset)?;
                Ok(Output::Record(bytes))
            }
            Command::ReadAsset { id } => Ok(Output::Record(self.store.read(&id)?)),
            Command::UpdateAsset { id, flavor } => {
                self.store.update(&id, &flavor)?;
                Ok(Output::Unit)
            }
            Command::DeleteAsset { id } => {
                self.store.delete(&id)?;
                Ok(Output::Unit)
            }
            Command::AssetExists { id } => Ok(Output::Bool(self.store.exists(&id)?)),
            Command::TransferAsset { id, new_owner } => {
                Ok(Output::Owner(self.store.transfer(&id, &new_owner)?))
            }
            Command::GetAllAssets => Ok(Output::Records(self.store.list_all()?)),
        }
    }

    /// Parse and execute a named operation with positional string args
    ///
    /// Convenience for transports: combines [`Command::from_invocation`]
    /// with [`Executor::execute`].
    pub fn invoke(&self, name: &str, args: &[&str]) -> Result<Output> {
        self.execute(Command::from_invocation(name, args)?)
    }
}
