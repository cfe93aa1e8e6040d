//! Command enum defining all ledger operations.
//!
//! Commands are the "instruction set" of the ledger. Every operation a
//! transport layer can invoke is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for cross-language use
//! - **Pure data**: No closures or executable code
//!
//! Transports that carry named operations with positional string
//! arguments go through [`Command::from_invocation`].

use serde::{Deserialize, Serialize};

use worldstate_core::{Error, Result};

/// A command is a self-contained, serializable operation.
///
/// # Operations
///
/// | Operation | Args | Returns |
/// |-----------|------|---------|
/// | InitLedger | — | `Output::Unit` |
/// | CreateAsset | id, flavor, size, client, cone, value | `Output::Record` |
/// | ReadAsset | id | `Output::Record` |
/// | UpdateAsset | id, flavor | `Output::Unit` |
/// | DeleteAsset | id | `Output::Unit` |
/// | AssetExists | id | `Output::Bool` |
/// | TransferAsset | id, newOwner | `Output::Owner` |
/// | GetAllAssets | — | `Output::Records` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Populate the fixed seed set of records.
    InitLedger,

    /// Create a new asset. Fails if the id is already live.
    CreateAsset {
        /// Unique record id
        id: String,
        /// Flavor of the asset
        flavor: String,
        /// Size class
        size: String,
        /// Initial owner
        client: String,
        /// Container type
        cone: String,
        /// Appraised numeric value
        value: u64,
    },

    /// Read an asset's canonical bytes.
    ReadAsset {
        /// Record id
        id: String,
    },

    /// Overwrite an asset's flavor, preserving every other field.
    UpdateAsset {
        /// Record id
        id: String,
        /// Replacement flavor
        flavor: String,
    },

    /// Delete an asset. Fails if the id is absent.
    DeleteAsset {
        /// Record id
        id: String,
    },

    /// Check whether an asset is live.
    AssetExists {
        /// Record id
        id: String,
    },

    /// Transfer an asset to a new owner; returns the previous owner.
    TransferAsset {
        /// Record id
        id: String,
        /// Replacement owner
        new_owner: String,
    },

    /// List every asset in ascending key order.
    GetAllAssets,
}

impl Command {
    /// Build a command from a named operation and positional string args
    ///
    /// This is the surface a transport layer marshals calls through.
    /// Unknown names, wrong arity, and unparseable numeric arguments all
    /// fail with [`Error::InvalidArgument`].
    ///
    /// # Examples
    ///
    /// ```
    /// use worldstate_ledger::Command;
    ///
    /// let cmd = Command::from_invocation("TransferAsset", &["icecream1", "Maria"]).unwrap();
    /// assert_eq!(
    ///     cmd,
    ///     Command::TransferAsset {
    ///         id: "icecream1".into(),
    ///         new_owner: "Maria".into(),
    ///     }
    /// );
    /// ```
    pub fn from_invocation(name: &str, args: &[&str]) -> Result<Command> {
        match name {
            "InitLedger" => {
                expect_arity(name, args, 0)?;
                Ok(Command::InitLedger)
            }
            "CreateAsset" => {
                expect_arity(name, args, 6)?;
                let value = args[5].parse::<u64>().map_err(|_| {
                    Error::InvalidArgument(format!("CreateAsset: value '{}' is not a number", args[5]))
                })?;
                Ok(Command::CreateAsset {
                    id: args[0].to_string(),
                    flavor: args[1].to_string(),
                    size: args[2].to_string(),
                    client: args[3].to_string(),
                    cone: args[4].to_string(),
                    value,
                })
            }
            "ReadAsset" => {
                expect_arity(name, args, 1)?;
                Ok(Command::ReadAsset {
                    id: args[0].to_string(),
                })
            }
            "UpdateAsset" => {
                expect_arity(name, args, 2)?;
                Ok(Command::UpdateAsset {
                    id: args[0].to_string(),
                    flavor: args[1].to_string(),
                })
            }
            "DeleteAsset" => {
                expect_arity(name, args, 1)?;
                Ok(Command::DeleteAsset {
                    id: args[0].to_string(),
                })
            }
            "AssetExists" => {
                expect_arity(name, args, 1)?;
                Ok(Command::AssetExists {
                    id: args[0].to_string(),
                })
            }
            "TransferAsset" => {
                expect_arity(name, args, 2)?;
                Ok(Command::TransferAsset {
                    id: args[0].to_string(),
                    new_owner: args[1].to_string(),
                })
            }
            "GetAllAssets" => {
                expect_arity(name, args, 0)?;
                Ok(Command::GetAllAssets)
            }
            unknown => Err(Error::InvalidArgument(format!(
                "unknown operation '{unknown}'"
            ))),
        }
    }
}

fn expect_arity(name: &str, args: &[&str], expected: usize) -> Result<()> {
    if args.len() != expected {
        return Err(Error::InvalidArgument(format!(
            "{name} takes {expected} argument(s), got {}",
            args.len()
        )));
    }
    Ok(())
}
