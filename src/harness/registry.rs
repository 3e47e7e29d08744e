//! The contract registry of a test session: code ids and instance addresses
//! per logical contract name, e.g., [`MARKETPLACE`](crate::constants::contract_keys::MARKETPLACE).
//!
//! A registry is either filled by a fresh deployment
//! (`Uninitialized → Uploading → Instantiating → Ready`) or loaded from the
//! cache file written by an earlier deployment.
use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// How a ready registry was filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitMode {
    /// Contracts were uploaded and instantiated by this session.
    Fresh,
    /// Contracts were loaded from the cache file.
    Hydrated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    Uninitialized,
    Uploading,
    Instantiating,
    Ready(InitMode),
}

impl RegistryState {
    pub fn is_ready(self) -> bool { matches!(self, RegistryState::Ready(_)) }

    /// Whether code ids and addresses may be looked up. Instantiation reads
    /// the addresses of contracts instantiated before.
    fn allows_lookup(self) -> bool {
        matches!(self, RegistryState::Instantiating | RegistryState::Ready(_))
    }
}

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("The registry is not ready, it is in state {0:?}.")]
    NotReady(RegistryState),
    #[error("Cannot {operation} in state {state:?}.")]
    InvalidTransition {
        state:     RegistryState,
        operation: &'static str,
    },
    #[error("No code id is known for contract {0}.")]
    UnknownCodeId(String),
    #[error("No address is known for contract {name} at index {index}.")]
    UnknownContract { name: String, index: usize },
    #[error("Cache file {} does not exist.", .0.display())]
    CacheNotFound(PathBuf),
    #[error("Could not access the cache file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed cache file: {0}")]
    Json(#[from] serde_json::Error),
}

/// The on-disk format of the registry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct RegistryCache {
    #[serde(rename = "codeIds", default)]
    code_ids:  BTreeMap<String, u64>,
    #[serde(default)]
    contracts: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContractRegistry {
    state: RegistryState,
    cache: RegistryCache,
}

impl Default for ContractRegistry {
    fn default() -> Self { Self::new() }
}

impl ContractRegistry {
    pub fn new() -> Self {
        Self {
            state: RegistryState::Uninitialized,
            cache: RegistryCache::default(),
        }
    }

    pub fn state(&self) -> RegistryState { self.state }

    fn transition(
        &mut self,
        from: RegistryState,
        to: RegistryState,
        operation: &'static str,
    ) -> Result<(), RegistryError> {
        if self.state != from {
            return Err(RegistryError::InvalidTransition {
                state: self.state,
                operation,
            });
        }
        self.state = to;
        Ok(())
    }

    /// Start a fresh deployment.
    pub fn begin_upload(&mut self) -> Result<(), RegistryError> {
        self.transition(
            RegistryState::Uninitialized,
            RegistryState::Uploading,
            "begin uploading",
        )
    }

    pub fn begin_instantiation(&mut self) -> Result<(), RegistryError> {
        self.transition(
            RegistryState::Uploading,
            RegistryState::Instantiating,
            "begin instantiating",
        )
    }

    pub fn finish_deployment(&mut self) -> Result<(), RegistryError> {
        self.transition(
            RegistryState::Instantiating,
            RegistryState::Ready(InitMode::Fresh),
            "finish deploying",
        )
    }

    /// Record the code id of an uploaded contract. Only valid while
    /// uploading.
    pub fn set_code_id(&mut self, name: impl Into<String>, code_id: u64) -> Result<(), RegistryError> {
        if self.state != RegistryState::Uploading {
            return Err(RegistryError::InvalidTransition {
                state:     self.state,
                operation: "set a code id",
            });
        }
        self.cache.code_ids.insert(name.into(), code_id);
        Ok(())
    }

    /// Append an instance address to the list of `name`. Earlier addresses
    /// keep their index.
    pub fn add_contract_address(
        &mut self,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<(), RegistryError> {
        if !self.state.allows_lookup() {
            return Err(RegistryError::InvalidTransition {
                state:     self.state,
                operation: "add a contract address",
            });
        }
        self.cache
            .contracts
            .entry(name.into())
            .or_default()
            .push(address.into());
        Ok(())
    }

    pub fn code_id(&self, name: &str) -> Result<u64, RegistryError> {
        if !self.state.allows_lookup() {
            return Err(RegistryError::NotReady(self.state));
        }
        match self.cache.code_ids.get(name) {
            Some(code_id) => Ok(*code_id),
            None => {
                tracing::warn!(
                    name,
                    code_ids = ?self.cache.code_ids,
                    "Code id lookup failed."
                );
                Err(RegistryError::UnknownCodeId(name.to_owned()))
            }
        }
    }

    /// The address of the `index`-th instance of `name`.
    pub fn contract_address(&self, name: &str, index: usize) -> Result<&str, RegistryError> {
        if !self.state.allows_lookup() {
            return Err(RegistryError::NotReady(self.state));
        }
        match self.cache.contracts.get(name).and_then(|v| v.get(index)) {
            Some(address) => Ok(address),
            None => {
                tracing::warn!(
                    name,
                    index,
                    contracts = ?self.cache.contracts,
                    "Contract address lookup failed."
                );
                Err(RegistryError::UnknownContract {
                    name: name.to_owned(),
                    index,
                })
            }
        }
    }

    /// The address of the first instance of `name`.
    pub fn first_address(&self, name: &str) -> Result<&str, RegistryError> {
        self.contract_address(name, 0)
    }

    /// All addresses of `name`, in the order they were added.
    pub fn contract_addresses(&self, name: &str) -> &[String] {
        self.cache
            .contracts
            .get(name)
            .map_or(&[][..], Vec::as_slice)
    }

    /// The logical name of the contract uploaded with `code_id`, if any.
    pub fn contract_key_by_code_id(&self, code_id: u64) -> Option<&str> {
        self.cache
            .code_ids
            .iter()
            .find(|(_, id)| **id == code_id)
            .map(|(name, _)| name.as_str())
    }

    pub fn code_ids(&self) -> &BTreeMap<String, u64> { &self.cache.code_ids }

    /// Write the registry to `path` as JSON, creating parent directories as
    /// needed.
    pub async fn persist(&self, path: &Path) -> Result<(), RegistryError> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        let data = serde_json::to_vec(&self.cache)?;
        tokio::fs::write(path, data).await?;
        tracing::info!(path = %path.display(), "Persisted contract registry.");
        Ok(())
    }

    /// Load a registry written by [`persist`](Self::persist). The result is
    /// ready for lookups.
    pub async fn hydrate(path: &Path) -> Result<Self, RegistryError> {
        let data = match tokio::fs::read(path).await {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(RegistryError::CacheNotFound(path.to_owned()))
            }
            Err(e) => return Err(e.into()),
        };
        let cache = serde_json::from_slice(&data)?;
        tracing::info!(path = %path.display(), "Loaded contract registry.");
        Ok(Self {
            state: RegistryState::Ready(InitMode::Hydrated),
            cache,
        })
    }
}
