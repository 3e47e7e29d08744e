//! Configuration of a test session: the chain to connect to and the test
//! accounts. Both are read from JSON files, in the format of
//! `configs/chain_config.json` and `configs/test_accounts.json`.
//!
//! ```json
//! {
//!   "prefix": "stars",
//!   "grpc_endpoint": "http://localhost:9090",
//!   "gas_prices": "0.025",
//!   "denom": "ustars",
//!   "artifacts_path": "artifacts"
//! }
//! ```
use crate::types::{Decimal, GasPrice};
use serde::{Deserialize, Serialize};
use std::{
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;
use tonic::transport::Endpoint;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not parse {}: {source}", path.display())]
    Parse {
        path:   PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Invalid endpoint \"{0}\": only http and https URLs are supported.")]
    InvalidEndpoint(String),
    #[error("Invalid endpoint: {0}")]
    Transport(#[from] tonic::transport::Error),
}

fn default_cache_path() -> PathBuf { PathBuf::from("tmp/test_cache.json") }

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainConfig {
    /// Bech32 prefix of account addresses.
    pub prefix:             String,
    pub grpc_endpoint:      String,
    /// Price of a unit of gas in [`denom`](Self::denom).
    pub gas_prices:         Decimal,
    pub denom:              String,
    /// Directory containing the compiled `.wasm` contracts.
    pub artifacts_path:     PathBuf,
    /// Where the contract registry is persisted between sessions.
    #[serde(default = "default_cache_path")]
    pub cache_path:         PathBuf,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_ms: Option<u64>,
    /// Verify artifacts against `checksums.txt` in the artifacts directory
    /// before uploading them.
    #[serde(default)]
    pub verify_checksums:   bool,
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let data = tokio::fs::read(path)
        .await
        .map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
    serde_json::from_slice(&data).map_err(|source| ConfigError::Parse {
        path: path.to_owned(),
        source,
    })
}

impl ChainConfig {
    pub async fn from_file(path: &Path) -> Result<Self, ConfigError> { read_json(path).await }

    /// The gRPC endpoint with the request timeout applied. Fails unless the
    /// endpoint is an http or https URL.
    pub fn endpoint(&self) -> Result<Endpoint, ConfigError> {
        let uri: http::Uri = self
            .grpc_endpoint
            .parse()
            .map_err(|_| ConfigError::InvalidEndpoint(self.grpc_endpoint.clone()))?;
        match uri.scheme_str() {
            Some("http") | Some("https") if uri.host().is_some() => {}
            _ => return Err(ConfigError::InvalidEndpoint(self.grpc_endpoint.clone())),
        }
        let endpoint = Endpoint::from_shared(self.grpc_endpoint.clone())?;
        Ok(match self.request_timeout_ms {
            Some(ms) => endpoint.timeout(Duration::from_millis(ms)),
            None => endpoint,
        })
    }

    pub fn gas_price(&self) -> GasPrice {
        GasPrice {
            amount: self.gas_prices,
            denom:  self.denom.clone(),
        }
    }

    /// Location of the checksum file of the artifacts.
    pub fn checksums_path(&self) -> PathBuf { self.artifacts_path.join("checksums.txt") }
}

/// An account whose keys are available to the signing connection.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestAccount {
    pub name:     String,
    pub address:  String,
    pub mnemonic: String,
}

impl std::fmt::Debug for TestAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestAccount")
            .field("name", &self.name)
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}

impl TestAccount {
    pub async fn load_all(path: &Path) -> Result<Vec<Self>, ConfigError> { read_json(path).await }
}
