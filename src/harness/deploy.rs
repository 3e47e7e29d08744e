//! Fresh deployment of the name service: upload every artifact, instantiate
//! the contracts in dependency order, connect the marketplace to the minter
//! and the collection, and persist the resulting registry.
use super::{
    checksum::{self, ChecksumError},
    config::ChainConfig,
    registry::{ContractRegistry, RegistryError},
};
use crate::{
    chain::{BroadcastError, SigningConnection},
    constants::contract_keys::{
        INSTANTIATION_ORDER, MARKETPLACE, NAME_MINTER, SG721_NAME, WHITELIST_UPDATABLE,
    },
    contract_client::{ContractError, ExecuteOptions},
    marketplace::{self, NameMarketplaceClient},
    name_minter, sg721_name,
    types::{Decimal, Fee, InstantiateOptions, Uint128},
    whitelist,
};
use rand::Rng;
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("Could not access {}: {source}", path.display())]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No wasm artifacts found in {}.", .0.display())]
    NoArtifacts(PathBuf),
    #[error("Artifact verification failed: {0}")]
    Checksum(#[from] ChecksumError),
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
    #[error("Could not encode the instantiate message of {contract}: {source}")]
    Encode {
        contract: String,
        #[source]
        source:   serde_json::Error,
    },
    #[error("Could not {action} {contract}: {source}")]
    Broadcast {
        action:   &'static str,
        contract: String,
        #[source]
        source:   BroadcastError,
    },
    #[error("Could not set up the marketplace: {0}")]
    Setup(#[from] ContractError),
}

/// A compiled contract found in the artifacts directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Registry key, see [`artifact_key`].
    pub key:       String,
    pub file_name: String,
    pub path:      PathBuf,
}

/// The registry key of an artifact: the file name without the `.wasm`
/// extension and without the `-aarch64` marker of ARM builds.
pub fn artifact_key(file_name: &str) -> String {
    file_name.replace("-aarch64", "").replace(".wasm", "")
}

/// All `.wasm` files in `dir`, sorted by file name.
pub async fn discover_artifacts(dir: &Path) -> Result<Vec<Artifact>, DeployError> {
    let io_error = |source| DeployError::Io {
        path: dir.to_owned(),
        source,
    };
    let mut entries = tokio::fs::read_dir(dir).await.map_err(io_error)?;
    let mut artifacts = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(io_error)? {
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if file_name.ends_with(".wasm") {
            artifacts.push(Artifact {
                key: artifact_key(&file_name),
                path: entry.path(),
                file_name,
            });
        }
    }
    artifacts.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(artifacts)
}

/// Parameters of the deployed contracts that are not determined by the
/// deployment itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentParams {
    pub trading_fee_bps:        u64,
    pub min_price:              Uint128,
    /// Seconds an ask must stay listed before it can be removed.
    pub ask_interval:           u64,
    pub max_renewals_per_block: u32,
    pub valid_bid_query_limit:  u32,
    /// Seconds before expiry during which a name can be renewed.
    pub renew_window:           u64,
    pub renewal_bid_percentage: Decimal,
    pub per_address_limit:      u32,
    pub mint_discount_bps:      Option<u64>,
    pub min_name_length:        u32,
    pub max_name_length:        u32,
    pub base_price:             Uint128,
    pub fair_burn_bps:          u64,
    pub collection_name:        String,
    pub collection_symbol:      String,
    pub collection_description: String,
    pub collection_image:       String,
    /// Instantiate at predictable addresses with a random salt.
    pub use_instantiate2:       bool,
    pub fee:                    Fee,
}

impl Default for DeploymentParams {
    fn default() -> Self {
        Self {
            trading_fee_bps:        100,
            min_price:              Uint128::new(1),
            ask_interval:           60,
            max_renewals_per_block: 20,
            valid_bid_query_limit:  10,
            renew_window:           60 * 60 * 24 * 30,
            renewal_bid_percentage: Decimal::new(5, 3),
            per_address_limit:      1,
            mint_discount_bps:      Some(0),
            min_name_length:        1,
            max_name_length:        10,
            base_price:             Uint128::new(1),
            fair_burn_bps:          100,
            collection_name:        "Names".into(),
            collection_symbol:      "NAME".into(),
            collection_description: "Names of the name service".into(),
            collection_image:       "ipfs://names".into(),
            use_instantiate2:       false,
            fee:                    Fee::Auto,
        }
    }
}

impl DeploymentParams {
    pub fn marketplace_msg(&self, deployer: &str) -> marketplace::InstantiateMsg {
        marketplace::InstantiateMsg {
            ask_interval:           self.ask_interval,
            max_renewals_per_block: self.max_renewals_per_block,
            min_price:              self.min_price,
            operator:               deployer.into(),
            renew_window:           self.renew_window,
            renewal_bid_percentage: self.renewal_bid_percentage,
            trading_fee_bps:        self.trading_fee_bps,
            valid_bid_query_limit:  self.valid_bid_query_limit,
        }
    }

    /// The whitelist initially contains the deployer only.
    pub fn whitelist_msg(&self, deployer: &str) -> whitelist::InstantiateMsg {
        whitelist::InstantiateMsg {
            addresses:         vec![deployer.into()],
            mint_discount_bps: self.mint_discount_bps,
            per_address_limit: self.per_address_limit,
        }
    }

    pub fn name_minter_msg(
        &self,
        collection_code_id: u64,
        marketplace_addr: &str,
        whitelist_addr: &str,
    ) -> name_minter::InstantiateMsg {
        name_minter::InstantiateMsg {
            collection_code_id,
            marketplace_addr: marketplace_addr.into(),
            min_name_length: self.min_name_length,
            max_name_length: self.max_name_length,
            base_price: self.base_price,
            fair_burn_bps: self.fair_burn_bps,
            whitelists: vec![whitelist_addr.into()],
        }
    }

    pub fn sg721_name_msg(&self, deployer: &str, minter: &str) -> sg721_name::InstantiateMsg {
        sg721_name::InstantiateMsg {
            base_init_msg: sg721_name::BaseInitMsg {
                name:            self.collection_name.clone(),
                symbol:          self.collection_symbol.clone(),
                minter:          minter.into(),
                collection_info: sg721_name::CollectionInfo {
                    creator:            deployer.into(),
                    description:        self.collection_description.clone(),
                    image:              self.collection_image.clone(),
                    external_link:      None,
                    explicit_content:   None,
                    start_trading_time: None,
                    royalty_info:       None,
                },
            },
        }
    }
}

async fn upload_artifacts<S: SigningConnection>(
    connection: &S,
    registry: &mut ContractRegistry,
    deployer: &str,
    config: &ChainConfig,
    fee: &Fee,
) -> Result<(), DeployError> {
    let artifacts = discover_artifacts(&config.artifacts_path).await?;
    if artifacts.is_empty() {
        return Err(DeployError::NoArtifacts(config.artifacts_path.clone()));
    }
    for artifact in artifacts {
        let wasm = tokio::fs::read(&artifact.path)
            .await
            .map_err(|source| DeployError::Io {
                path: artifact.path.clone(),
                source,
            })?;
        if config.verify_checksums {
            let expected =
                checksum::read_checksum(&config.checksums_path(), &artifact.file_name).await?;
            checksum::verify_artifact(&artifact.file_name, &wasm, &expected)?;
        }
        let result = connection
            .upload(deployer, wasm, fee.clone(), None)
            .await
            .map_err(|source| DeployError::Broadcast {
                action: "upload",
                contract: artifact.key.clone(),
                source,
            })?;
        tracing::info!(
            contract = %artifact.key,
            code_id = result.code_id,
            "Uploaded contract."
        );
        registry.set_code_id(artifact.key, result.code_id)?;
    }
    Ok(())
}

async fn instantiate_contract<S: SigningConnection, M: Serialize>(
    connection: &S,
    registry: &mut ContractRegistry,
    deployer: &str,
    key: &str,
    msg: &M,
    params: &DeploymentParams,
) -> Result<String, DeployError> {
    let code_id = registry.code_id(key)?;
    let msg = serde_json::to_vec(msg).map_err(|source| DeployError::Encode {
        contract: key.into(),
        source,
    })?;
    let options = InstantiateOptions {
        admin: Some(deployer.into()),
        ..InstantiateOptions::default()
    };
    let result = if params.use_instantiate2 {
        let salt: [u8; 16] = rand::thread_rng().gen();
        connection
            .instantiate2(deployer, code_id, &salt, &msg, key, params.fee.clone(), options)
            .await
    } else {
        connection
            .instantiate(deployer, code_id, &msg, key, params.fee.clone(), options)
            .await
    }
    .map_err(|source| DeployError::Broadcast {
        action: "instantiate",
        contract: key.into(),
        source,
    })?;
    tracing::info!(
        contract = key,
        address = %result.contract_address,
        "Instantiated contract."
    );
    registry.add_contract_address(key, result.contract_address.clone())?;
    Ok(result.contract_address)
}

/// Deploy the name service from the artifacts of `config` on behalf of
/// `deployer` and persist the registry to the cache path of `config`. Any
/// failure aborts the deployment.
pub async fn deploy<S: SigningConnection + Clone>(
    connection: &S,
    deployer: &str,
    config: &ChainConfig,
    params: &DeploymentParams,
) -> Result<ContractRegistry, DeployError> {
    let mut registry = ContractRegistry::new();
    registry.begin_upload()?;
    upload_artifacts(connection, &mut registry, deployer, config, &params.fee).await?;

    registry.begin_instantiation()?;
    for key in INSTANTIATION_ORDER {
        match key {
            MARKETPLACE => {
                let msg = params.marketplace_msg(deployer);
                instantiate_contract(connection, &mut registry, deployer, key, &msg, params).await?
            }
            WHITELIST_UPDATABLE => {
                let msg = params.whitelist_msg(deployer);
                instantiate_contract(connection, &mut registry, deployer, key, &msg, params).await?
            }
            NAME_MINTER => {
                let msg = params.name_minter_msg(
                    registry.code_id(SG721_NAME)?,
                    registry.first_address(MARKETPLACE)?,
                    registry.first_address(WHITELIST_UPDATABLE)?,
                );
                instantiate_contract(connection, &mut registry, deployer, key, &msg, params).await?
            }
            _ => {
                let msg = params.sg721_name_msg(deployer, registry.first_address(NAME_MINTER)?);
                instantiate_contract(connection, &mut registry, deployer, key, &msg, params).await?
            }
        };
    }

    let marketplace = NameMarketplaceClient::new(
        connection.clone(),
        deployer,
        registry.first_address(MARKETPLACE)?,
    );
    marketplace
        .setup(
            registry.first_address(SG721_NAME)?,
            registry.first_address(NAME_MINTER)?,
            ExecuteOptions::default().with_fee(params.fee.clone()),
        )
        .await?;

    registry.finish_deployment()?;
    registry.persist(&config.cache_path).await?;
    Ok(registry)
}
