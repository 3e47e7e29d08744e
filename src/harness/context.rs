//! The context of an end-to-end test session: the contract registry and the
//! test users, together with the scenario steps the name service tests are
//! written in.
use super::{
    config::{ChainConfig, TestAccount},
    deploy::{deploy, DeployError, DeploymentParams},
    registry::{ContractRegistry, RegistryError},
};
use crate::{
    chain::SigningConnection,
    constants::contract_keys::{MARKETPLACE, NAME_MINTER, SG721_NAME, WHITELIST_UPDATABLE},
    contract_client::{ContractError, ExecuteOptions},
    marketplace::{Ask, Bid, NameMarketplaceClient},
    name_minter::{name_price, NameMinterClient},
    sg721_name::Sg721NameClient,
    types::{Coin, ExecuteResult, Timestamp, Uint128},
    whitelist::WhitelistUpdatableClient,
};
use std::collections::BTreeMap;
use thiserror::Error;

/// The user that deploys the contracts and operates the marketplace.
pub const DEPLOYER: &str = "user1";

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("Unknown test user {0}.")]
    UnknownUser(String),
    #[error("No test user has address {0}.")]
    UnknownAddress(String),
    #[error("Name {0} is not listed on the marketplace.")]
    NotListed(String),
    #[error("Name {0} cannot be minted.")]
    InvalidName(String),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Deploy(#[from] DeployError),
    #[error(transparent)]
    Contract(#[from] ContractError),
}

pub type HarnessResult<A> = Result<A, HarnessError>;

/// A test account together with a connection that signs on its behalf.
#[derive(Debug, Clone)]
pub struct TestUser<S> {
    pub name:       String,
    pub address:    String,
    pub connection: S,
}

impl<S> TestUser<S> {
    pub fn new(name: impl Into<String>, address: impl Into<String>, connection: S) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            connection,
        }
    }

    pub fn from_account(account: &TestAccount, connection: S) -> Self {
        Self::new(account.name.clone(), account.address.clone(), connection)
    }
}

#[derive(Debug)]
pub struct TestContext<S> {
    registry: ContractRegistry,
    users:    BTreeMap<String, TestUser<S>>,
    denom:    String,
}

impl<S: SigningConnection + Clone> TestContext<S> {
    /// Set up a session. With `hydrate` the registry is loaded from the
    /// cache path of `config`, otherwise the contracts are deployed by
    /// [`DEPLOYER`], which must be among `users`.
    pub async fn initialize(
        config: &ChainConfig,
        users: Vec<TestUser<S>>,
        hydrate: bool,
        params: &DeploymentParams,
    ) -> HarnessResult<Self> {
        let users: BTreeMap<_, _> = users.into_iter().map(|u| (u.name.clone(), u)).collect();
        let registry = if hydrate {
            ContractRegistry::hydrate(&config.cache_path).await?
        } else {
            let deployer = users
                .get(DEPLOYER)
                .ok_or_else(|| HarnessError::UnknownUser(DEPLOYER.into()))?;
            deploy(&deployer.connection, &deployer.address, config, params).await?
        };
        Ok(Self {
            registry,
            users,
            denom: config.denom.clone(),
        })
    }
}

impl<S> TestContext<S> {
    pub fn registry(&self) -> &ContractRegistry { &self.registry }

    /// For contracts instantiated by the tests themselves.
    pub fn registry_mut(&mut self) -> &mut ContractRegistry { &mut self.registry }

    pub fn user(&self, name: &str) -> HarnessResult<&TestUser<S>> {
        self.users
            .get(name)
            .ok_or_else(|| HarnessError::UnknownUser(name.into()))
    }

    fn user_by_address(&self, address: &str) -> HarnessResult<&TestUser<S>> {
        self.users
            .values()
            .find(|u| u.address == address)
            .ok_or_else(|| HarnessError::UnknownAddress(address.into()))
    }

    fn coin(&self, amount: Uint128) -> Coin { Coin::new(amount, self.denom.clone()) }
}

impl<S: Clone> TestContext<S> {
    pub fn marketplace(&self, user: &str) -> HarnessResult<NameMarketplaceClient<S>> {
        let user = self.user(user)?;
        Ok(NameMarketplaceClient::new(
            user.connection.clone(),
            user.address.clone(),
            self.registry.first_address(MARKETPLACE)?,
        ))
    }

    pub fn name_minter(&self, user: &str) -> HarnessResult<NameMinterClient<S>> {
        let user = self.user(user)?;
        Ok(NameMinterClient::new(
            user.connection.clone(),
            user.address.clone(),
            self.registry.first_address(NAME_MINTER)?,
        ))
    }

    pub fn whitelist(&self, user: &str) -> HarnessResult<WhitelistUpdatableClient<S>> {
        let user = self.user(user)?;
        Ok(WhitelistUpdatableClient::new(
            user.connection.clone(),
            user.address.clone(),
            self.registry.first_address(WHITELIST_UPDATABLE)?,
        ))
    }

    pub fn collection(&self, user: &str) -> HarnessResult<Sg721NameClient<S>> {
        let user = self.user(user)?;
        Ok(Sg721NameClient::new(
            user.connection.clone(),
            user.address.clone(),
            self.registry.first_address(SG721_NAME)?,
        ))
    }
}

impl<S: SigningConnection + Clone> TestContext<S> {
    /// Mint `name` for `user`, paying the price the minter asks for it. The
    /// name is listed on the marketplace by the minter.
    pub async fn mint_name(&self, name: &str, user: &str) -> HarnessResult<ExecuteResult> {
        let minter = self.name_minter(user)?;
        let params = minter.params().await?;
        let price = name_price(params.base_price, name)
            .ok_or_else(|| HarnessError::InvalidName(name.into()))?;
        let result = minter
            .mint_and_list(name, ExecuteOptions::default().with_coin(self.coin(price)))
            .await?;
        tracing::info!(name, user, "Minted name.");
        Ok(result)
    }

    pub async fn count_asks(&self) -> HarnessResult<u64> {
        Ok(self.marketplace(DEPLOYER)?.ask_count().await?)
    }

    pub async fn get_asks(&self) -> HarnessResult<Vec<Ask>> {
        Ok(self.marketplace(DEPLOYER)?.asks(None, None).await?)
    }

    /// Add the address of test user `user` to the whitelist, as `admin`.
    pub async fn update_whitelist(&self, user: &str, admin: &str) -> HarnessResult<ExecuteResult> {
        let address = self.user(user)?.address.clone();
        Ok(self
            .whitelist(admin)?
            .add_addresses(vec![address], ExecuteOptions::default())
            .await?)
    }

    pub async fn place_bid(
        &self,
        name: &str,
        amount: Uint128,
        bidder: &str,
    ) -> HarnessResult<ExecuteResult> {
        Ok(self
            .marketplace(bidder)?
            .set_bid(name, ExecuteOptions::default().with_coin(self.coin(amount)))
            .await?)
    }

    /// The bids of `bidder` on `name`.
    pub async fn get_bids(&self, name: &str, bidder: &str) -> HarnessResult<Vec<Bid>> {
        let address = &self.user(bidder)?.address;
        let bids = self.marketplace(bidder)?.bids(name, None, None).await?;
        Ok(bids.into_iter().filter(|b| &b.bidder == address).collect())
    }

    pub async fn remove_bid(&self, name: &str, bidder: &str) -> HarnessResult<ExecuteResult> {
        Ok(self
            .marketplace(bidder)?
            .remove_bid(name, ExecuteOptions::default())
            .await?)
    }

    async fn seller(&self, name: &str) -> HarnessResult<&TestUser<S>> {
        let ask = self
            .marketplace(DEPLOYER)?
            .ask(name)
            .await?
            .ok_or_else(|| HarnessError::NotListed(name.into()))?;
        self.user_by_address(&ask.seller)
    }

    /// Accept the bid of `bidder` on `name`, as the seller of the name.
    pub async fn accept_bid(&self, name: &str, bidder: &str) -> HarnessResult<ExecuteResult> {
        let bidder = self.user(bidder)?.address.clone();
        let seller = self.seller(name).await?.name.clone();
        Ok(self
            .marketplace(&seller)?
            .accept_bid(&bidder, name, ExecuteOptions::default())
            .await?)
    }

    /// Deposit `amount` towards the renewal of `name`, as the seller of the
    /// name.
    pub async fn fund_renewal(&self, name: &str, amount: Uint128) -> HarnessResult<ExecuteResult> {
        let seller = self.seller(name).await?.name.clone();
        Ok(self
            .marketplace(&seller)?
            .fund_renewal(name, ExecuteOptions::default().with_coin(self.coin(amount)))
            .await?)
    }

    pub async fn refund_renewal(&self, name: &str, user: &str) -> HarnessResult<ExecuteResult> {
        Ok(self
            .marketplace(user)?
            .refund_renewal(name, ExecuteOptions::default())
            .await?)
    }

    pub async fn get_renewal_queue(&self, time: Timestamp) -> HarnessResult<Vec<Ask>> {
        Ok(self.marketplace(DEPLOYER)?.renewal_queue(time).await?)
    }

    /// Process the renewals due at `time`, as the operator.
    pub async fn process_renewal(&self, time: Timestamp) -> HarnessResult<ExecuteResult> {
        Ok(self
            .marketplace(DEPLOYER)?
            .process_renewals(time, ExecuteOptions::default())
            .await?)
    }
}
