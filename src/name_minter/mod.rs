//! Client for the name minter, which mints names into the name collection
//! and lists them on the marketplace.
mod types;

use crate::{
    chain::{QueryConnection, SigningConnection},
    contract_client::{ContractError, ContractQueryClient, ExecuteOptions, MessageComposer},
    encoding::{EncodeError, EncodeObject},
    types::{AdminResponse, Coin, ExecuteResult, Uint128},
};
use std::ops::Deref;
pub use types::*;
use unicode_segmentation::UnicodeSegmentation;

/// Names of this many graphemes or more cannot be minted.
pub const MAX_NAME_GRAPHEMES: usize = 255;

/// The price of minting `name` given the base price of the minter. The
/// length of a name is its number of extended grapheme clusters. Names of
/// three graphemes cost a hundred times the base price, names of four ten
/// times. Shorter names and names of [`MAX_NAME_GRAPHEMES`] or more cannot be
/// minted.
pub fn name_price(base_price: Uint128, name: &str) -> Option<Uint128> {
    let factor = match name.graphemes(true).count() {
        0..=2 => return None,
        3 => 100,
        4 => 10,
        MAX_NAME_GRAPHEMES.. => return None,
        _ => 1,
    };
    base_price.u128().checked_mul(factor).map(Uint128::new)
}

#[derive(Debug, Clone)]
pub struct NameMinterQueryClient<C> {
    contract: ContractQueryClient<C>,
}

impl<C> NameMinterQueryClient<C> {
    pub fn new(connection: C, address: impl Into<String>) -> Self {
        Self {
            contract: ContractQueryClient::new(connection, address),
        }
    }

    pub fn address(&self) -> &str { self.contract.address() }

    pub fn contract(&self) -> &ContractQueryClient<C> { &self.contract }
}

impl<C: QueryConnection> NameMinterQueryClient<C> {
    pub async fn admin(&self) -> Result<AdminResponse, ContractError> {
        self.contract.query(&QueryMsg::Admin {}).await
    }

    pub async fn whitelists(&self) -> Result<WhitelistsResponse, ContractError> {
        self.contract.query(&QueryMsg::Whitelists {}).await
    }

    /// The address of the name collection.
    pub async fn collection(&self) -> Result<CollectionResponse, ContractError> {
        self.contract.query(&QueryMsg::Collection {}).await
    }

    pub async fn params(&self) -> Result<ParamsResponse, ContractError> {
        self.contract.query(&QueryMsg::Params {}).await
    }
}

/// A name minter client acting on behalf of a fixed sender. It dereferences
/// to the [`NameMinterQueryClient`] of the same instance.
#[derive(Debug, Clone)]
pub struct NameMinterClient<S> {
    query:  NameMinterQueryClient<S>,
    sender: String,
}

impl<S> Deref for NameMinterClient<S> {
    type Target = NameMinterQueryClient<S>;

    fn deref(&self) -> &Self::Target { &self.query }
}

impl<S> NameMinterClient<S> {
    pub fn new(connection: S, sender: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            query:  NameMinterQueryClient::new(connection, address),
            sender: sender.into(),
        }
    }

    pub fn sender(&self) -> &str { &self.sender }

    pub fn composer(&self) -> NameMinterMessageComposer {
        NameMinterMessageComposer::new(self.sender.clone(), self.address())
    }
}

impl<S: SigningConnection> NameMinterClient<S> {
    async fn execute(
        &self,
        msg: ExecuteMsg,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.query
            .contract
            .execute_as(&self.sender, &msg, options)
            .await
    }

    /// Mint `name` to the sender. The price, see [`name_price`], must be
    /// attached to `options` as funds.
    pub async fn mint_and_list(
        &self,
        name: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(ExecuteMsg::MintAndList { name: name.into() }, options)
            .await
    }

    pub async fn update_admin(
        &self,
        admin: Option<&str>,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::UpdateAdmin {
                admin: admin.map(str::to_owned),
            },
            options,
        )
        .await
    }

    pub async fn add_whitelist(
        &self,
        address: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::AddWhitelist {
                address: address.into(),
            },
            options,
        )
        .await
    }

    pub async fn remove_whitelist(
        &self,
        address: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::RemoveWhitelist {
                address: address.into(),
            },
            options,
        )
        .await
    }
}

/// Builds unsigned name minter messages, e.g., to mint several names in one
/// transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMinterMessageComposer {
    inner: MessageComposer,
}

impl NameMinterMessageComposer {
    pub fn new(sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            inner: MessageComposer::new(sender, contract_address),
        }
    }

    pub fn compose(&self, msg: &ExecuteMsg, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.inner.compose(msg, funds)
    }

    pub fn mint_and_list(&self, name: &str, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.compose(&ExecuteMsg::MintAndList { name: name.into() }, funds)
    }

    pub fn update_admin(
        &self,
        admin: Option<&str>,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::UpdateAdmin {
                admin: admin.map(str::to_owned),
            },
            funds,
        )
    }

    pub fn add_whitelist(&self, address: &str, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::AddWhitelist {
                address: address.into(),
            },
            funds,
        )
    }

    pub fn remove_whitelist(
        &self,
        address: &str,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::RemoveWhitelist {
                address: address.into(),
            },
            funds,
        )
    }
}
