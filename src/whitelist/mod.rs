//! Client for the updatable whitelist, the list of accounts allowed to mint
//! names before public minting starts.
mod types;

use crate::{
    chain::{QueryConnection, SigningConnection},
    contract_client::{ContractError, ContractQueryClient, ExecuteOptions, MessageComposer},
    encoding::{EncodeError, EncodeObject},
    types::{AdminResponse, Coin, ExecuteResult},
};
use std::ops::Deref;
pub use types::*;

#[derive(Debug, Clone)]
pub struct WhitelistUpdatableQueryClient<C> {
    contract: ContractQueryClient<C>,
}

impl<C> WhitelistUpdatableQueryClient<C> {
    pub fn new(connection: C, address: impl Into<String>) -> Self {
        Self {
            contract: ContractQueryClient::new(connection, address),
        }
    }

    pub fn address(&self) -> &str { self.contract.address() }

    pub fn contract(&self) -> &ContractQueryClient<C> { &self.contract }
}

impl<C: QueryConnection> WhitelistUpdatableQueryClient<C> {
    pub async fn config(&self) -> Result<Config, ContractError> {
        self.contract.query(&QueryMsg::Config {}).await
    }

    pub async fn includes_address(&self, address: &str) -> Result<bool, ContractError> {
        self.contract
            .query(&QueryMsg::IncludesAddress {
                address: address.into(),
            })
            .await
    }

    pub async fn mint_count(&self, address: &str) -> Result<u32, ContractError> {
        self.contract
            .query(&QueryMsg::MintCount {
                address: address.into(),
            })
            .await
    }

    pub async fn is_processable(&self, address: &str) -> Result<bool, ContractError> {
        self.contract
            .query(&QueryMsg::IsProcessable {
                address: address.into(),
            })
            .await
    }

    pub async fn admin(&self) -> Result<AdminResponse, ContractError> {
        self.contract.query(&QueryMsg::Admin {}).await
    }

    pub async fn address_count(&self) -> Result<u64, ContractError> {
        self.contract.query(&QueryMsg::AddressCount {}).await
    }

    pub async fn per_address_limit(&self) -> Result<u32, ContractError> {
        self.contract.query(&QueryMsg::PerAddressLimit {}).await
    }

    pub async fn mint_discount_percent(&self) -> Result<MintDiscountPercent, ContractError> {
        self.contract.query(&QueryMsg::MintDiscountPercent {}).await
    }
}

/// A whitelist client acting on behalf of a fixed sender. It dereferences to
/// the [`WhitelistUpdatableQueryClient`] of the same instance.
#[derive(Debug, Clone)]
pub struct WhitelistUpdatableClient<S> {
    query:  WhitelistUpdatableQueryClient<S>,
    sender: String,
}

impl<S> Deref for WhitelistUpdatableClient<S> {
    type Target = WhitelistUpdatableQueryClient<S>;

    fn deref(&self) -> &Self::Target { &self.query }
}

impl<S> WhitelistUpdatableClient<S> {
    pub fn new(connection: S, sender: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            query:  WhitelistUpdatableQueryClient::new(connection, address),
            sender: sender.into(),
        }
    }

    pub fn sender(&self) -> &str { &self.sender }

    pub fn composer(&self) -> WhitelistUpdatableMessageComposer {
        WhitelistUpdatableMessageComposer::new(self.sender.clone(), self.address())
    }
}

impl<S: SigningConnection> WhitelistUpdatableClient<S> {
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

    pub async fn update_admin(
        &self,
        new_admin: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::UpdateAdmin {
                new_admin: new_admin.into(),
            },
            options,
        )
        .await
    }

    pub async fn add_addresses(
        &self,
        addresses: Vec<String>,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(ExecuteMsg::AddAddresses { addresses }, options)
            .await
    }

    pub async fn remove_addresses(
        &self,
        addresses: Vec<String>,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(ExecuteMsg::RemoveAddresses { addresses }, options)
            .await
    }

    pub async fn process_address(
        &self,
        address: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::ProcessAddress {
                address: address.into(),
            },
            options,
        )
        .await
    }

    pub async fn update_per_address_limit(
        &self,
        limit: u32,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(ExecuteMsg::UpdatePerAddressLimit { limit }, options)
            .await
    }

    pub async fn purge(&self, options: ExecuteOptions) -> Result<ExecuteResult, ContractError> {
        self.execute(ExecuteMsg::Purge {}, options).await
    }
}

/// Builds unsigned whitelist messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhitelistUpdatableMessageComposer {
    inner: MessageComposer,
}

impl WhitelistUpdatableMessageComposer {
    pub fn new(sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            inner: MessageComposer::new(sender, contract_address),
        }
    }

    pub fn compose(&self, msg: &ExecuteMsg, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.inner.compose(msg, funds)
    }

    pub fn update_admin(
        &self,
        new_admin: &str,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::UpdateAdmin {
                new_admin: new_admin.into(),
            },
            funds,
        )
    }

    pub fn add_addresses(
        &self,
        addresses: Vec<String>,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(&ExecuteMsg::AddAddresses { addresses }, funds)
    }

    pub fn remove_addresses(
        &self,
        addresses: Vec<String>,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(&ExecuteMsg::RemoveAddresses { addresses }, funds)
    }

    pub fn process_address(
        &self,
        address: &str,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::ProcessAddress {
                address: address.into(),
            },
            funds,
        )
    }

    pub fn update_per_address_limit(
        &self,
        limit: u32,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(&ExecuteMsg::UpdatePerAddressLimit { limit }, funds)
    }

    pub fn purge(&self, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.compose(&ExecuteMsg::Purge {}, funds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{contract_client::tests::Recorder, encoding::encode_msg};
    use serde_json::{json, Value};

    #[test]
    fn execute_msgs_have_one_snake_case_key() {
        let msgs = vec![
            ExecuteMsg::UpdateAdmin {
                new_admin: "stars1admin".into(),
            },
            ExecuteMsg::AddAddresses {
                addresses: vec!["stars1a".into()],
            },
            ExecuteMsg::RemoveAddresses {
                addresses: vec!["stars1a".into()],
            },
            ExecuteMsg::ProcessAddress {
                address: "stars1a".into(),
            },
            ExecuteMsg::UpdatePerAddressLimit { limit: 2 },
            ExecuteMsg::Purge {},
        ];
        let expected = [
            ("update_admin", vec!["new_admin"]),
            ("add_addresses", vec!["addresses"]),
            ("remove_addresses", vec!["addresses"]),
            ("process_address", vec!["address"]),
            ("update_per_address_limit", vec!["limit"]),
            ("purge", vec![]),
        ];
        for (msg, (method, fields)) in msgs.iter().zip(expected) {
            let json: Value = serde_json::from_slice(&encode_msg(msg).unwrap()).unwrap();
            let obj = json.as_object().unwrap();
            assert_eq!(obj.len(), 1);
            let args = obj[method].as_object().unwrap();
            assert_eq!(args.keys().map(String::as_str).collect::<Vec<_>>(), fields);
        }
    }

    #[test]
    fn purge_has_empty_arguments() {
        let composer = WhitelistUpdatableMessageComposer::new("stars1admin", "stars1wl");
        assert_eq!(composer.purge(&[]).unwrap().value.msg, br#"{"purge":{}}"#);
    }

    #[test]
    fn instantiate_msg_omits_missing_discount() {
        let msg = InstantiateMsg {
            addresses:         vec!["stars1user".into()],
            mint_discount_bps: None,
            per_address_limit: 1,
        };
        assert_eq!(
            serde_json::to_value(&msg).unwrap(),
            json!({"addresses": ["stars1user"], "per_address_limit": 1})
        );
    }

    #[test]
    fn includes_address_query() {
        let recorder = Recorder::responding(json!(true));
        let client = WhitelistUpdatableQueryClient::new(recorder.clone(), "stars1wl");
        assert!(tokio_test::block_on(client.includes_address("stars1user")).unwrap());
        assert_eq!(
            recorder.last_query().1,
            json!({"includes_address": {"address": "stars1user"}})
        );
    }
}
