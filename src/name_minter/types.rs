use crate::types::{Addr, Decimal, Uint128};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantiateMsg {
    /// Code of the name collection the minter instantiates.
    pub collection_code_id: u64,
    pub marketplace_addr:   String,
    pub min_name_length:    u32,
    pub max_name_length:    u32,
    /// Price of names of five or more characters.
    pub base_price:         Uint128,
    pub fair_burn_bps:      u64,
    /// Whitelists consulted, in order, while public minting has not started.
    pub whitelists:         Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Mint a name and list it on the name marketplace.
    MintAndList { name: String },
    /// Change the admin that manages the whitelists. `None` removes the
    /// admin.
    UpdateAdmin { admin: Option<String> },
    AddWhitelist { address: String },
    RemoveWhitelist { address: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Admin {},
    Whitelists {},
    Collection {},
    Params {},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionResponse {
    pub collection: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistsResponse {
    pub whitelists: Vec<Addr>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamsResponse {
    pub min_name_length:   u32,
    pub max_name_length:   u32,
    pub base_price:        Uint128,
    pub fair_burn_percent: Decimal,
}
