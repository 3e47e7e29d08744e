use crate::types::{Addr, Decimal};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantiateMsg {
    pub addresses:         Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mint_discount_bps: Option<u64>,
    pub per_address_limit: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    UpdateAdmin { new_admin: String },
    AddAddresses { addresses: Vec<String> },
    RemoveAddresses { addresses: Vec<String> },
    /// Count a mint by `address`. Only the name minter can do this.
    ProcessAddress { address: String },
    UpdatePerAddressLimit { limit: u32 },
    /// Remove all addresses.
    Purge {},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Config {},
    IncludesAddress { address: String },
    MintCount { address: String },
    /// Whether `address` is on the list and below its mint limit.
    IsProcessable { address: String },
    Admin {},
    AddressCount {},
    PerAddressLimit {},
    MintDiscountPercent {},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub admin:             Addr,
    #[serde(default)]
    pub mint_discount_bps: Option<u64>,
    pub per_address_limit: u32,
}

/// Discount of whitelisted mints, if any.
pub type MintDiscountPercent = Option<Decimal>;
