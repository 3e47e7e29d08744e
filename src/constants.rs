//! Constants shared by the clients and the harness.

/// Type URL of the instruction that executes a message on a CosmWasm contract.
pub const MSG_EXECUTE_CONTRACT_TYPE_URL: &str = "/cosmwasm.wasm.v1.MsgExecuteContract";

/// gRPC path of the smart contract state query.
pub const SMART_CONTRACT_STATE_PATH: &str = "/cosmwasm.wasm.v1.Query/SmartContractState";

/// Multiplier applied to simulated gas when the fee is estimated automatically.
pub const DEFAULT_GAS_MULTIPLIER: rust_decimal::Decimal =
    rust_decimal::Decimal::from_parts(13, 0, 0, false, 1);

/// Logical names of the name service contracts, as used by the
/// [`ContractRegistry`](crate::harness::registry::ContractRegistry).
pub mod contract_keys {
    pub const MARKETPLACE: &str = "name_marketplace";
    pub const SG721_NAME: &str = "sg721_name";
    pub const NAME_MINTER: &str = "name_minter";
    pub const WHITELIST_UPDATABLE: &str = "whitelist_updatable";

    /// All keys, in the order in which the contracts must be instantiated.
    pub const INSTANTIATION_ORDER: [&str; 4] =
        [MARKETPLACE, WHITELIST_UPDATABLE, NAME_MINTER, SG721_NAME];
}
