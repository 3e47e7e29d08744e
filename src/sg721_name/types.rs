use crate::types::{Addr, Binary, Decimal, Timestamp};
use serde::{Deserialize, Serialize};

/// An NFT of another collection, used as the image of a name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::upper_case_acronyms)]
pub struct NFT {
    pub collection: Addr,
    pub token_id:   String,
}

/// A named record of a name, e.g., `twitter`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRecord {
    pub name:     String,
    pub value:    String,
    /// Set by the verifier only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verified: Option<bool>,
}

impl TextRecord {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name:     name.into(),
            value:    value.into(),
            verified: None,
        }
    }
}

/// Metadata of a name. The address associated with the name is stored in the
/// token URI, not here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub image_nft: Option<NFT>,
    #[serde(default)]
    pub records:   Vec<TextRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoyaltyInfoResponse {
    pub payment_address: String,
    pub share:           Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    pub creator:            String,
    pub description:        String,
    pub image:              String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link:      Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_content:   Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_trading_time: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub royalty_info:       Option<RoyaltyInfoResponse>,
}

pub type CollectionInfoResponse = CollectionInfo;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseInitMsg {
    pub name:            String,
    pub symbol:          String,
    pub minter:          String,
    pub collection_info: CollectionInfo,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantiateMsg {
    pub base_init_msg: BaseInitMsg,
}

/// Fields of the collection info to change. `Some(None)` clears an optional
/// field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCollectionInfoMsg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description:      Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image:            Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link:    Option<Option<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explicit_content: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub royalty_info:     Option<Option<RoyaltyInfoResponse>>,
}

/// When an approval expires.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expiration {
    AtHeight(u64),
    AtTime(Timestamp),
    Never {},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    SetNameMarketplace {
        address: String,
    },
    /// Set the address a name resolves to. Without an address, the
    /// association is removed.
    AssociateAddress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address: Option<String>,
        name:    String,
    },
    UpdateMetadata {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        metadata: Option<Metadata>,
        name:     String,
    },
    UpdateImageNft {
        name: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        nft:  Option<NFT>,
    },
    AddTextRecord {
        name:   String,
        record: TextRecord,
    },
    RemoveTextRecord {
        name:        String,
        record_name: String,
    },
    UpdateTextRecord {
        name:   String,
        record: TextRecord,
    },
    /// Only the verifier can do this.
    VerifyTextRecord {
        name:        String,
        record_name: String,
        result:      bool,
    },
    UpdateVerifier {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        verifier: Option<String>,
    },
    TransferNft {
        recipient: String,
        token_id:  String,
    },
    /// Transfer a name to a contract and call it with `msg`.
    SendNft {
        contract: String,
        msg:      Binary,
        token_id: String,
    },
    Approve {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expires:  Option<Expiration>,
        spender:  String,
        token_id: String,
    },
    Revoke {
        spender:  String,
        token_id: String,
    },
    ApproveAll {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expires:  Option<Expiration>,
        operator: String,
    },
    RevokeAll {
        operator: String,
    },
    /// Only the name minter can do this.
    Mint {
        extension: Metadata,
        owner:     String,
        token_id:  String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        token_uri: Option<String>,
    },
    Burn {
        token_id: String,
    },
    UpdateCollectionInfo {
        collection_info: UpdateCollectionInfoMsg,
    },
    UpdateStartTradingTime {},
    FreezeCollectionInfo {},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Params {},
    /// The name associated with an address.
    Name {
        address: String,
    },
    NameMarketplace {},
    /// The address a name resolves to.
    AssociatedAddress {
        name: String,
    },
    Verifier {},
    OwnerOf {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        include_expired: Option<bool>,
        token_id:        String,
    },
    Approval {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        include_expired: Option<bool>,
        spender:         String,
        token_id:        String,
    },
    Approvals {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        include_expired: Option<bool>,
        token_id:        String,
    },
    AllOperators {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        include_expired: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:           Option<u32>,
        owner:           String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after:     Option<String>,
    },
    NumTokens {},
    ContractInfo {},
    NftInfo {
        token_id: String,
    },
    AllNftInfo {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        include_expired: Option<bool>,
        token_id:        String,
    },
    Tokens {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:       Option<u32>,
        owner:       String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
    },
    AllTokens {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:       Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
    },
    Minter {},
    CollectionInfo {},
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudoParams {
    pub max_record_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub spender: Addr,
    pub expires: Expiration,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerOfResponse {
    pub owner:     String,
    pub approvals: Vec<Approval>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalResponse {
    pub approval: Approval,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApprovalsResponse {
    pub approvals: Vec<Approval>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorsResponse {
    pub operators: Vec<Approval>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumTokensResponse {
    pub count: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractInfoResponse {
    pub name:   String,
    pub symbol: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NftInfoResponse {
    #[serde(default)]
    pub token_uri: Option<String>,
    pub extension: Metadata,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllNftInfoResponse {
    pub access: OwnerOfResponse,
    pub info:   NftInfoResponse,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokensResponse {
    pub tokens: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinterResponse {
    pub minter: String,
}
