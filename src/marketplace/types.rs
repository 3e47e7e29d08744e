use crate::types::{Addr, Coin, Decimal, Timestamp, Uint128};
use serde::{Deserialize, Serialize};

pub type TokenId = String;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantiateMsg {
    /// Seconds between asks of the same name.
    pub ask_interval:           u64,
    pub max_renewals_per_block: u32,
    /// Minimum value of bids and asks.
    pub min_price:              Uint128,
    /// Account allowed to process renewals.
    pub operator:               String,
    /// Seconds before the renewal time during which a name can be renewed.
    pub renew_window:           u64,
    pub renewal_bid_percentage: Decimal,
    /// Community pool fee of winning bids. 0.25% = 25, 1% = 100.
    pub trading_fee_bps:        u64,
    pub valid_bid_query_limit:  u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// List a name on the marketplace. Only the name minter can do this.
    SetAsk { seller: String, token_id: TokenId },
    RemoveAsk { token_id: TokenId },
    /// Update the seller of an ask after the name was transferred.
    UpdateAsk { seller: String, token_id: TokenId },
    /// Place a bid; the bid amount is attached as funds.
    SetBid { token_id: TokenId },
    RemoveBid { token_id: TokenId },
    AcceptBid { bidder: String, token_id: TokenId },
    MigrateBids { limit: u32 },
    /// Add the attached funds to the renewal fund of a name.
    FundRenewal { token_id: TokenId },
    RefundRenewal { token_id: TokenId },
    Renew { token_id: TokenId },
    /// Process the renewals of all asks whose renewal time is before `time`.
    ProcessRenewals { time: Timestamp },
    /// Can only be run once.
    Setup { collection: String, minter: String },
}

/// Offset for pagination of bids sorted by price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BidOffset {
    pub bidder:   Addr,
    pub price:    Uint128,
    pub token_id: TokenId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    Ask {
        token_id: TokenId,
    },
    Asks {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:       Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<u64>,
    },
    AskCount {},
    AsksBySeller {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:       Option<u32>,
        seller:      String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<TokenId>,
    },
    AsksByRenewTime {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:       Option<u32>,
        max_time:    Timestamp,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<Timestamp>,
    },
    AskRenewPrice {
        current_time: Timestamp,
        token_id:     TokenId,
    },
    AskRenewalPrices {
        current_time: Timestamp,
        token_ids:    Vec<TokenId>,
    },
    Bid {
        bidder:   String,
        token_id: TokenId,
    },
    BidsByBidder {
        bidder:      String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:       Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<TokenId>,
    },
    Bids {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:       Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<String>,
        token_id:    TokenId,
    },
    LegacyBids {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:       Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<BidOffset>,
    },
    BidsSortedByPrice {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:       Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<BidOffset>,
    },
    ReverseBidsSortedByPrice {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:        Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_before: Option<BidOffset>,
    },
    BidsForSeller {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        limit:       Option<u32>,
        seller:      String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        start_after: Option<BidOffset>,
    },
    HighestBid {
        token_id: TokenId,
    },
    AskHooks {},
    BidHooks {},
    SaleHooks {},
    Params {},
    /// Asks whose renewal time is at `time`.
    RenewalQueue {
        time: Timestamp,
    },
    Config {},
}

/// A name listed on the marketplace.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ask {
    pub id:           u64,
    pub renewal_fund: Uint128,
    pub renewal_time: Timestamp,
    pub seller:       Addr,
    pub token_id:     TokenId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub amount:       Uint128,
    pub bidder:       Addr,
    pub created_time: Timestamp,
    pub token_id:     TokenId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRenewPriceResponse {
    #[serde(default)]
    pub bid:      Option<Bid>,
    pub price:    Coin,
    pub token_id: TokenId,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HooksResponse {
    pub hooks: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigResponse {
    pub collection: Addr,
    pub minter:     Addr,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudoParams {
    pub ask_interval:           u64,
    pub max_renewals_per_block: u32,
    pub min_price:              Uint128,
    pub operator:               Addr,
    pub renew_window:           u64,
    pub renewal_bid_percentage: Decimal,
    pub trading_fee_percent:    Decimal,
    pub valid_bid_query_limit:  u32,
}
