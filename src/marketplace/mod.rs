//! Client for the name marketplace, which holds an ask for every minted name,
//! the bids on names, and the funds for their yearly renewal.
mod types;

use crate::{
    chain::{QueryConnection, SigningConnection},
    contract_client::{ContractError, ContractQueryClient, ExecuteOptions, MessageComposer},
    encoding::{EncodeError, EncodeObject},
    types::{Coin, ExecuteResult, Timestamp},
};
use std::ops::Deref;
pub use types::*;

/// Read-only interface of a name marketplace instance.
///
/// Note that cloning is cheap if the connection is, and is the intended way
/// of sharing values of this type between multiple tasks.
#[derive(Debug, Clone)]
pub struct NameMarketplaceQueryClient<C> {
    contract: ContractQueryClient<C>,
}

impl<C> NameMarketplaceQueryClient<C> {
    pub fn new(connection: C, address: impl Into<String>) -> Self {
        Self {
            contract: ContractQueryClient::new(connection, address),
        }
    }

    pub fn address(&self) -> &str { self.contract.address() }

    /// The generic client of the same instance.
    pub fn contract(&self) -> &ContractQueryClient<C> { &self.contract }
}

impl<C: QueryConnection> NameMarketplaceQueryClient<C> {
    /// The ask of a name, if it is listed.
    pub async fn ask(&self, token_id: &str) -> Result<Option<Ask>, ContractError> {
        self.contract
            .query(&QueryMsg::Ask {
                token_id: token_id.into(),
            })
            .await
    }

    /// Asks in order of their id.
    pub async fn asks(
        &self,
        start_after: Option<u64>,
        limit: Option<u32>,
    ) -> Result<Vec<Ask>, ContractError> {
        self.contract
            .query(&QueryMsg::Asks { limit, start_after })
            .await
    }

    pub async fn ask_count(&self) -> Result<u64, ContractError> {
        self.contract.query(&QueryMsg::AskCount {}).await
    }

    pub async fn asks_by_seller(
        &self,
        seller: &str,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<Ask>, ContractError> {
        self.contract
            .query(&QueryMsg::AsksBySeller {
                limit,
                seller: seller.into(),
                start_after,
            })
            .await
    }

    /// Asks whose renewal time is at or before `max_time`.
    pub async fn asks_by_renew_time(
        &self,
        max_time: Timestamp,
        start_after: Option<Timestamp>,
        limit: Option<u32>,
    ) -> Result<Vec<Ask>, ContractError> {
        self.contract
            .query(&QueryMsg::AsksByRenewTime {
                limit,
                max_time,
                start_after,
            })
            .await
    }

    /// The price of renewing a name at `current_time`, together with the bid
    /// that determines it, if any. The price is absent if the name cannot be
    /// renewed yet.
    pub async fn ask_renew_price(
        &self,
        current_time: Timestamp,
        token_id: &str,
    ) -> Result<(Option<Coin>, Option<Bid>), ContractError> {
        self.contract
            .query(&QueryMsg::AskRenewPrice {
                current_time,
                token_id: token_id.into(),
            })
            .await
    }

    pub async fn ask_renewal_prices(
        &self,
        current_time: Timestamp,
        token_ids: Vec<TokenId>,
    ) -> Result<Vec<AskRenewPriceResponse>, ContractError> {
        self.contract
            .query(&QueryMsg::AskRenewalPrices {
                current_time,
                token_ids,
            })
            .await
    }

    pub async fn bid(&self, token_id: &str, bidder: &str) -> Result<Option<Bid>, ContractError> {
        self.contract
            .query(&QueryMsg::Bid {
                bidder:   bidder.into(),
                token_id: token_id.into(),
            })
            .await
    }

    pub async fn bids_by_bidder(
        &self,
        bidder: &str,
        start_after: Option<TokenId>,
        limit: Option<u32>,
    ) -> Result<Vec<Bid>, ContractError> {
        self.contract
            .query(&QueryMsg::BidsByBidder {
                bidder: bidder.into(),
                limit,
                start_after,
            })
            .await
    }

    /// Bids on a name, in order of the bidder address.
    pub async fn bids(
        &self,
        token_id: &str,
        start_after: Option<String>,
        limit: Option<u32>,
    ) -> Result<Vec<Bid>, ContractError> {
        self.contract
            .query(&QueryMsg::Bids {
                limit,
                start_after,
                token_id: token_id.into(),
            })
            .await
    }

    pub async fn legacy_bids(
        &self,
        start_after: Option<BidOffset>,
        limit: Option<u32>,
    ) -> Result<Vec<Bid>, ContractError> {
        self.contract
            .query(&QueryMsg::LegacyBids { limit, start_after })
            .await
    }

    pub async fn bids_sorted_by_price(
        &self,
        start_after: Option<BidOffset>,
        limit: Option<u32>,
    ) -> Result<Vec<Bid>, ContractError> {
        self.contract
            .query(&QueryMsg::BidsSortedByPrice { limit, start_after })
            .await
    }

    pub async fn reverse_bids_sorted_by_price(
        &self,
        start_before: Option<BidOffset>,
        limit: Option<u32>,
    ) -> Result<Vec<Bid>, ContractError> {
        self.contract
            .query(&QueryMsg::ReverseBidsSortedByPrice {
                limit,
                start_before,
            })
            .await
    }

    /// Bids on the names listed by `seller`.
    pub async fn bids_for_seller(
        &self,
        seller: &str,
        start_after: Option<BidOffset>,
        limit: Option<u32>,
    ) -> Result<Vec<Bid>, ContractError> {
        self.contract
            .query(&QueryMsg::BidsForSeller {
                limit,
                seller: seller.into(),
                start_after,
            })
            .await
    }

    pub async fn highest_bid(&self, token_id: &str) -> Result<Option<Bid>, ContractError> {
        self.contract
            .query(&QueryMsg::HighestBid {
                token_id: token_id.into(),
            })
            .await
    }

    pub async fn ask_hooks(&self) -> Result<HooksResponse, ContractError> {
        self.contract.query(&QueryMsg::AskHooks {}).await
    }

    pub async fn bid_hooks(&self) -> Result<HooksResponse, ContractError> {
        self.contract.query(&QueryMsg::BidHooks {}).await
    }

    pub async fn sale_hooks(&self) -> Result<HooksResponse, ContractError> {
        self.contract.query(&QueryMsg::SaleHooks {}).await
    }

    pub async fn params(&self) -> Result<SudoParams, ContractError> {
        self.contract.query(&QueryMsg::Params {}).await
    }

    pub async fn renewal_queue(&self, time: Timestamp) -> Result<Vec<Ask>, ContractError> {
        self.contract.query(&QueryMsg::RenewalQueue { time }).await
    }

    pub async fn config(&self) -> Result<ConfigResponse, ContractError> {
        self.contract.query(&QueryMsg::Config {}).await
    }
}

/// A name marketplace client acting on behalf of a fixed sender. It
/// dereferences to the [`NameMarketplaceQueryClient`] of the same instance.
#[derive(Debug, Clone)]
pub struct NameMarketplaceClient<S> {
    query:  NameMarketplaceQueryClient<S>,
    sender: String,
}

impl<S> Deref for NameMarketplaceClient<S> {
    type Target = NameMarketplaceQueryClient<S>;

    fn deref(&self) -> &Self::Target { &self.query }
}

impl<S> NameMarketplaceClient<S> {
    pub fn new(connection: S, sender: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            query:  NameMarketplaceQueryClient::new(connection, address),
            sender: sender.into(),
        }
    }

    pub fn sender(&self) -> &str { &self.sender }

    pub fn composer(&self) -> NameMarketplaceMessageComposer {
        NameMarketplaceMessageComposer::new(self.sender.clone(), self.address())
    }
}

impl<S: SigningConnection> NameMarketplaceClient<S> {
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

    pub async fn set_ask(
        &self,
        seller: &str,
        token_id: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::SetAsk {
                seller:   seller.into(),
                token_id: token_id.into(),
            },
            options,
        )
        .await
    }

    pub async fn remove_ask(
        &self,
        token_id: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::RemoveAsk {
                token_id: token_id.into(),
            },
            options,
        )
        .await
    }

    pub async fn update_ask(
        &self,
        seller: &str,
        token_id: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::UpdateAsk {
                seller:   seller.into(),
                token_id: token_id.into(),
            },
            options,
        )
        .await
    }

    /// Bid on a name. The bid amount must be attached to `options` as funds.
    pub async fn set_bid(
        &self,
        token_id: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::SetBid {
                token_id: token_id.into(),
            },
            options,
        )
        .await
    }

    pub async fn remove_bid(
        &self,
        token_id: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::RemoveBid {
                token_id: token_id.into(),
            },
            options,
        )
        .await
    }

    pub async fn accept_bid(
        &self,
        bidder: &str,
        token_id: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::AcceptBid {
                bidder:   bidder.into(),
                token_id: token_id.into(),
            },
            options,
        )
        .await
    }

    pub async fn migrate_bids(
        &self,
        limit: u32,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(ExecuteMsg::MigrateBids { limit }, options)
            .await
    }

    pub async fn fund_renewal(
        &self,
        token_id: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::FundRenewal {
                token_id: token_id.into(),
            },
            options,
        )
        .await
    }

    pub async fn refund_renewal(
        &self,
        token_id: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::RefundRenewal {
                token_id: token_id.into(),
            },
            options,
        )
        .await
    }

    pub async fn renew(
        &self,
        token_id: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::Renew {
                token_id: token_id.into(),
            },
            options,
        )
        .await
    }

    pub async fn process_renewals(
        &self,
        time: Timestamp,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(ExecuteMsg::ProcessRenewals { time }, options)
            .await
    }

    pub async fn setup(
        &self,
        collection: &str,
        minter: &str,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.execute(
            ExecuteMsg::Setup {
                collection: collection.into(),
                minter:     minter.into(),
            },
            options,
        )
        .await
    }
}

/// Builds unsigned name marketplace messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameMarketplaceMessageComposer {
    inner: MessageComposer,
}

impl NameMarketplaceMessageComposer {
    pub fn new(sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            inner: MessageComposer::new(sender, contract_address),
        }
    }

    pub fn compose(&self, msg: &ExecuteMsg, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.inner.compose(msg, funds)
    }

    pub fn set_ask(
        &self,
        seller: &str,
        token_id: &str,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::SetAsk {
                seller:   seller.into(),
                token_id: token_id.into(),
            },
            funds,
        )
    }

    pub fn remove_ask(&self, token_id: &str, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::RemoveAsk {
                token_id: token_id.into(),
            },
            funds,
        )
    }

    pub fn update_ask(
        &self,
        seller: &str,
        token_id: &str,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::UpdateAsk {
                seller:   seller.into(),
                token_id: token_id.into(),
            },
            funds,
        )
    }

    pub fn set_bid(&self, token_id: &str, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::SetBid {
                token_id: token_id.into(),
            },
            funds,
        )
    }

    pub fn remove_bid(&self, token_id: &str, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::RemoveBid {
                token_id: token_id.into(),
            },
            funds,
        )
    }

    pub fn accept_bid(
        &self,
        bidder: &str,
        token_id: &str,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::AcceptBid {
                bidder:   bidder.into(),
                token_id: token_id.into(),
            },
            funds,
        )
    }

    pub fn migrate_bids(&self, limit: u32, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.compose(&ExecuteMsg::MigrateBids { limit }, funds)
    }

    pub fn fund_renewal(&self, token_id: &str, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::FundRenewal {
                token_id: token_id.into(),
            },
            funds,
        )
    }

    pub fn refund_renewal(
        &self,
        token_id: &str,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::RefundRenewal {
                token_id: token_id.into(),
            },
            funds,
        )
    }

    pub fn renew(&self, token_id: &str, funds: &[Coin]) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::Renew {
                token_id: token_id.into(),
            },
            funds,
        )
    }

    pub fn process_renewals(
        &self,
        time: Timestamp,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(&ExecuteMsg::ProcessRenewals { time }, funds)
    }

    pub fn setup(
        &self,
        collection: &str,
        minter: &str,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        self.compose(
            &ExecuteMsg::Setup {
                collection: collection.into(),
                minter:     minter.into(),
            },
            funds,
        )
    }
}
