//! This module contains generic clients that provide conveniences for
//! interacting with any CosmWasm contract instance.
//!
//! The key types in this module are
//! [`ContractQueryClient`], for read-only queries,
//! [`ContractClient`], which additionally executes messages on behalf of a
//! fixed sender, and [`MessageComposer`], which builds messages for batching
//! without sending them.
//!
//! The typed clients of the individual contracts (e.g.,
//! [`NameMarketplaceClient`](crate::marketplace::NameMarketplaceClient)) are
//! thin wrappers around these.
use crate::{
    chain::{BroadcastError, QueryConnection, SigningConnection},
    encoding::{encode_msg, execute_instruction, EncodeError, EncodeObject, QueryCall},
    endpoints::QueryError,
    types::{Coin, ExecuteResult, Fee, TxRejected},
};
use serde::{de::DeserializeOwned, Serialize};
use std::ops::Deref;
use thiserror::Error;

#[derive(Debug, Error)]
/// Errors of querying or executing a contract.
pub enum ContractError {
    #[error("Could not encode the message: {0}")]
    Encode(#[from] EncodeError),
    #[error("Network error: {0}")]
    Query(#[from] QueryError),
    /// The transaction was included in a block, but failed, e.g., because the
    /// contract returned an error. The log is not interpreted further.
    #[error("Transaction was rejected: {0}")]
    Rejected(#[from] TxRejected),
    #[error("Response was not as expected: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<BroadcastError> for ContractError {
    fn from(e: BroadcastError) -> Self {
        match e {
            BroadcastError::Connection(e) => Self::Query(e),
            BroadcastError::Rejected(e) => Self::Rejected(e),
        }
    }
}

impl ContractError {
    pub fn is_rejected(&self) -> bool { matches!(self, ContractError::Rejected(_)) }

    /// The log of a rejected transaction, which contains the error message of
    /// the contract.
    pub fn rejection_log(&self) -> Option<&str> {
        match self {
            ContractError::Rejected(r) => Some(&r.raw_log),
            _ => None,
        }
    }
}

/// Fee, memo and funds of an execution. The default is an automatically
/// estimated fee, no memo and no funds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecuteOptions {
    pub fee:   Fee,
    pub memo:  Option<String>,
    pub funds: Vec<Coin>,
}

impl ExecuteOptions {
    pub fn with_fee(mut self, fee: impl Into<Fee>) -> Self {
        self.fee = fee.into();
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }

    pub fn with_funds(mut self, funds: Vec<Coin>) -> Self {
        self.funds = funds;
        self
    }

    /// Attach a single coin.
    pub fn with_coin(self, coin: Coin) -> Self { self.with_funds(vec![coin]) }
}

/// A client for read-only queries of a contract instance.
///
/// Note that cloning is cheap if the connection is, and is the intended way
/// of sharing values of this type between multiple tasks.
#[derive(Debug, Clone)]
pub struct ContractQueryClient<C> {
    connection: C,
    address:    String,
}

impl<C> ContractQueryClient<C> {
    pub fn new(connection: C, address: impl Into<String>) -> Self {
        Self {
            connection,
            address: address.into(),
        }
    }

    /// The address of the instance.
    pub fn address(&self) -> &str { &self.address }

    /// The underlying connection.
    pub fn connection(&self) -> &C { &self.connection }
}

impl<C: QueryConnection> ContractQueryClient<C> {
    /// Run a smart query and parse the result.
    pub async fn query<Q: Serialize + ?Sized, R: DeserializeOwned>(
        &self,
        msg: &Q,
    ) -> Result<R, ContractError> {
        let data = encode_msg(msg)?;
        tracing::debug!(
            contract = %self.address,
            query = %String::from_utf8_lossy(&data),
            "Querying contract."
        );
        let response = self
            .connection
            .query_contract_smart(&self.address, &data)
            .await?;
        Ok(serde_json::from_slice(&response)?)
    }

    /// Run a query assembled at runtime and return the result as JSON.
    pub async fn query_raw(&self, call: &QueryCall) -> Result<serde_json::Value, ContractError> {
        self.query(call).await
    }
}

impl<S: SigningConnection> ContractQueryClient<S> {
    /// Execute `msg` on the instance on behalf of `sender`. Nothing is
    /// retried; a failed transaction is reported as
    /// [`ContractError::Rejected`].
    pub async fn execute_as<M: Serialize + ?Sized>(
        &self,
        sender: &str,
        msg: &M,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        let instruction = execute_instruction(sender, &self.address, msg, &options.funds)?;
        tracing::debug!(
            contract = %self.address,
            sender,
            msg = %String::from_utf8_lossy(&instruction.msg),
            "Executing contract."
        );
        let response = self
            .connection
            .execute(instruction, options.fee, options.memo)
            .await?;
        let result = response.into_execute_result()?;
        tracing::debug!(
            transaction_hash = %result.transaction_hash,
            height = result.height,
            gas_used = result.gas_used,
            "Execution succeeded."
        );
        Ok(result)
    }
}

/// A client that executes messages on a contract instance on behalf of a
/// fixed sender. It dereferences to the [`ContractQueryClient`] of the same
/// instance.
#[derive(Debug, Clone)]
pub struct ContractClient<S> {
    query:  ContractQueryClient<S>,
    sender: String,
}

impl<S> Deref for ContractClient<S> {
    type Target = ContractQueryClient<S>;

    fn deref(&self) -> &Self::Target { &self.query }
}

impl<S> ContractClient<S> {
    pub fn new(connection: S, sender: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            query:  ContractQueryClient::new(connection, address),
            sender: sender.into(),
        }
    }

    /// The account every message of this client is sent from.
    pub fn sender(&self) -> &str { &self.sender }

    /// A composer for messages from the sender to the instance.
    pub fn composer(&self) -> MessageComposer {
        MessageComposer::new(self.sender.clone(), self.query.address.clone())
    }
}

impl<S: SigningConnection> ContractClient<S> {
    pub async fn execute<M: Serialize + ?Sized>(
        &self,
        msg: &M,
        options: ExecuteOptions,
    ) -> Result<ExecuteResult, ContractError> {
        self.query.execute_as(&self.sender, msg, options).await
    }
}

/// Builds unsigned messages to a contract instance, for inclusion in a
/// transaction by
/// [`sign_and_broadcast`](crate::chain::SigningConnection::sign_and_broadcast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageComposer {
    pub sender:           String,
    pub contract_address: String,
}

impl MessageComposer {
    pub fn new(sender: impl Into<String>, contract_address: impl Into<String>) -> Self {
        Self {
            sender:           sender.into(),
            contract_address: contract_address.into(),
        }
    }

    pub fn compose<M: Serialize + ?Sized>(
        &self,
        msg: &M,
        funds: &[Coin],
    ) -> Result<EncodeObject, EncodeError> {
        let instruction = execute_instruction(&self.sender, &self.contract_address, msg, funds)?;
        Ok(EncodeObject::execute(instruction))
    }
}
