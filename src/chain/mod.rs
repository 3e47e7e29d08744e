//! Connections to a chain. The clients in this crate do not sign or broadcast
//! transactions themselves, they delegate to a [`SigningConnection`] which
//! owns the keys, estimates gas, and waits for inclusion. Queries go through a
//! [`QueryConnection`]; [`GrpcQueryClient`] implements it against the gRPC
//! API of a node.
//!
//! Connections are expected to be cheap to clone, the way
//! [`tonic::transport::Channel`] is, and every method takes `&self`.
use crate::{
    encoding::{EncodeObject, MsgExecuteContract},
    endpoints::QueryResult,
    types::{
        DeliverTxResponse, Fee, InstantiateOptions, InstantiateResult, TxRejected, UploadResult,
    },
};
use thiserror::Error;

pub mod generated;
mod grpc;

pub use grpc::GrpcQueryClient;

/// Read-only access to contracts.
#[allow(async_fn_in_trait)]
pub trait QueryConnection {
    /// Run a smart query on the contract at `address`. `query_data` is the
    /// UTF-8 JSON of the query and the result is the UTF-8 JSON returned by
    /// the contract.
    async fn query_contract_smart(&self, address: &str, query_data: &[u8]) -> QueryResult<Vec<u8>>;
}

/// Errors of submitting a transaction.
#[derive(Debug, Error)]
pub enum BroadcastError {
    /// The transaction could not be simulated, signed or broadcast.
    #[error("Could not submit transaction: {0}")]
    Connection(#[from] crate::endpoints::QueryError),
    /// The transaction was included in a block but failed.
    #[error("{0}")]
    Rejected(#[from] TxRejected),
}

impl BroadcastError {
    pub fn is_rejected(&self) -> bool { matches!(self, BroadcastError::Rejected(_)) }
}

/// Access to the chain on behalf of accounts whose keys the connection holds.
/// Implementations resolve the [`Fee`] (simulating the transaction unless the
/// fee is explicit), sign, broadcast, and wait for the transaction to be
/// included in a block.
#[allow(async_fn_in_trait)]
pub trait SigningConnection: QueryConnection {
    /// Execute a message on a contract. A transaction that is included but
    /// fails may be reported either as [`BroadcastError::Rejected`] or as a
    /// response with a non-zero code.
    async fn execute(
        &self,
        msg: MsgExecuteContract,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<DeliverTxResponse, BroadcastError>;

    /// Instantiate a contract from an uploaded code.
    async fn instantiate(
        &self,
        sender: &str,
        code_id: u64,
        msg: &[u8],
        label: &str,
        fee: Fee,
        options: InstantiateOptions,
    ) -> Result<InstantiateResult, BroadcastError>;

    /// Instantiate a contract at an address that is predictable from the
    /// code, the creator, and the salt.
    #[allow(clippy::too_many_arguments)]
    async fn instantiate2(
        &self,
        sender: &str,
        code_id: u64,
        salt: &[u8],
        msg: &[u8],
        label: &str,
        fee: Fee,
        options: InstantiateOptions,
    ) -> Result<InstantiateResult, BroadcastError>;

    /// Upload a wasm module.
    async fn upload(
        &self,
        sender: &str,
        wasm: Vec<u8>,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<UploadResult, BroadcastError>;

    /// Sign and broadcast a transaction consisting of the given messages, in
    /// order. Unlike the other methods, a failed transaction is not an error;
    /// callers inspect the code of the response.
    async fn sign_and_broadcast(
        &self,
        signer: &str,
        messages: Vec<EncodeObject>,
        fee: Fee,
        memo: Option<String>,
    ) -> Result<DeliverTxResponse, BroadcastError>;
}
