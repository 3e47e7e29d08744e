//! A library for interacting with the contracts of a CosmWasm name service:
//! the name marketplace, the name minter, the name collection, and the
//! updatable whitelist. The library is structured around multiple modules.
//!
//! - [`marketplace`], [`name_minter`], [`sg721_name`] and [`whitelist`]
//!   contain the message types of each contract, together with a typed query
//!   client, a typed execute client, and a message composer per contract.
//! - [`contract_client`] contains the generic clients the typed ones are built
//!   on.
//! - [`encoding`] renders calls into the JSON payloads and
//!   `MsgExecuteContract` instructions the chain expects.
//! - [`chain`] defines the connections the clients delegate to, and a gRPC
//!   implementation of the query connection.
//! - [`types`] contains the value types shared by the contracts, as well as
//!   fees and transaction results.
//! - [`harness`] deploys the contracts and drives end-to-end scenarios against
//!   a chain.

/// Various constants that apply to the contracts and the chain.
pub mod constants;
/// Errors of the chain connections.
pub mod endpoints;
/// Type definitions used throughout the rest of the SDK.
pub mod types;

/// Encoding of contract calls.
pub mod encoding;

/// Connections to the chain.
pub mod chain;

/// Generic clients for interacting with contracts.
pub mod contract_client;

/// Client and types of the name marketplace.
pub mod marketplace;
pub mod name_minter;
/// Client and types of the name collection.
pub mod sg721_name;
pub mod whitelist;

pub mod harness;
