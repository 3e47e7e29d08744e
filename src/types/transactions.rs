//! Results of transactions submitted through a
//! [`SigningConnection`](crate::chain::SigningConnection).
use super::{Coin, Event};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Hash of a transaction. Displayed as upper case hex, the way block
/// explorers and the node present it.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransactionHash([u8; 32]);

impl TransactionHash {
    pub const fn new(bytes: [u8; 32]) -> Self { Self(bytes) }

    /// The hash of the raw bytes of a signed transaction.
    pub fn of_tx_bytes(tx_bytes: &[u8]) -> Self { Self(Sha256::digest(tx_bytes).into()) }

    pub fn bytes(&self) -> &[u8; 32] { &self.0 }
}

impl fmt::Display for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl fmt::Debug for TransactionHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}", self) }
}

#[derive(Debug, Error)]
pub enum ParseTransactionHashError {
    #[error("Invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("Transaction hash must be 32 bytes, but got {0}.")]
    Length(usize),
}

impl FromStr for TransactionHash {
    type Err = ParseTransactionHashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s)?;
        let len = bytes.len();
        let hash: [u8; 32] = bytes
            .try_into()
            .map_err(|_| ParseTransactionHashError::Length(len))?;
        Ok(Self(hash))
    }
}

impl Serialize for TransactionHash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TransactionHash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

/// The response of the node to a broadcast transaction once it is included in
/// a block. A non-zero `code` means the transaction was rejected, e.g.,
/// because a contract returned an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliverTxResponse {
    pub height:           u64,
    pub transaction_hash: TransactionHash,
    pub code:             u32,
    #[serde(default)]
    pub codespace:        String,
    #[serde(default)]
    pub raw_log:          String,
    #[serde(default)]
    pub events:           Vec<Event>,
    pub gas_used:         u64,
    pub gas_wanted:       u64,
}

impl DeliverTxResponse {
    pub fn is_success(&self) -> bool { self.code == 0 }

    /// Convert into the result of a successful execution, or into the
    /// rejection if the code is non-zero.
    pub fn into_execute_result(self) -> Result<ExecuteResult, TxRejected> {
        if !self.is_success() {
            return Err(TxRejected {
                code:             self.code,
                codespace:        self.codespace,
                raw_log:          self.raw_log,
                transaction_hash: self.transaction_hash,
            });
        }
        Ok(ExecuteResult {
            logs:             self.raw_log,
            height:           self.height,
            transaction_hash: self.transaction_hash,
            events:           self.events,
            gas_wanted:       self.gas_wanted,
            gas_used:         self.gas_used,
        })
    }
}

/// A transaction that was included in a block but failed, e.g., because the
/// contract rejected the message. The log carries the contract's error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("Transaction {transaction_hash} failed with code {code} ({codespace}): {raw_log}")]
pub struct TxRejected {
    pub code:             u32,
    pub codespace:        String,
    pub raw_log:          String,
    pub transaction_hash: TransactionHash,
}

/// Result of a successful contract execution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecuteResult {
    pub logs:             String,
    pub height:           u64,
    pub transaction_hash: TransactionHash,
    pub events:           Vec<Event>,
    pub gas_wanted:       u64,
    pub gas_used:         u64,
}

/// Result of uploading a wasm module.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResult {
    pub code_id:          u64,
    /// Hex encoded sha256 of the uncompressed module.
    pub checksum:         String,
    pub original_size:    usize,
    pub compressed_size:  usize,
    pub height:           u64,
    pub transaction_hash: TransactionHash,
    pub events:           Vec<Event>,
    pub gas_wanted:       u64,
    pub gas_used:         u64,
}

/// Result of instantiating a contract.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantiateResult {
    pub contract_address: String,
    pub height:           u64,
    pub transaction_hash: TransactionHash,
    pub events:           Vec<Event>,
    pub gas_wanted:       u64,
    pub gas_used:         u64,
}

/// Optional parameters of an instantiation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstantiateOptions {
    pub memo:  Option<String>,
    pub funds: Vec<Coin>,
    /// The account allowed to migrate the contract. No migrations are
    /// possible if absent.
    pub admin: Option<String>,
}
