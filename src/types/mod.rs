//! Type definitions shared by the contract clients. Numeric types follow the
//! JSON conventions of CosmWasm contracts: 128-bit and 64-bit integers that
//! may exceed the precision of a JSON number are encoded as decimal strings.
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, TimeZone, Utc};
use derive_more::{Add, Display, From, FromStr, Into, Sub};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr as _};
use thiserror::Error;

pub mod events;
pub mod fee;
pub mod transactions;

pub use events::{find_event, Attribute, BurnEvent, Event};
pub use fee::{calculate_fee, Fee, GasPrice, StdFee};
pub use rust_decimal::Decimal;
pub use transactions::{
    DeliverTxResponse, ExecuteResult, InstantiateOptions, InstantiateResult, TransactionHash,
    TxRejected, UploadResult,
};

/// A bech32 encoded address. Contracts validate addresses, clients pass them
/// through verbatim.
pub type Addr = String;

macro_rules! string_encoded_integer {
    ($name:ident, $inner:ty) => {
        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(&self.0)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let s = String::deserialize(deserializer)?;
                <$inner>::from_str(&s).map(Self).map_err(|e| {
                    de::Error::custom(format!(
                        "invalid {} \"{}\": {}",
                        stringify!($name),
                        s,
                        e
                    ))
                })
            }
        }
    };
}

/// An unsigned 128-bit integer, serialized as a decimal string.
#[derive(
    Copy, Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into,
    FromStr, Add, Sub,
)]
#[repr(transparent)]
pub struct Uint128(pub u128);

string_encoded_integer!(Uint128, u128);

impl Uint128 {
    pub const fn new(value: u128) -> Self { Self(value) }

    pub const fn zero() -> Self { Self(0) }

    pub fn is_zero(self) -> bool { self.0 == 0 }

    pub fn u128(self) -> u128 { self.0 }

    pub fn checked_add(self, other: Self) -> Option<Self> { self.0.checked_add(other.0).map(Self) }

    pub fn checked_sub(self, other: Self) -> Option<Self> { self.0.checked_sub(other.0).map(Self) }
}

/// An unsigned 64-bit integer, serialized as a decimal string.
#[derive(
    Copy, Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into,
    FromStr,
)]
#[repr(transparent)]
pub struct Uint64(pub u64);

string_encoded_integer!(Uint64, u64);

/// A point in time in nanoseconds since the UNIX epoch, serialized as a
/// decimal string.
#[derive(
    Copy, Clone, Default, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into,
    FromStr,
)]
#[repr(transparent)]
pub struct Timestamp(pub u64);

string_encoded_integer!(Timestamp, u64);

const NANOS_PER_SECOND: u64 = 1_000_000_000;

impl Timestamp {
    pub const fn from_nanos(nanos: u64) -> Self { Self(nanos) }

    /// Saturates at [`u64::MAX`] nanoseconds, as do the other conversions.
    pub const fn from_seconds(seconds: u64) -> Self {
        Self(seconds.saturating_mul(NANOS_PER_SECOND))
    }

    pub fn nanos(self) -> u64 { self.0 }

    pub fn seconds(self) -> u64 { self.0 / NANOS_PER_SECOND }

    pub fn plus_seconds(self, seconds: u64) -> Self {
        Self(self.0.saturating_add(seconds.saturating_mul(NANOS_PER_SECOND)))
    }

    pub fn minus_seconds(self, seconds: u64) -> Self {
        Self(self.0.saturating_sub(seconds.saturating_mul(NANOS_PER_SECOND)))
    }

    /// Convert to a UTC date time. Timestamps beyond the range of `i64`
    /// nanoseconds (the year 2262) are not representable and yield `None`.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        let nanos = i64::try_from(self.0).ok()?;
        Some(Utc.timestamp_nanos(nanos))
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = TimestampOutOfRange;

    fn try_from(value: DateTime<Utc>) -> Result<Self, Self::Error> {
        let nanos = value.timestamp_nanos_opt().ok_or(TimestampOutOfRange)?;
        u64::try_from(nanos)
            .map(Self)
            .map_err(|_| TimestampOutOfRange)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("The date is outside the range of a nanosecond timestamp.")]
pub struct TimestampOutOfRange;

/// An amount of a native denomination, e.g., `100ustars`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coin {
    pub denom:  String,
    pub amount: Uint128,
}

impl Coin {
    pub fn new(amount: impl Into<Uint128>, denom: impl Into<String>) -> Self {
        Self {
            denom:  denom.into(),
            amount: amount.into(),
        }
    }
}

/// The [`Display`](std::fmt::Display) implementation uses the compact
/// `<amount><denom>` notation of the chain.
impl fmt::Display for Coin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseCoinError {
    #[error("Coin \"{0}\" has no amount.")]
    MissingAmount(String),
    #[error("Coin \"{0}\" has no denomination.")]
    MissingDenom(String),
    #[error("Invalid amount in coin \"{0}\".")]
    InvalidAmount(String),
}

impl std::str::FromStr for Coin {
    type Err = ParseCoinError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !c.is_ascii_digit())
            .ok_or_else(|| ParseCoinError::MissingDenom(s.to_owned()))?;
        let (amount, denom) = s.split_at(split);
        if amount.is_empty() {
            return Err(ParseCoinError::MissingAmount(s.to_owned()));
        }
        let amount = amount
            .parse::<u128>()
            .map_err(|_| ParseCoinError::InvalidAmount(s.to_owned()))?;
        Ok(Coin::new(amount, denom))
    }
}

/// Opaque binary data, serialized as a standard base64 string. Used for
/// messages that are forwarded to another contract, e.g., by `send_nft`.
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash, From, Into)]
pub struct Binary(pub Vec<u8>);

impl Binary {
    /// Serialize a value as JSON and wrap the bytes.
    pub fn to_json<T: Serialize>(value: &T) -> Result<Self, serde_json::Error> {
        serde_json::to_vec(value).map(Self)
    }

    pub fn to_base64(&self) -> String { STANDARD.encode(&self.0) }

    pub fn from_base64(encoded: &str) -> Result<Self, base64::DecodeError> {
        STANDARD.decode(encoded).map(Self)
    }

    pub fn as_slice(&self) -> &[u8] { &self.0 }
}

impl Serialize for Binary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_base64())
    }
}

impl<'de> Deserialize<'de> for Binary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_base64(&s).map_err(de::Error::custom)
    }
}

/// Response of the `admin` query of contracts that use an admin controller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminResponse {
    #[serde(default)]
    pub admin: Option<Addr>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_are_strings_on_the_wire() {
        let coin = Coin::new(100_000_000u128, "ustars");
        assert_eq!(
            serde_json::to_string(&coin).unwrap(),
            r#"{"denom":"ustars","amount":"100000000"}"#
        );
        let ts: Timestamp = serde_json::from_str("\"1700000000000000000\"").unwrap();
        assert_eq!(ts.seconds(), 1_700_000_000);
        assert!(serde_json::from_str::<Uint128>("12").is_err());
        assert!(serde_json::from_str::<Uint128>("\"-1\"").is_err());
    }

    #[test]
    fn parse_coin() {
        let coin: Coin = "250ustars".parse().unwrap();
        assert_eq!(coin, Coin::new(250u128, "ustars"));
        assert_eq!(coin.to_string(), "250ustars");
        assert_eq!(
            "ustars".parse::<Coin>(),
            Err(ParseCoinError::MissingAmount("ustars".into()))
        );
        assert_eq!(
            "250".parse::<Coin>(),
            Err(ParseCoinError::MissingDenom("250".into()))
        );
    }

    #[test]
    fn binary_is_base64() {
        let binary = Binary::to_json(&serde_json::json!({"ping": {}})).unwrap();
        let encoded = serde_json::to_string(&binary).unwrap();
        assert_eq!(encoded, "\"eyJwaW5nIjp7fX0=\"");
        let decoded: Binary = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, binary);
    }

    #[test]
    fn timestamp_datetime_conversion() {
        let ts = Timestamp::from_seconds(1_700_000_000);
        let dt = ts.to_datetime().unwrap();
        assert_eq!(Timestamp::try_from(dt), Ok(ts));
        assert_eq!(ts.plus_seconds(60).minus_seconds(60), ts);
    }

    #[test]
    fn timestamp_arithmetic_saturates() {
        assert_eq!(Timestamp::from_seconds(u64::MAX), Timestamp::from_nanos(u64::MAX));
        let late = Timestamp::from_nanos(u64::MAX - 1);
        assert_eq!(late.plus_seconds(1), Timestamp::from_nanos(u64::MAX));
        assert_eq!(Timestamp::from_seconds(1).plus_seconds(u64::MAX).nanos(), u64::MAX);
        assert_eq!(Timestamp::from_seconds(1).minus_seconds(u64::MAX), Timestamp::from_nanos(0));
    }
}
