//! Fees of transactions. Gas estimation itself is performed by the signing
//! connection; the types here describe what the caller asks for.
use super::{Coin, Uint128, Uint64};
use crate::constants::DEFAULT_GAS_MULTIPLIER;
use rust_decimal::{prelude::ToPrimitive, Decimal};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// An explicit fee: the coins paid and the gas limit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StdFee {
    pub amount:  Vec<Coin>,
    pub gas:     Uint64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub granter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payer:   Option<String>,
}

impl StdFee {
    pub fn new(amount: Vec<Coin>, gas: u64) -> Self {
        Self {
            amount,
            gas: gas.into(),
            granter: None,
            payer: None,
        }
    }
}

/// How the fee of a transaction is determined.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Fee {
    /// Simulate the transaction and multiply the simulated gas by
    /// [`DEFAULT_GAS_MULTIPLIER`].
    #[default]
    Auto,
    /// Simulate the transaction and multiply the simulated gas by the given
    /// factor.
    Multiplier(Decimal),
    /// Use the given fee without simulating.
    Explicit(StdFee),
}

impl From<StdFee> for Fee {
    fn from(fee: StdFee) -> Self { Self::Explicit(fee) }
}

impl From<Decimal> for Fee {
    fn from(multiplier: Decimal) -> Self { Self::Multiplier(multiplier) }
}

impl Fee {
    /// The factor simulated gas is multiplied with, or `None` if the fee is
    /// explicit.
    pub fn gas_multiplier(&self) -> Option<Decimal> {
        match self {
            Fee::Auto => Some(DEFAULT_GAS_MULTIPLIER),
            Fee::Multiplier(m) => Some(*m),
            Fee::Explicit(_) => None,
        }
    }

    /// Turn the fee into an explicit one given the gas used by a simulation
    /// of the transaction. Returns `None` if the resulting gas limit does not
    /// fit into 64 bits.
    pub fn resolve(&self, simulated_gas: u64, gas_price: &GasPrice) -> Option<StdFee> {
        match self {
            Fee::Explicit(fee) => Some(fee.clone()),
            Fee::Auto | Fee::Multiplier(_) => {
                let multiplier = self.gas_multiplier()?;
                let gas_limit = (Decimal::from(simulated_gas) * multiplier)
                    .floor()
                    .to_u64()?;
                calculate_fee(gas_limit, gas_price)
            }
        }
    }
}

/// Price of a unit of gas in a given denomination, e.g., `0.025ustars`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GasPrice {
    pub amount: Decimal,
    pub denom:  String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseGasPriceError {
    #[error("Gas price \"{0}\" has no denomination.")]
    MissingDenom(String),
    #[error("Invalid amount in gas price \"{0}\".")]
    InvalidAmount(String),
}

impl FromStr for GasPrice {
    type Err = ParseGasPriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let split = s
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .ok_or_else(|| ParseGasPriceError::MissingDenom(s.to_owned()))?;
        let (amount, denom) = s.split_at(split);
        let amount = Decimal::from_str(amount)
            .map_err(|_| ParseGasPriceError::InvalidAmount(s.to_owned()))?;
        Ok(GasPrice {
            amount,
            denom: denom.to_owned(),
        })
    }
}

impl fmt::Display for GasPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Compute the fee for the given gas limit, rounding the amount up to the
/// next whole unit of the denomination.
pub fn calculate_fee(gas_limit: u64, gas_price: &GasPrice) -> Option<StdFee> {
    let amount = gas_price
        .amount
        .checked_mul(Decimal::from(gas_limit))?
        .ceil()
        .to_u128()?;
    Some(StdFee::new(
        vec![Coin::new(Uint128::new(amount), gas_price.denom.clone())],
        gas_limit,
    ))
}
