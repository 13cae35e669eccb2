//! Exchange rate provider port.
//!
//! This trait defines the interface for exchange rate sources.
//! The in-memory bank is one implementation; a live quote feed could be
//! another.

use crate::domain::{CurrencyCode, CurrencyPair, Money};

/// Error type for exchange rate operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExchangeError {
    /// No direct rate is registered for the ordered pair.
    /// Renders as the bare "FROM->TO" pair.
    #[error("{0}")]
    MissingRate(CurrencyPair),
}

impl ExchangeError {
    /// The pair the provider could not resolve.
    pub fn pair(&self) -> &CurrencyPair {
        match self {
            ExchangeError::MissingRate(pair) => pair,
        }
    }
}

/// Port trait for exchange rate providers.
pub trait ExchangeRateProvider: Send + Sync {
    /// Returns how many units of `to` one unit of `from` buys.
    ///
    /// Rates are directional and never composed: a missing direct rate is
    /// an error even when an indirect path exists through other pairs.
    fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64, ExchangeError>;

    /// Converts a monetary value into the target currency.
    ///
    /// Converting into the currency the money is already in is the
    /// identity and succeeds without consulting the rate table.
    fn convert(&self, money: &Money, to: &CurrencyCode) -> Result<Money, ExchangeError> {
        if money.currency() == to {
            return Ok(money.clone());
        }
        let rate = self.rate(money.currency(), to)?;
        Ok(Money::new(money.amount() * rate, to.clone()))
    }
}
