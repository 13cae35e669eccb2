//! In-Memory Exchange Rate Bank
//!
//! `Bank` is the registry adapter behind the `ExchangeRateProvider` port:
//! a directional rate table populated one pair at a time. Rates are plain
//! multipliers; the bank performs no inversion and no transitive chaining,
//! so A->B and B->A must each be registered on their own.

use std::collections::HashMap;

use money_types::{CurrencyCode, CurrencyPair, ExchangeError, ExchangeRateProvider};

/// A registry mapping ordered currency pairs to exchange rates.
#[derive(Debug, Default, Clone)]
pub struct Bank {
    rates: HashMap<CurrencyPair, f64>,
}

impl Bank {
    /// Creates an empty bank with no rates registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the rate for the ordered (from, to) pair.
    ///
    /// Re-registering a pair overwrites the previous rate. No validation is
    /// applied to the rate value; the table stores what it is given.
    pub fn add_exchange_rate(
        &mut self,
        from: impl Into<CurrencyCode>,
        to: impl Into<CurrencyCode>,
        rate: f64,
    ) {
        let pair = CurrencyPair::new(from, to);
        match self.rates.insert(pair.clone(), rate) {
            Some(previous) => {
                tracing::debug!(%pair, previous, rate, "exchange rate overwritten");
            }
            None => {
                tracing::debug!(%pair, rate, "exchange rate registered");
            }
        }
    }

    /// Returns the registered rate for the pair, if any.
    pub fn rate_for(&self, pair: &CurrencyPair) -> Option<f64> {
        self.rates.get(pair).copied()
    }

    /// Number of registered pairs.
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True when no rates are registered.
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}

impl ExchangeRateProvider for Bank {
    fn rate(&self, from: &CurrencyCode, to: &CurrencyCode) -> Result<f64, ExchangeError> {
        let pair = CurrencyPair::new(from.clone(), to.clone());
        self.rates
            .get(&pair)
            .copied()
            .ok_or(ExchangeError::MissingRate(pair))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use money_types::Money;

    fn usd() -> CurrencyCode {
        CurrencyCode::new("USD")
    }

    #[test]
    fn test_direct_conversion() {
        let mut bank = Bank::new();
        bank.add_exchange_rate("EUR", "USD", 1.2);
        let converted = bank.convert(&Money::new(10.0, "EUR"), &usd()).unwrap();
        assert_eq!(converted, Money::new(12.0, "USD"));
    }

    #[test]
    fn test_identity_conversion_needs_no_rates() {
        let bank = Bank::new();
        let ten_euros = Money::new(10.0, "EUR");
        let converted = bank.convert(&ten_euros, &CurrencyCode::new("EUR")).unwrap();
        assert_eq!(converted, ten_euros);
    }

    #[test]
    fn test_conversion_with_different_rates_between_two_currencies() {
        let mut bank = Bank::new();
        let ten_euros = Money::new(10.0, "EUR");

        bank.add_exchange_rate("EUR", "USD", 1.2);
        assert_eq!(
            bank.convert(&ten_euros, &usd()).unwrap(),
            Money::new(12.0, "USD")
        );

        bank.add_exchange_rate("EUR", "USD", 1.3);
        assert_eq!(
            bank.convert(&ten_euros, &usd()).unwrap(),
            Money::new(13.0, "USD")
        );
        assert_eq!(bank.len(), 1);
    }

    #[test]
    fn test_conversion_with_missing_exchange_rate() {
        let bank = Bank::new();
        let err = bank
            .convert(&Money::new(10.0, "EUR"), &CurrencyCode::new("Kalganid"))
            .unwrap_err();
        assert_eq!(err.to_string(), "EUR->Kalganid");
        assert_eq!(err.pair(), &CurrencyPair::new("EUR", "Kalganid"));
    }

    #[test]
    fn test_reverse_direction_is_not_implied() {
        let mut bank = Bank::new();
        bank.add_exchange_rate("EUR", "USD", 1.2);
        let result = bank.convert(&Money::new(12.0, "USD"), &CurrencyCode::new("EUR"));
        assert!(matches!(result, Err(ExchangeError::MissingRate(_))));
    }

    #[test]
    fn test_rate_for_lookup() {
        let mut bank = Bank::new();
        assert!(bank.is_empty());
        bank.add_exchange_rate("USD", "KRW", 1100.0);
        assert_eq!(bank.rate_for(&CurrencyPair::new("USD", "KRW")), Some(1100.0));
        assert_eq!(bank.rate_for(&CurrencyPair::new("KRW", "USD")), None);
    }
}
