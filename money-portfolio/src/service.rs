//! Portfolio Aggregation Service
//!
//! Orchestrates conversion through the exchange rate port. Contains no
//! rate logic of its own - pure aggregation over the held entries.

use money_types::{CurrencyCode, ExchangeError, ExchangeRateProvider, Money, PortfolioError};

/// An unordered collection of monetary values, possibly in mixed currencies.
///
/// Entries are never mutated in place; evaluation is a pure read over the
/// collection and the provider's rate table at call time.
#[derive(Debug, Default, Clone)]
pub struct Portfolio {
    moneys: Vec<Money>,
}

impl Portfolio {
    /// Creates an empty portfolio.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends entries to the portfolio.
    pub fn add(&mut self, moneys: impl IntoIterator<Item = Money>) {
        self.moneys.extend(moneys);
    }

    /// Number of held entries.
    pub fn len(&self) -> usize {
        self.moneys.len()
    }

    /// True when the portfolio holds no entries.
    pub fn is_empty(&self) -> bool {
        self.moneys.is_empty()
    }

    /// Evaluates the portfolio into a single value in the target currency.
    ///
    /// Every entry is converted through `provider` and the results summed.
    /// Conversion failures do not short-circuit: every missing pair is
    /// collected, and one aggregate error reports them all in encounter
    /// order. On failure no partial sum is returned.
    pub fn evaluate<P: ExchangeRateProvider>(
        &self,
        provider: &P,
        to: impl Into<CurrencyCode>,
    ) -> Result<Money, PortfolioError> {
        let to = to.into();
        let mut total = 0.0;
        let mut missing = Vec::new();

        for money in &self.moneys {
            match provider.convert(money, &to) {
                Ok(converted) => total += converted.amount(),
                Err(ExchangeError::MissingRate(pair)) => missing.push(pair),
            }
        }

        if !missing.is_empty() {
            tracing::debug!(target_currency = %to, count = missing.len(), "portfolio evaluation failed");
            return Err(PortfolioError::MissingExchangeRates(missing));
        }

        Ok(Money::new(total, to))
    }
}
