//! Currency-aware monetary value.

use serde::{Deserialize, Serialize};

use super::currency::CurrencyCode;
use crate::error::DomainError;

/// An immutable amount-plus-currency pair.
///
/// The amount is an IEEE 754 double: division is expected to produce
/// fractional results (4002 KRW / 4 = 1000.5 KRW). Equality is structural
/// and exact on both fields, with no epsilon tolerance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Money {
    amount: f64,
    currency: CurrencyCode,
}

impl Money {
    /// Creates a new Money value.
    pub fn new(amount: f64, currency: impl Into<CurrencyCode>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Creates a zero-value Money in the given currency.
    pub fn zero(currency: impl Into<CurrencyCode>) -> Self {
        Self::new(0.0, currency)
    }

    /// Returns the amount.
    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Returns the currency.
    pub fn currency(&self) -> &CurrencyCode {
        &self.currency
    }

    /// Returns a new Money scaled by `factor`, in the same currency.
    pub fn times(&self, factor: f64) -> Money {
        Money {
            amount: self.amount * factor,
            currency: self.currency.clone(),
        }
    }

    /// Returns a new Money divided by `divisor`, in the same currency.
    ///
    /// A divisor of zero is an error rather than an IEEE infinity.
    pub fn divide(&self, divisor: f64) -> Result<Money, DomainError> {
        if divisor == 0.0 {
            return Err(DomainError::DivisionByZero);
        }
        Ok(Money {
            amount: self.amount / divisor,
            currency: self.currency.clone(),
        })
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}
