//! Error types for money arithmetic and portfolio evaluation.

use crate::domain::CurrencyPair;

/// Domain-level errors (value arithmetic violations).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("Division by zero")]
    DivisionByZero,
}

/// Portfolio evaluation errors.
///
/// Evaluation is all-or-nothing: a single aggregate error carries every
/// pair that could not be converted, in the order the entries were
/// encountered.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioError {
    #[error("Missing exchange rate(s): [{}]", join_pairs(.0))]
    MissingExchangeRates(Vec<CurrencyPair>),
}

fn join_pairs(pairs: &[CurrencyPair]) -> String {
    pairs
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
