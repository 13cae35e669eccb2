//! Port traits (interfaces for adapters).
//!
//! These are the contracts that rate providers must implement.
//! The portfolio service depends on these traits, not concrete
//! implementations.

mod exchange;

pub use exchange::{ExchangeError, ExchangeRateProvider};
