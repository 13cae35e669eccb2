//! # Money Portfolio
//!
//! Portfolio aggregation service for the money portfolio workspace.
//!
//! The service is generic over `P: ExchangeRateProvider`, allowing
//! different rate sources to be injected at the call site.

pub mod service;


pub use service::Portfolio;
