//! Domain layer for the crypto portfolio tooling
//!
//! Holds the value types produced by market-data fetches and configuration
//! loading, plus the port traits infrastructure adapters implement.

pub mod errors;
pub mod models;
pub mod ports;

pub use errors::{MarketDataError, MarketDataResult};
