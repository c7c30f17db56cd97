//! Infrastructure layer module
//!
//! This module contains the adapters and external integrations:
//! - CoinGecko market-data client
//! - Configuration management
//! - Logging infrastructure
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod coingecko;
pub mod config;
pub mod logging;
