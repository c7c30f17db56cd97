//! CoinGecko market-data adapter
//!
//! Implements [`MarketDataProvider`](crate::domain::ports::MarketDataProvider)
//! on top of the public `/coins/markets` endpoint.

pub mod client;
pub mod types;

pub use client::{CoinGeckoClient, CoinGeckoConfig, COINGECKO_API_BASE};
pub use types::{project_entries, MarketEntry};
