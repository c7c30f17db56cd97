//! Port trait definitions (Hexagonal Architecture)
//!
//! - MarketDataProvider: ranked coin listings from an external provider

pub mod market_data;

pub use market_data::MarketDataProvider;
