//! Crypto Portfolio - market data and settings tooling
//!
//! Fetches the top cryptocurrencies by market capitalization from CoinGecko
//! and loads the application's settings from the environment and `.env`.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): Value types, errors and port traits
//! - **Service Layer** (`services`): Fail-soft fetch orchestration
//! - **Infrastructure Layer** (`infrastructure`): CoinGecko client, config, logging
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use crypto_portfolio::{CoinGeckoClient, MarketDataService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let service = MarketDataService::new(Arc::new(CoinGeckoClient::new()?));
//!     for coin in service.fetch_top_coins_or_empty(20).await {
//!         println!("{} ({})", coin.id, coin.symbol);
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::models::{CoinSummary, FetchOutcome, Settings};
pub use domain::ports::MarketDataProvider;
pub use domain::{MarketDataError, MarketDataResult};
pub use infrastructure::coingecko::{CoinGeckoClient, CoinGeckoConfig};
pub use infrastructure::config::{get_settings, ConfigError, SettingsLoader};
pub use services::MarketDataService;
