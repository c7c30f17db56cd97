//! Market-data service with a fail-soft fetch policy.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::models::{CoinSummary, FetchOutcome};
use crate::domain::ports::MarketDataProvider;

/// Fetches top coins from a provider without letting failures escape.
///
/// Every provider error is logged and turned into
/// [`FetchOutcome::Unavailable`]; callers pick the policy for that case,
/// or use [`fetch_top_coins_or_empty`](Self::fetch_top_coins_or_empty) to
/// treat it as an empty list.
pub struct MarketDataService<P: MarketDataProvider> {
    provider: Arc<P>,
}

impl<P: MarketDataProvider> MarketDataService<P> {
    /// Create a service over a shared provider.
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Fetch up to `count` coins ordered by descending market cap.
    ///
    /// # Arguments
    /// * `count` - Maximum number of coins to return; must be at least 1
    ///
    /// # Returns
    /// * `FetchOutcome::Fetched` - The provider answered; the list may be
    ///   shorter than `count`, or empty
    /// * `FetchOutcome::Unavailable` - The provider failed or the request
    ///   was invalid; `reason` carries the rendered error
    pub async fn fetch_top_coins(&self, count: u32) -> FetchOutcome {
        info!(provider = self.provider.name(), count, "fetching top coins");

        match self.provider.top_coins(count).await {
            Ok(coins) => {
                info!(
                    provider = self.provider.name(),
                    fetched = coins.len(),
                    "fetched top coins"
                );
                FetchOutcome::fetched(coins)
            }
            Err(err) if err.is_provider_failure() => {
                warn!(
                    provider = self.provider.name(),
                    count,
                    error = %err,
                    "market data unavailable"
                );
                FetchOutcome::unavailable(err.to_string())
            }
            Err(err) => {
                error!(
                    provider = self.provider.name(),
                    count,
                    error = %err,
                    "invalid market data request"
                );
                FetchOutcome::unavailable(err.to_string())
            }
        }
    }

    /// Fetch up to `count` coins, returning an empty list when the data is
    /// unavailable.
    ///
    /// An empty result therefore means "no data", not "no coins exist".
    pub async fn fetch_top_coins_or_empty(&self, count: u32) -> Vec<CoinSummary> {
        self.fetch_top_coins(count).await.into_coins()
    }
}
