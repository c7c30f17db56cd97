//! Market-data provider port.

use async_trait::async_trait;

use crate::domain::errors::MarketDataResult;
use crate::domain::models::CoinSummary;

/// Source of coins ranked by market capitalization.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Fetch up to `count` coins, highest market cap first.
    ///
    /// Implementations issue a single request and never retry. `count` must
    /// be at least 1.
    async fn top_coins(&self, count: u32) -> MarketDataResult<Vec<CoinSummary>>;

    /// Short provider name used in log fields.
    fn name(&self) -> &'static str;
}
