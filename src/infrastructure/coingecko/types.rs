//! Response types for the CoinGecko `/coins/markets` endpoint

use serde::Deserialize;
use tracing::warn;

use crate::domain::models::CoinSummary;

/// One element of the `/coins/markets` array.
///
/// Only the fields this crate consumes are declared; everything else
/// (prices, volumes, images, ...) is ignored during deserialization.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MarketEntry {
    /// Coin slug
    pub id: Option<String>,
    /// Ticker symbol
    pub symbol: Option<String>,
}

/// Project raw market entries to [`CoinSummary`] values.
///
/// Provider order is preserved. Entries without a non-empty `id` and
/// `symbol` are skipped, and at most `limit` coins are returned.
pub fn project_entries(entries: Vec<MarketEntry>, limit: usize) -> Vec<CoinSummary> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| match (entry.id, entry.symbol) {
            (Some(id), Some(symbol)) if !id.is_empty() && !symbol.is_empty() => {
                Some(CoinSummary { id, symbol })
            }
            (id, _) => {
                warn!(position, id = ?id, "skipping market entry without id or symbol");
                None
            }
        })
        .take(limit)
        .collect()
}
