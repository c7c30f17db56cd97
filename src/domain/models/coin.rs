//! Coin listings and fetch outcomes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ranked coin as reported by a market-data provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CoinSummary {
    /// Provider-assigned slug (e.g. `bitcoin`)
    pub id: String,

    /// Ticker symbol (e.g. `btc`)
    pub symbol: String,
}

impl CoinSummary {
    /// Create a summary from a provider slug and ticker symbol.
    pub fn new(id: impl Into<String>, symbol: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            symbol: symbol.into(),
        }
    }
}

/// Result of a single top-coins fetch.
///
/// `Fetched` with an empty list means the provider answered and listed
/// nothing; `Unavailable` means no usable answer was obtained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FetchOutcome {
    /// The provider answered with a 2xx response.
    Fetched {
        /// Coins in provider order, at most the requested count
        coins: Vec<CoinSummary>,
        /// When the response was received
        fetched_at: DateTime<Utc>,
    },
    /// No usable answer was obtained.
    Unavailable {
        /// Rendered error describing why
        reason: String,
    },
}

impl FetchOutcome {
    /// Successful outcome stamped with the current time.
    pub fn fetched(coins: Vec<CoinSummary>) -> Self {
        Self::Fetched {
            coins,
            fetched_at: Utc::now(),
        }
    }

    /// Failed outcome with a human-readable reason.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Whether the provider answered.
    pub const fn is_available(&self) -> bool {
        matches!(self, Self::Fetched { .. })
    }

    /// Coins of a successful fetch, or an empty slice.
    pub fn coins(&self) -> &[CoinSummary] {
        match self {
            Self::Fetched { coins, .. } => coins,
            Self::Unavailable { .. } => &[],
        }
    }

    /// Collapse to the fail-soft list: the fetched coins, or empty when
    /// the data was unavailable.
    pub fn into_coins(self) -> Vec<CoinSummary> {
        match self {
            Self::Fetched { coins, .. } => coins,
            Self::Unavailable { .. } => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_collapses_to_empty() {
        let outcome = FetchOutcome::unavailable("connection refused");
        assert!(!outcome.is_available());
        assert!(outcome.coins().is_empty());
        assert!(outcome.into_coins().is_empty());
    }

    #[test]
    fn test_empty_fetch_is_still_available() {
        let outcome = FetchOutcome::fetched(vec![]);
        assert!(outcome.is_available());
        assert!(outcome.into_coins().is_empty());
    }

    #[test]
    fn test_outcome_serializes_with_status_tag() {
        let outcome = FetchOutcome::unavailable("timeout");
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "unavailable");
        assert_eq!(json["reason"], "timeout");

        let outcome = FetchOutcome::fetched(vec![CoinSummary::new("bitcoin", "btc")]);
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "fetched");
        assert_eq!(json["coins"][0]["id"], "bitcoin");
        assert_eq!(json["coins"][0]["symbol"], "btc");
        assert!(json["fetched_at"].is_string());
    }
}
