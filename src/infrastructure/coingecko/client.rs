//! CoinGecko HTTP client implementation

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{header, Client as ReqwestClient, Url};
use std::time::Duration;
use tracing::{debug, instrument};

use super::types::{project_entries, MarketEntry};
use crate::domain::errors::{MarketDataError, MarketDataResult};
use crate::domain::models::CoinSummary;
use crate::domain::ports::MarketDataProvider;

/// Base URL for the public CoinGecko API v3.
pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com/api/v3";

/// Fixed per-request timeout. Not configurable by callers.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Error bodies are cut to this many characters before being kept.
const ERROR_BODY_LIMIT: usize = 200;

/// Configuration for the CoinGecko client
#[derive(Debug, Clone)]
pub struct CoinGeckoConfig {
    /// Base URL of the API, without the endpoint path
    pub base_url: String,
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            base_url: COINGECKO_API_BASE.to_string(),
        }
    }
}

/// HTTP client for the CoinGecko `/coins/markets` endpoint.
///
/// Issues exactly one GET per call. There is no retry, rate limiting or
/// caching; failures are reported to the caller as [`MarketDataError`].
#[derive(Debug, Clone)]
pub struct CoinGeckoClient {
    http_client: ReqwestClient,
    markets_url: Url,
}

impl CoinGeckoClient {
    /// Create a client against the public CoinGecko API.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new() -> Result<Self> {
        Self::with_config(CoinGeckoConfig::default())
    }

    /// Create a client with a custom configuration
    ///
    /// # Arguments
    /// * `config` - Client configuration; only the base URL is adjustable
    ///
    /// # Returns
    /// * `Ok(CoinGeckoClient)` - Client with the fixed 30 s request timeout
    /// * `Err` - If the base URL does not parse or the HTTP client cannot be
    ///   built
    pub fn with_config(config: CoinGeckoConfig) -> Result<Self> {
        Self::build(&config, REQUEST_TIMEOUT)
    }

    fn build(config: &CoinGeckoConfig, timeout: Duration) -> Result<Self> {
        let markets_url = Url::parse(&format!(
            "{}/coins/markets",
            config.base_url.trim_end_matches('/')
        ))
        .with_context(|| format!("Invalid CoinGecko base URL: {}", config.base_url))?;

        let http_client = ReqwestClient::builder()
            .timeout(timeout)
            .user_agent(concat!("crypto-portfolio/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http_client,
            markets_url,
        })
    }

    /// Full request URL for a page of `count` coins.
    ///
    /// The query always asks for USD prices, market-cap ordering, page 1
    /// and no sparkline data.
    pub fn markets_request_url(&self, count: u32) -> Url {
        let mut url = self.markets_url.clone();
        url.query_pairs_mut()
            .append_pair("vs_currency", "usd")
            .append_pair("order", "market_cap_desc")
            .append_pair("per_page", &count.to_string())
            .append_pair("page", "1")
            .append_pair("sparkline", "false");
        url
    }
}

#[async_trait]
impl MarketDataProvider for CoinGeckoClient {
    #[instrument(skip(self), fields(provider = "coingecko"))]
    async fn top_coins(&self, count: u32) -> MarketDataResult<Vec<CoinSummary>> {
        if count == 0 {
            return Err(MarketDataError::InvalidCount(count));
        }

        let url = self.markets_request_url(count);
        debug!(%url, "requesting top coins");

        let response = self
            .http_client
            .get(url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MarketDataError::HttpStatus {
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        let body = response.bytes().await.map_err(classify_transport_error)?;
        let entries: Vec<MarketEntry> = serde_json::from_slice(&body)
            .map_err(|e| MarketDataError::InvalidResponse(e.to_string()))?;

        let limit = usize::try_from(count).unwrap_or(usize::MAX);
        let coins = project_entries(entries, limit);
        debug!(requested = count, returned = coins.len(), "top coins fetched");
        Ok(coins)
    }

    fn name(&self) -> &'static str {
        "coingecko"
    }
}

/// Timeouts are kept apart from other transport failures.
fn classify_transport_error(err: reqwest::Error) -> MarketDataError {
    if err.is_timeout() {
        MarketDataError::Timeout(err.to_string())
    } else {
        MarketDataError::Network(err.to_string())
    }
}

fn truncate_body(body: &str) -> String {
    body.chars().take(ERROR_BODY_LIMIT).collect()
}
