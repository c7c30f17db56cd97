//! Common test utilities for integration tests
//!
//! Shared fixtures and helpers used across the integration test files.

use crypto_portfolio::{CoinGeckoClient, CoinGeckoConfig};

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Client pointing at a mock server (or any other base URL).
#[allow(dead_code)]
pub fn client_for(base_url: &str) -> CoinGeckoClient {
    CoinGeckoClient::with_config(CoinGeckoConfig {
        base_url: base_url.to_string(),
    })
    .expect("Failed to create client")
}

/// Base URL of a local port with nothing listening on it.
#[allow(dead_code)]
pub fn refused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind");
    let port = listener.local_addr().expect("No local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{port}")
}

/// A `/coins/markets` body shaped like the real CoinGecko response.
#[allow(dead_code)]
pub fn markets_body(coins: &[(&str, &str)]) -> String {
    let entries: Vec<serde_json::Value> = coins
        .iter()
        .enumerate()
        .map(|(i, (id, symbol))| {
            serde_json::json!({
                "id": id,
                "symbol": symbol,
                "name": id.to_uppercase(),
                "image": format!("https://assets.example/{id}.png"),
                "current_price": 1000.0 / (i as f64 + 1.0),
                "market_cap": 1_000_000_000_u64 / (i as u64 + 1),
                "market_cap_rank": i + 1,
                "price_change_percentage_24h": -1.25,
                "last_updated": "2024-05-01T12:00:00.000Z"
            })
        })
        .collect();
    serde_json::Value::Array(entries).to_string()
}
