//! Implementation of the `crypto-portfolio top-coins` command.

use anyhow::Result;
use clap::Args;
use std::sync::Arc;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::FetchOutcome;
use crate::infrastructure::coingecko::{CoinGeckoClient, CoinGeckoConfig, COINGECKO_API_BASE};
use crate::services::MarketDataService;

/// Arguments for `top-coins`.
#[derive(Args, Debug)]
pub struct TopCoinsArgs {
    /// Number of coins to fetch
    #[arg(short = 'n', long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// CoinGecko API base URL
    #[arg(long, env = "COINGECKO_BASE_URL", default_value = COINGECKO_API_BASE)]
    pub base_url: String,
}

/// Rendered result of `top-coins`.
#[derive(Debug, serde::Serialize)]
pub struct TopCoinsOutput {
    /// Count the user asked for
    pub requested: u32,
    /// What the service obtained
    pub outcome: FetchOutcome,
}

impl CommandOutput for TopCoinsOutput {
    fn to_human(&self) -> String {
        match &self.outcome {
            FetchOutcome::Fetched { coins, .. } if coins.is_empty() => {
                "Provider returned no coins.".to_string()
            }
            FetchOutcome::Fetched { coins, .. } => {
                let mut lines = vec![format!("--- Top {} Coins ---", self.requested)];
                for (i, coin) in coins.iter().enumerate() {
                    lines.push(format!(
                        "{:>2}. {:<20} ({})",
                        i + 1,
                        coin.id,
                        coin.symbol.to_uppercase()
                    ));
                }
                lines.join("\n")
            }
            FetchOutcome::Unavailable { reason } => {
                format!("Market data unavailable: {reason}")
            }
        }
    }

    fn to_json(&self) -> serde_json::Value {
        let mut value = serde_json::to_value(&self.outcome).unwrap_or_default();
        if let Some(map) = value.as_object_mut() {
            map.insert("requested".to_string(), self.requested.into());
        }
        value
    }
}

/// Run `top-coins`: one fetch, printed as a ranked list.
///
/// Unavailable data is printed as a notice and is not an error.
///
/// # Arguments
/// * `args` - Parsed command arguments
/// * `json_mode` - Print JSON instead of the ranked list
///
/// # Errors
/// Returns an error only if the HTTP client cannot be built, for example
/// when `--base-url` does not parse.
pub async fn execute(args: TopCoinsArgs, json_mode: bool) -> Result<()> {
    let client = CoinGeckoClient::with_config(CoinGeckoConfig {
        base_url: args.base_url,
    })?;
    let service = MarketDataService::new(Arc::new(client));

    let outcome = service.fetch_top_coins(args.count).await;
    output(
        &TopCoinsOutput {
            requested: args.count,
            outcome,
        },
        json_mode,
    );
    Ok(())
}
