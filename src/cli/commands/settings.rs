//! Implementation of the `crypto-portfolio settings` command.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::cli::output::{mask_tail, output, CommandOutput};
use crate::domain::models::Settings;
use crate::infrastructure::config::{SettingsLoader, DEFAULT_ENV_FILE};

const DATABASE_URL_VISIBLE: usize = 10;
const API_KEY_VISIBLE: usize = 6;

/// Arguments for `settings`.
#[derive(Args, Debug)]
pub struct SettingsArgs {
    /// Path to the dotenv file
    #[arg(long, default_value = DEFAULT_ENV_FILE)]
    pub env_file: PathBuf,
}

/// Masked view of the loaded settings.
#[derive(Debug, serde::Serialize)]
pub struct SettingsOutput {
    /// Always true; failures go through the error path
    pub success: bool,
    /// Database URL, last 10 characters visible
    pub database_url: String,
    /// API key, last 6 characters visible
    pub cryptocompare_api_key: String,
}

impl SettingsOutput {
    /// Mask loaded settings for display.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            success: true,
            database_url: mask_tail(&settings.database_url, DATABASE_URL_VISIBLE),
            cryptocompare_api_key: mask_tail(&settings.cryptocompare_api_key, API_KEY_VISIBLE),
        }
    }
}

impl CommandOutput for SettingsOutput {
    fn to_human(&self) -> String {
        [
            "Settings loaded successfully!".to_string(),
            format!("Database URL: {}", self.database_url),
            format!("CryptoCompare API Key: {}", self.cryptocompare_api_key),
        ]
        .join("\n")
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

/// Run `settings`: load, validate and print a masked confirmation.
///
/// # Errors
/// Returns the configuration error, with context, when loading fails.
pub async fn execute(args: SettingsArgs, json_mode: bool) -> Result<()> {
    let settings = SettingsLoader::new()
        .with_env_file(&args.env_file)
        .load()
        .context("Failed to load settings")?;

    output(&SettingsOutput::from_settings(&settings), json_mode);
    Ok(())
}
