//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};

use super::commands::settings::SettingsArgs;
use super::commands::top_coins::TopCoinsArgs;

/// Top-level command line.
#[derive(Parser, Debug)]
#[command(name = "crypto-portfolio")]
#[command(about = "Crypto Portfolio - market data and settings tooling", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Log level (overrides CRYPTO_PORTFOLIO_LOG_LEVEL)
    #[arg(long, global = true, value_parser = ["trace", "debug", "info", "warn", "error"])]
    pub log_level: Option<String>,

    /// Log format (overrides CRYPTO_PORTFOLIO_LOG_FORMAT)
    #[arg(long, global = true, value_parser = ["json", "pretty"])]
    pub log_format: Option<String>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch the top coins by market capitalization
    TopCoins(TopCoinsArgs),

    /// Load settings and print a masked confirmation
    Settings(SettingsArgs),
}
