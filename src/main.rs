//! Crypto Portfolio CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use crypto_portfolio::cli::{Cli, Commands};
use crypto_portfolio::infrastructure::logging::{LogConfig, LogFormat, LoggerImpl};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // No subscriber is installed yet, so this error goes straight to stderr.
    let _logger = match init_logging(&cli) {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::TopCoins(args) => {
            crypto_portfolio::cli::commands::top_coins::execute(args, cli.json).await
        }
        Commands::Settings(args) => {
            crypto_portfolio::cli::commands::settings::execute(args, cli.json).await
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => crypto_portfolio::cli::handle_error(&err, cli.json),
    }
}

fn init_logging(cli: &Cli) -> anyhow::Result<LoggerImpl> {
    let mut config = LogConfig::load()?;
    if let Some(level) = &cli.log_level {
        config.level.clone_from(level);
    }
    match cli.log_format.as_deref() {
        Some("json") => config.format = LogFormat::Json,
        Some("pretty") => config.format = LogFormat::Pretty,
        _ => {}
    }
    LoggerImpl::init(&config)
}
