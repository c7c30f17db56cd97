use clap::Parser;
use crypto_portfolio::cli::{Cli, Commands};
use std::path::PathBuf;

#[test]
fn test_parse_top_coins_defaults() {
    temp_env::with_var("COINGECKO_BASE_URL", None::<&str>, || {
        let cli = Cli::try_parse_from(["crypto-portfolio", "top-coins"]).unwrap();

        assert!(!cli.json);
        match cli.command {
            Commands::TopCoins(args) => {
                assert_eq!(args.count, 20);
                assert_eq!(args.base_url, "https://api.coingecko.com/api/v3");
            }
            Commands::Settings(_) => panic!("Wrong command"),
        }
    });
}

#[test]
fn test_parse_top_coins_with_count_and_json() {
    let cli = Cli::try_parse_from([
        "crypto-portfolio",
        "top-coins",
        "-n",
        "5",
        "--base-url",
        "http://localhost:8080",
        "--json",
    ])
    .unwrap();

    assert!(cli.json);
    match cli.command {
        Commands::TopCoins(args) => {
            assert_eq!(args.count, 5);
            assert_eq!(args.base_url, "http://localhost:8080");
        }
        Commands::Settings(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_top_coins_rejects_zero() {
    let result = Cli::try_parse_from(["crypto-portfolio", "top-coins", "--count", "0"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_base_url_from_env() {
    temp_env::with_var("COINGECKO_BASE_URL", Some("http://mirror.local/api/v3"), || {
        let cli = Cli::try_parse_from(["crypto-portfolio", "top-coins"]).unwrap();
        match cli.command {
            Commands::TopCoins(args) => assert_eq!(args.base_url, "http://mirror.local/api/v3"),
            Commands::Settings(_) => panic!("Wrong command"),
        }
    });
}

#[test]
fn test_parse_settings_env_file() {
    let cli = Cli::try_parse_from([
        "crypto-portfolio",
        "--log-level",
        "debug",
        "settings",
        "--env-file",
        "config/.env.local",
    ])
    .unwrap();

    assert_eq!(cli.log_level.as_deref(), Some("debug"));
    match cli.command {
        Commands::Settings(args) => assert_eq!(args.env_file, PathBuf::from("config/.env.local")),
        Commands::TopCoins(_) => panic!("Wrong command"),
    }
}

#[test]
fn test_parse_rejects_unknown_log_format() {
    let result = Cli::try_parse_from(["crypto-portfolio", "--log-format", "xml", "settings"]);
    assert!(result.is_err());
}
