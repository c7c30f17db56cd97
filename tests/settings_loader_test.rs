//! Integration tests for loading settings from the environment and `.env`.

use crypto_portfolio::{ConfigError, Settings, SettingsLoader};
use std::fs;
use tempfile::TempDir;

fn write_env_file(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(".env");
    fs::write(&path, contents).expect("Failed to write env file");
    path
}

#[test]
fn test_load_from_environment() {
    temp_env::with_vars(
        [
            ("database_url", Some("postgres://x")),
            ("cryptocompare_api_key", Some("abc123")),
        ],
        || {
            let settings = SettingsLoader::new()
                .without_env_file()
                .load()
                .expect("settings should load");
            assert_eq!(settings, Settings::new("postgres://x", "abc123"));
        },
    );
}

#[test]
fn test_missing_api_key_fails() {
    temp_env::with_vars(
        [
            ("database_url", Some("postgres://x")),
            ("cryptocompare_api_key", None::<&str>),
        ],
        || {
            let result = SettingsLoader::new().without_env_file().load();
            assert!(matches!(
                result,
                Err(ConfigError::Missing("cryptocompare_api_key"))
            ));
        },
    );
}

#[test]
fn test_empty_database_url_fails() {
    temp_env::with_vars(
        [
            ("database_url", Some("")),
            ("cryptocompare_api_key", Some("abc123")),
        ],
        || {
            let result = SettingsLoader::new().without_env_file().load();
            assert!(matches!(result, Err(ConfigError::Empty("database_url"))));
        },
    );
}

#[test]
fn test_load_from_dotenv_file() {
    let dir = TempDir::new().unwrap();
    let path = write_env_file(
        &dir,
        "# local settings\ndatabase_url=\"postgres://user:pw@localhost/portfolio\"\ncryptocompare_api_key=abc123\n",
    );

    temp_env::with_vars(
        [
            ("database_url", None::<&str>),
            ("cryptocompare_api_key", None),
        ],
        || {
            let settings = SettingsLoader::new().with_env_file(&path).load().unwrap();
            assert_eq!(
                settings,
                Settings::new("postgres://user:pw@localhost/portfolio", "abc123")
            );
            // Loading must not leak file values into the process environment.
            assert!(std::env::var("database_url").is_err());
        },
    );
}

#[test]
fn test_missing_dotenv_file_falls_back_to_environment() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist.env");

    temp_env::with_vars(
        [
            ("database_url", Some("postgres://env")),
            ("cryptocompare_api_key", Some("envkey")),
        ],
        || {
            let settings = SettingsLoader::new().with_env_file(&missing).load().unwrap();
            assert_eq!(settings, Settings::new("postgres://env", "envkey"));
        },
    );
}

#[test]
fn test_error_messages_name_the_setting() {
    temp_env::with_vars(
        [
            ("database_url", None::<&str>),
            ("cryptocompare_api_key", None),
        ],
        || {
            let err = SettingsLoader::new().without_env_file().load().unwrap_err();
            assert_eq!(err.to_string(), "Missing required setting: database_url");
        },
    );
}
