//! Configuration management infrastructure
//!
//! Layered settings loading using figment:
//! - `.env` file values (optional, lowest precedence)
//! - Process environment variables (highest precedence)
//! - Validation of required values
//! - Process-wide cached settings

pub mod loader;

pub use loader::{
    get_settings, ConfigError, SettingsLoader, CRYPTOCOMPARE_API_KEY, DATABASE_URL,
    DEFAULT_ENV_FILE,
};
