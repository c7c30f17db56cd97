//! Application settings value.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Application settings loaded from the environment and `.env`.
///
/// Both fields are required and non-empty; see
/// [`SettingsLoader`](crate::infrastructure::config::SettingsLoader).
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Database connection URL
    pub database_url: String,

    /// CryptoCompare API key
    pub cryptocompare_api_key: String,
}

impl Settings {
    /// Build settings from raw values. No validation is performed here.
    pub fn new(database_url: impl Into<String>, cryptocompare_api_key: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            cryptocompare_api_key: cryptocompare_api_key.into(),
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("database_url", &self.database_url)
            .field("cryptocompare_api_key", &"[REDACTED]")
            .finish()
    }
}
