//! Logging configuration.

use anyhow::{Context, Result};
use figment::providers::{Env, Serialized};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Prefix of the environment variables that override [`LogConfig`].
pub const LOG_ENV_PREFIX: &str = "CRYPTO_PORTFOLIO_LOG_";

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format (json, pretty)
    #[serde(default)]
    pub format: LogFormat,

    /// Directory for log files (optional, if None logs only to stderr)
    pub log_dir: Option<PathBuf>,

    /// Log rotation policy
    #[serde(default)]
    pub rotation: RotationPolicy,
}

/// Console log format
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One JSON object per event
    Json,
    /// Human-readable lines
    #[default]
    Pretty,
}

/// Log file rotation policy
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RotationPolicy {
    /// New file every day
    #[default]
    Daily,
    /// New file every hour
    Hourly,
    /// Append to a single file
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            log_dir: None,
            rotation: RotationPolicy::default(),
        }
    }
}

impl LogConfig {
    /// Load logging configuration
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults
    /// 2. `CRYPTO_PORTFOLIO_LOG_*` environment variables
    ///    (`_LEVEL`, `_FORMAT`, `_LOG_DIR`, `_ROTATION`)
    ///
    /// # Errors
    /// Returns an error if a variable holds an unknown format or rotation.
    pub fn load() -> Result<Self> {
        Figment::new()
            .merge(Serialized::defaults(Self::default()))
            .merge(Env::prefixed(LOG_ENV_PREFIX))
            .extract()
            .context("Failed to extract logging configuration")
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}
