//! Settings loading from `.env` and the process environment.

use figment::providers::Serialized;
use figment::Figment;
use std::collections::BTreeMap;
use std::env::{self, VarError};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::debug;

use crate::domain::models::Settings;

/// Environment variable holding the database URL.
pub const DATABASE_URL: &str = "database_url";

/// Environment variable holding the CryptoCompare API key.
pub const CRYPTOCOMPARE_API_KEY: &str = "cryptocompare_api_key";

/// Default location of the dotenv file, relative to the working directory.
pub const DEFAULT_ENV_FILE: &str = ".env";

const SETTINGS_KEYS: [&str; 2] = [DATABASE_URL, CRYPTOCOMPARE_API_KEY];

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither source defines the variable
    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    /// The variable is empty or whitespace only
    #[error("Setting cannot be empty: {0}")]
    Empty(&'static str),

    /// The process environment holds a non-UTF-8 value
    #[error("Setting is not valid UTF-8: {0}")]
    NotUnicode(&'static str),

    /// The `.env` file exists but could not be read or parsed
    #[error("Failed to read env file {}: {message}", .path.display())]
    EnvFile {
        /// Path of the offending file
        path: PathBuf,
        /// Parser or I/O error message
        message: String,
    },

    /// figment could not extract [`Settings`] from the merged sources
    #[error("Failed to extract settings: {0}")]
    Extraction(String),
}

/// Loads [`Settings`] from a `.env` file and the process environment.
///
/// Precedence (lowest to highest):
/// 1. `.env` file (optional, missing file is not an error)
/// 2. Process environment variables
///
/// Variable names are matched exactly as declared (`database_url`,
/// `cryptocompare_api_key`). Loading never modifies the process
/// environment.
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    env_file: Option<PathBuf>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self {
            env_file: Some(PathBuf::from(DEFAULT_ENV_FILE)),
        }
    }
}

impl SettingsLoader {
    /// Loader reading `.env` from the working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read dotenv values from `path` instead of `.env`.
    #[must_use]
    pub fn with_env_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.env_file = Some(path.into());
        self
    }

    /// Only consult the process environment.
    #[must_use]
    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    /// Load and validate settings
    ///
    /// # Returns
    /// * `Ok(Settings)` - Both values present and non-empty
    /// * `Err(ConfigError)` - A value is missing, empty or not UTF-8, or the
    ///   `.env` file is malformed
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let file_values = match &self.env_file {
            Some(path) => read_env_file(path)?,
            None => BTreeMap::new(),
        };
        let env_values = read_process_env()?;

        let figment = Figment::new()
            .merge(Serialized::defaults(file_values))
            .merge(Serialized::defaults(env_values));

        for key in SETTINGS_KEYS {
            if !figment.contains(key) {
                return Err(ConfigError::Missing(key));
            }
        }

        let settings: Settings = figment
            .extract()
            .map_err(|e| ConfigError::Extraction(e.to_string()))?;

        Self::validate(&settings)?;
        debug!(env_file = ?self.env_file, "settings loaded");
        Ok(settings)
    }

    /// Validate settings after loading
    ///
    /// # Errors
    /// Returns [`ConfigError::Empty`] for the first value that is empty
    /// after trimming whitespace.
    pub fn validate(settings: &Settings) -> Result<(), ConfigError> {
        if settings.database_url.trim().is_empty() {
            return Err(ConfigError::Empty(DATABASE_URL));
        }

        if settings.cryptocompare_api_key.trim().is_empty() {
            return Err(ConfigError::Empty(CRYPTOCOMPARE_API_KEY));
        }

        Ok(())
    }
}

/// Process-wide settings, loaded from `.env` and the environment on first
/// successful call.
///
/// Later calls return the same instance without re-reading any source. A
/// failed load caches nothing, so the next call tries again.
///
/// # Errors
/// Returns the [`ConfigError`] of the underlying [`SettingsLoader::load`].
pub fn get_settings() -> Result<&'static Settings, ConfigError> {
    if let Some(settings) = SETTINGS.get() {
        return Ok(settings);
    }

    let settings = SettingsLoader::new().load()?;
    Ok(SETTINGS.get_or_init(|| settings))
}

fn read_env_file(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(err) if err.not_found() => {
            debug!(path = %path.display(), "no env file found");
            return Ok(BTreeMap::new());
        }
        Err(err) => {
            return Err(ConfigError::EnvFile {
                path: path.to_path_buf(),
                message: err.to_string(),
            })
        }
    };

    let mut values = BTreeMap::new();
    for item in iter {
        let (key, value) = item.map_err(|err| ConfigError::EnvFile {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        if SETTINGS_KEYS.contains(&key.as_str()) {
            values.insert(key, value);
        }
    }
    Ok(values)
}

fn read_process_env() -> Result<BTreeMap<String, String>, ConfigError> {
    let mut values = BTreeMap::new();
    for key in SETTINGS_KEYS {
        match env::var(key) {
            Ok(value) => {
                values.insert(key.to_string(), value);
            }
            Err(VarError::NotPresent) => {}
            Err(VarError::NotUnicode(_)) => return Err(ConfigError::NotUnicode(key)),
        }
    }
    Ok(values)
}
