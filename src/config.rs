//! Client configuration.
//!
//! The only tunable is the backend base URL. Resolution order, lowest to
//! highest precedence: hardcoded local default, `config.toml` in the
//! config directory, the `PUNCHLIST_API_URL` environment variable, and
//! finally the `--api-url` CLI flag (applied by the binary).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::app_dirs;
use crate::error::ConfigError;

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5001";

/// Environment variable overriding the configured base URL.
pub const ENV_API_URL: &str = "PUNCHLIST_API_URL";

/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the task-list backend, without a trailing slash.
    pub api_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Save configuration to a TOML file, creating parent directories as
    /// needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot
    /// be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Effective configuration from an explicit config file path plus the
    /// environment.
    ///
    /// A missing file yields the defaults; a present but malformed file is
    /// an error. `PUNCHLIST_API_URL`, when set and non-blank, overrides the
    /// file's base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(path)?
        } else {
            Self::default()
        };
        if let Some(url) = std::env::var_os(ENV_API_URL) {
            let url = url.to_string_lossy();
            let url = url.trim();
            if !url.is_empty() {
                config.api_url = url.to_owned();
            }
        }
        Ok(config)
    }

    /// Effective configuration from the default config file location.
    ///
    /// # Errors
    ///
    /// Returns an error if an existing config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&app_dirs::config_file())
    }
}
