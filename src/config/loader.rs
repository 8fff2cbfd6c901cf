use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/passforge/config.toml` on Unix/macOS, or equivalent
    /// on other platforms via `dirs::config_dir()`. Falls back to the
    /// current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("passforge").join("config.toml")
    }

    /// Returns the path of the log file, next to the config file.
    ///
    /// The TUI owns the terminal, so diagnostics go to a file instead of
    /// stderr.
    pub fn log_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("passforge").join("passforge.log")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error: defaults apply.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::config_path();

        if !path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here: the caller
    /// asked for this file specifically.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Letters are always in the generation pool, so disabling every
    /// optional class is still a valid setup.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.defaults.length == 0 {
            return Err(ConfigError::ValidationError {
                message: "Password length must be at least 1".to_string(),
            });
        }

        if self.defaults.widgets == 0 {
            return Err(ConfigError::ValidationError {
                message: "At least one widget must be configured".to_string(),
            });
        }

        Ok(())
    }
}
