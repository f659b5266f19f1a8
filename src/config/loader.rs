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
    /// Uses `~/.config/feedback-survey/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("feedback-survey").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Config::default());
        }

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
    /// Checks:
    /// - Every simulated latency is nonzero
    /// - The thank-you countdown lasts at least one second
    /// - Toasts and the UI tick have a nonzero duration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let latencies = [
            ("get_all_ms", self.latency.get_all_ms),
            ("get_by_id_ms", self.latency.get_by_id_ms),
            ("create_ms", self.latency.create_ms),
            ("update_ms", self.latency.update_ms),
            ("delete_ms", self.latency.delete_ms),
        ];
        if let Some((name, _)) = latencies.iter().find(|(_, ms)| *ms == 0) {
            return Err(ConfigError::ValidationError {
                message: format!("latency.{name} must be greater than zero"),
            });
        }

        if self.survey.countdown_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "survey.countdown_seconds must be at least 1".to_string(),
            });
        }

        if self.survey.toast_seconds == 0 || self.survey.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "survey.toast_seconds and survey.tick_rate_ms must be greater than zero"
                    .to_string(),
            });
        }

        Ok(())
    }
}
