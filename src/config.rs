//! Application configuration
//!
//! Resolves the backend base URL and UI preferences once at startup. The
//! environment is consulted exactly once, in [`AppConfig::load`]; everything
//! else receives the resolved config through app state.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable overriding the backend base URL.
pub const API_BASE_ENV: &str = "TRAVELDESK_API_BASE";

/// Default backend address for a local run.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access data directory: {0}")]
    DataDirError(String),
    #[error("Failed to read or write config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to serialize/deserialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Root address of the messaging backend
    pub api_base_url: String,
    /// UI theme: "dark" or "light"
    pub theme: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            theme: "dark".to_string(),
        }
    }
}

impl AppConfig {
    /// Normalize loaded values.
    ///
    /// Guarantees a non-empty base URL without a trailing slash, so request
    /// targets can be formed by plain concatenation.
    pub fn validate(&mut self) {
        let trimmed = self.api_base_url.trim().trim_end_matches('/');
        self.api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };

        if self.theme != "dark" && self.theme != "light" {
            self.theme = "dark".to_string();
        }
    }

    /// Apply the `TRAVELDESK_API_BASE` override, if one was set.
    pub fn apply_override(&mut self, base_url: Option<String>) {
        if let Some(base) = base_url {
            self.api_base_url = base;
        }
    }

    /// Resolve the effective configuration for this run.
    ///
    /// Saved file (if any), then the environment override, then validation.
    /// A missing or unreadable file falls back to defaults.
    pub fn load() -> AppConfig {
        let mut config = match config_path().and_then(|path| Self::load_from(&path)) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                AppConfig::default()
            }
        };

        config.apply_override(std::env::var(API_BASE_ENV).ok());
        config.validate();

        tracing::info!("Backend base URL: {}", config.api_base_url);
        config
    }

    /// Load from a specific file. A missing file means defaults.
    pub fn load_from(path: &Path) -> Result<AppConfig, ConfigError> {
        if !path.exists() {
            tracing::info!("Config file not found, using defaults");
            return Ok(AppConfig::default());
        }

        let json = fs::read_to_string(path)?;
        let mut config: AppConfig = serde_json::from_str(&json)?;
        config.validate();

        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Persist to the platform config location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&config_path()?)
    }

    /// Persist to a specific file.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        tracing::debug!("Saved config to {}", path.display());
        Ok(())
    }
}

/// Get the application data directory
pub fn get_data_dir() -> Result<PathBuf, ConfigError> {
    directories::ProjectDirs::from("com", "TravelDesk", "TravelDesk")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| ConfigError::DataDirError("Could not determine data directory".to_string()))
}

/// Get the config file path
fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(get_data_dir()?.join("config.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "http://127.0.0.1:8000");
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_validate_trims_trailing_slash() {
        let mut config = AppConfig {
            api_base_url: "http://travel.example.com/".to_string(),
            ..AppConfig::default()
        };
        config.validate();
        assert_eq!(config.api_base_url, "http://travel.example.com");
    }

    #[test]
    fn test_validate_rejects_blank_base_url() {
        let mut config = AppConfig {
            api_base_url: "   ".to_string(),
            ..AppConfig::default()
        };
        config.validate();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_validate_normalizes_unknown_theme() {
        let mut config = AppConfig {
            theme: "solarized".to_string(),
            ..AppConfig::default()
        };
        config.validate();
        assert_eq!(config.theme, "dark");
    }

    #[test]
    fn test_override_wins_over_saved_value() {
        let mut config = AppConfig::default();
        config.apply_override(Some("http://10.0.0.5:9000/".to_string()));
        config.validate();
        assert_eq!(config.api_base_url, "http://10.0.0.5:9000");
    }

    #[test]
    fn test_no_override_keeps_saved_value() {
        let mut config = AppConfig::default();
        config.apply_override(None);
        config.validate();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let config = AppConfig {
            api_base_url: "http://192.168.1.20:8000".to_string(),
            theme: "light".to_string(),
        };
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.api_base_url, config.api_base_url);
        assert_eq!(loaded.theme, config.theme);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE);
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "not json at all").unwrap();

        assert!(AppConfig::load_from(&path).is_err());
    }
}
