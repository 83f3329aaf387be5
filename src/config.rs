//! Configuration management for the `WanderAI` backend
//!
//! Loads layered configuration: an optional TOML file in the user config
//! directory, then environment overrides with the `WANDERAI` prefix. The
//! provider credential lives here and only here; nothing is compiled in.

use crate::WanderAiError;
use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration structure for the `WanderAI` backend
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WanderAiConfig {
    /// Image provider selection and credentials
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Search pipeline tuning
    #[serde(default)]
    pub search: SearchConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// HTTP server binding
    #[serde(default)]
    pub server: ServerConfig,
}

/// Image provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Which provider to use: "pixabay", "unsplash", or "none"
    #[serde(default = "default_provider_kind")]
    pub kind: String,
    /// Provider credential; sourced from config/env, never from code
    pub api_key: Option<String>,
    /// Override the provider endpoint (tests, proxies)
    pub base_url: Option<String>,
    /// Request timeout in seconds
    #[serde(default = "default_provider_timeout")]
    pub timeout_seconds: u32,
}

/// Search pipeline settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How many images to request from the provider per search
    #[serde(default = "default_image_count")]
    pub image_count: u32,
    /// Images per place in the result grid
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json)
    #[serde(default = "default_log_format")]
    pub format: String,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
}

// Default value functions
fn default_provider_kind() -> String {
    "none".to_string()
}

fn default_provider_timeout() -> u32 {
    30
}

fn default_image_count() -> u32 {
    30
}

fn default_batch_size() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    8787
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            kind: default_provider_kind(),
            api_key: None,
            base_url: None,
            timeout_seconds: default_provider_timeout(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            image_count: default_image_count(),
            batch_size: default_batch_size(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
        }
    }
}

impl WanderAiConfig {
    /// Load configuration from file and environment variables
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Load configuration from specified path
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let mut builder = Config::builder();

        let config_file = config_path.unwrap_or_else(|| {
            Self::get_config_path().unwrap_or_else(|| PathBuf::from("config.toml"))
        });

        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        // Environment overrides, e.g. WANDERAI__PROVIDER__API_KEY
        builder = builder.add_source(
            Environment::with_prefix("WANDERAI")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: WanderAiConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;

        Ok(config)
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn get_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("wanderai").join("config.toml"))
    }

    /// Validate all configuration settings
    pub fn validate(&self) -> Result<()> {
        self.validate_provider()?;
        self.validate_numeric_ranges()?;
        self.validate_string_values()?;
        Ok(())
    }

    /// Validate provider selection and credential shape
    pub fn validate_provider(&self) -> Result<()> {
        let valid_kinds = ["pixabay", "unsplash", "none"];
        if !valid_kinds.contains(&self.provider.kind.as_str()) {
            return Err(WanderAiError::config(format!(
                "Invalid provider kind '{}'. Must be one of: {}",
                self.provider.kind,
                valid_kinds.join(", ")
            ))
            .into());
        }

        if let Some(api_key) = &self.provider.api_key {
            if api_key.is_empty() {
                return Err(WanderAiError::config(
                    "Provider API key cannot be empty if provided. Either remove it or provide a valid key.",
                )
                .into());
            }

            if api_key.len() < 8 {
                return Err(WanderAiError::config(
                    "Provider API key appears to be invalid (too short). Please check your API key.",
                )
                .into());
            }

            if api_key.len() > 100 {
                return Err(WanderAiError::config(
                    "Provider API key appears to be invalid (too long). Please check your API key.",
                )
                .into());
            }
        }

        Ok(())
    }

    /// Validate numeric configuration ranges
    fn validate_numeric_ranges(&self) -> Result<()> {
        if self.provider.timeout_seconds == 0 || self.provider.timeout_seconds > 300 {
            return Err(
                WanderAiError::config("Provider timeout must be between 1 and 300 seconds").into(),
            );
        }

        if self.search.image_count == 0 || self.search.image_count > 200 {
            return Err(
                WanderAiError::config("Search image count must be between 1 and 200").into(),
            );
        }

        if self.search.batch_size == 0 || self.search.batch_size > 12 {
            return Err(
                WanderAiError::config("Search batch size must be between 1 and 12").into(),
            );
        }

        Ok(())
    }

    /// Validate string configuration values
    fn validate_string_values(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            return Err(WanderAiError::config(format!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            ))
            .into());
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            return Err(WanderAiError::config(format!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            ))
            .into());
        }

        if let Some(base_url) = &self.provider.base_url {
            if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
                return Err(WanderAiError::config(
                    "Provider base URL must be a valid HTTP or HTTPS URL",
                )
                .into());
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WanderAiConfig::default();
        assert_eq!(config.provider.kind, "none");
        assert_eq!(config.provider.timeout_seconds, 30);
        assert_eq!(config.search.image_count, 30);
        assert_eq!(config.search.batch_size, 5);
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.port, 8787);
        assert!(config.provider.api_key.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_invalid_provider_kind() {
        let mut config = WanderAiConfig::default();
        config.provider.kind = "flickr".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("provider kind"));
    }

    #[test]
    fn test_config_validation_short_api_key() {
        let mut config = WanderAiConfig::default();
        config.provider.kind = "pixabay".to_string();
        config.provider.api_key = Some("abc".to_string());
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too short"));
    }

    #[test]
    fn test_config_validation_valid_api_key() {
        let mut config = WanderAiConfig::default();
        config.provider.kind = "pixabay".to_string();
        config.provider.api_key = Some("valid_api_key_123".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_numeric_ranges() {
        let mut config = WanderAiConfig::default();
        config.provider.timeout_seconds = 500;
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("timeout"));

        let mut config = WanderAiConfig::default();
        config.search.batch_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_invalid_log_level() {
        let mut config = WanderAiConfig::default();
        config.logging.level = "loud".to_string();
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_config_validation_base_url_scheme() {
        let mut config = WanderAiConfig::default();
        config.provider.base_url = Some("ftp://pixabay.example".to_string());
        assert!(config.validate().is_err());

        config.provider.base_url = Some("https://pixabay.example/api/".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_path_generation() {
        let path = WanderAiConfig::get_config_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().contains("wanderai"));
        assert!(path.to_string_lossy().contains("config.toml"));
    }
}
