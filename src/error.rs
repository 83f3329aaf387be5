//! Error types and handling for the `WanderAI` backend

use thiserror::Error;

/// Main error type for the `WanderAI` application
#[derive(Error, Debug)]
pub enum WanderAiError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Provider lookup failures that escaped the orchestrator boundary
    #[error("Provider error: {source}")]
    Provider {
        #[from]
        source: ProviderError,
    },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl WanderAiError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WanderAiError::Config { .. } => {
                "Configuration error. Please check your config file and API keys.".to_string()
            }
            WanderAiError::Provider { .. } => {
                "Unable to reach the image search service. Please check your internet connection."
                    .to_string()
            }
            WanderAiError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            WanderAiError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            WanderAiError::General { message } => message.clone(),
        }
    }
}

/// Recoverable conditions from an image/text provider.
///
/// Every variant degrades to fallback synthesis at the orchestrator boundary;
/// none of them is fatal to a search call.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network failure, non-success HTTP status, quota exhaustion, or a
    /// missing/placeholder credential
    #[error("Provider unavailable: {0}")]
    Unavailable(String),

    /// Provider responded successfully but returned zero images
    #[error("Provider returned no images")]
    EmptyResult,

    /// Provider responded with a JSON shape the adapter cannot decode
    #[error("Malformed provider response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ProviderError::MalformedResponse(err.to_string())
        } else {
            ProviderError::Unavailable(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = WanderAiError::config("missing API key");
        assert!(matches!(config_err, WanderAiError::Config { .. }));

        let validation_err = WanderAiError::validation("empty query");
        assert!(matches!(validation_err, WanderAiError::Validation { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = WanderAiError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let provider_err: WanderAiError = ProviderError::EmptyResult.into();
        assert!(provider_err.user_message().contains("image search service"));

        let validation_err = WanderAiError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));
    }

    #[test]
    fn test_provider_error_display() {
        let err = ProviderError::Unavailable("HTTP 429".to_string());
        assert_eq!(err.to_string(), "Provider unavailable: HTTP 429");
        assert_eq!(
            ProviderError::EmptyResult.to_string(),
            "Provider returned no images"
        );
    }
}
