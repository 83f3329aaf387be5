//! Image provider adapters
//!
//! The system has been pointed at several third-party search APIs over time.
//! They all reduce to one capability: given a query, return zero or more
//! image URLs and optionally some descriptive text, or fail recoverably.
//! Concrete adapters normalize the per-provider response shapes behind the
//! [`ImageProvider`] trait and are selected once at configuration time.

use async_trait::async_trait;

use crate::Result;
use crate::config::ProviderConfig;
use crate::error::{ProviderError, WanderAiError};

pub mod pixabay;
pub mod unsplash;

pub use pixabay::PixabayProvider;
pub use unsplash::UnsplashProvider;

/// Descriptive text from a provider that supports the text capability
#[derive(Debug, Clone)]
pub struct ProviderText {
    /// One-line summary, card-sized
    pub description: String,
    /// Longer passage, modal-sized
    pub long_description: String,
}

/// Uniform capability over external image/text search services.
///
/// Implementations fail openly: transport errors, non-success statuses,
/// quota exhaustion and missing credentials all surface as
/// [`ProviderError`] for the orchestrator to catch.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Fetch up to `count` image URLs for `query`, in display order
    async fn fetch_images(&self, query: &str, count: u32) -> std::result::Result<Vec<String>, ProviderError>;

    /// Optional capability: descriptive text for `query`.
    ///
    /// Providers without a text search return `Ok(None)`.
    async fn fetch_text(
        &self,
        query: &str,
    ) -> std::result::Result<Option<ProviderText>, ProviderError> {
        let _ = query;
        Ok(None)
    }
}

/// Build the configured provider, or `None` when searches should go straight
/// to fallback synthesis (`provider.kind = "none"`).
pub fn build_provider(config: &ProviderConfig) -> Result<Option<Box<dyn ImageProvider>>> {
    match config.kind.as_str() {
        "pixabay" => Ok(Some(Box::new(PixabayProvider::new(config)?))),
        "unsplash" => Ok(Some(Box::new(UnsplashProvider::new(config)?))),
        "none" => Ok(None),
        other => Err(WanderAiError::config(format!(
            "Unknown provider kind '{other}'. Must be one of: pixabay, unsplash, none"
        ))),
    }
}

/// A credential usable for real requests: present, non-empty, and not an
/// obvious placeholder left over from a config template.
pub(crate) fn usable_key(api_key: Option<&str>) -> Option<&str> {
    api_key
        .map(str::trim)
        .filter(|key| !key.is_empty() && !key.starts_with("YOUR_") && *key != "changeme")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    #[test]
    fn test_usable_key_rejects_placeholders() {
        assert_eq!(usable_key(None), None);
        assert_eq!(usable_key(Some("")), None);
        assert_eq!(usable_key(Some("  ")), None);
        assert_eq!(usable_key(Some("YOUR_API_KEY")), None);
        assert_eq!(usable_key(Some("changeme")), None);
        assert_eq!(usable_key(Some("45158-abcdef")), Some("45158-abcdef"));
    }

    #[test]
    fn test_build_provider_selection() {
        let mut config = ProviderConfig::default();

        config.kind = "none".to_string();
        assert!(build_provider(&config).unwrap().is_none());

        config.kind = "pixabay".to_string();
        let provider = build_provider(&config).unwrap().unwrap();
        assert_eq!(provider.name(), "pixabay");

        config.kind = "unsplash".to_string();
        let provider = build_provider(&config).unwrap().unwrap();
        assert_eq!(provider.name(), "unsplash");

        config.kind = "flickr".to_string();
        assert!(build_provider(&config).is_err());
    }
}
