//! Pixabay image search adapter

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::{ProviderError, WanderAiError};

use super::{ImageProvider, usable_key};

const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

/// Adapter for the Pixabay keyword-image search API.
///
/// The key travels as a query parameter; the response is a flat `hits` list
/// where each hit carries several URL sizes.
pub struct PixabayProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct PixabayResponse {
    #[serde(default)]
    hits: Vec<PixabayHit>,
}

#[derive(Debug, Deserialize)]
struct PixabayHit {
    #[serde(rename = "webformatURL")]
    webformat_url: Option<String>,
    #[serde(rename = "largeImageURL")]
    large_image_url: Option<String>,
}

impl PixabayProvider {
    /// Create a new adapter from the provider configuration
    pub fn new(config: &ProviderConfig) -> crate::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_seconds)))
            .user_agent(concat!("WanderAI/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| WanderAiError::general(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

#[async_trait::async_trait]
impl ImageProvider for PixabayProvider {
    fn name(&self) -> &'static str {
        "pixabay"
    }

    async fn fetch_images(
        &self,
        query: &str,
        count: u32,
    ) -> std::result::Result<Vec<String>, ProviderError> {
        let Some(key) = usable_key(self.api_key.as_deref()) else {
            // No network call without a credential
            return Err(ProviderError::Unavailable(
                "Pixabay API key is not configured".to_string(),
            ));
        };

        let url = format!(
            "{}?key={}&q={}&image_type=photo&orientation=horizontal&category=places&per_page={}&min_width=1920&min_height=1080",
            self.base_url,
            key,
            urlencoding::encode(query),
            count
        );

        debug!("Querying Pixabay for '{}'", query);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(format!("Pixabay request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::Unavailable(
                    "Pixabay rejected the API key".to_string(),
                ),
                429 => ProviderError::Unavailable(
                    "Pixabay API rate limit exceeded".to_string(),
                ),
                _ => ProviderError::Unavailable(format!("Pixabay API error {status}")),
            });
        }

        let body: PixabayResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(format!("Pixabay response: {e}")))?;

        let images = flatten_hits(body);
        if images.is_empty() {
            return Err(ProviderError::EmptyResult);
        }

        info!("Pixabay returned {} images for '{}'", images.len(), query);
        Ok(images)
    }
}

/// Normalize the hit list to a flat URL sequence, preferring the web-sized
/// rendition and skipping hits with no usable URL at all.
fn flatten_hits(response: PixabayResponse) -> Vec<String> {
    response
        .hits
        .into_iter()
        .filter_map(|hit| hit.webformat_url.or(hit.large_image_url))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProviderConfig;

    fn provider_with_key(key: Option<&str>) -> PixabayProvider {
        let config = ProviderConfig {
            kind: "pixabay".to_string(),
            api_key: key.map(str::to_string),
            ..ProviderConfig::default()
        };
        PixabayProvider::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_missing_key_is_unavailable_without_io() {
        let provider = provider_with_key(None);
        let err = provider.fetch_images("paris", 10).await.unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable(_)));

        let provider = provider_with_key(Some("YOUR_API_KEY"));
        let err = provider.fetch_images("paris", 10).await.unwrap_err();
        assert!(matches!(err, ProviderError::Unavailable(_)));
    }

    #[test]
    fn test_flatten_prefers_webformat_url() {
        let body = r#"{
            "total": 3,
            "hits": [
                {"id": 1, "webformatURL": "https://cdn.pixabay.com/a.jpg", "largeImageURL": "https://cdn.pixabay.com/a_big.jpg"},
                {"id": 2, "largeImageURL": "https://cdn.pixabay.com/b_big.jpg"},
                {"id": 3, "tags": "no urls at all"}
            ]
        }"#;
        let response: PixabayResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            flatten_hits(response),
            vec![
                "https://cdn.pixabay.com/a.jpg".to_string(),
                "https://cdn.pixabay.com/b_big.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_missing_hits_field_decodes_to_empty() {
        let response: PixabayResponse = serde_json::from_str("{}").unwrap();
        assert!(flatten_hits(response).is_empty());
    }
}
