//! Unsplash image search adapter

use std::time::Duration;

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, info};

use crate::config::ProviderConfig;
use crate::error::{ProviderError, WanderAiError};

use super::{ImageProvider, ProviderText, usable_key};

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";

/// Adapter for the Unsplash photo search API.
///
/// Search hits arrive grouped under `results` with a `urls` object per hit.
/// Unlike Pixabay, hits carry editorial text, so this adapter also implements
/// the optional text capability.
pub struct UnsplashProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct UnsplashResponse {
    #[serde(default)]
    results: Vec<UnsplashResult>,
}

#[derive(Debug, Deserialize)]
struct UnsplashResult {
    urls: UnsplashUrls,
    description: Option<String>,
    alt_description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UnsplashUrls {
    regular: Option<String>,
    full: Option<String>,
}

impl UnsplashProvider {
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

    async fn search(
        &self,
        query: &str,
        per_page: u32,
    ) -> std::result::Result<UnsplashResponse, ProviderError> {
        let Some(key) = usable_key(self.api_key.as_deref()) else {
            return Err(ProviderError::Unavailable(
                "Unsplash access key is not configured".to_string(),
            ));
        };

        let url = format!(
            "{}/search/photos?query={}&per_page={}&orientation=landscape",
            self.base_url,
            urlencoding::encode(query),
            per_page
        );

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Client-ID {key}"))
            .send()
            .await
            .map_err(|e| ProviderError::Unavailable(format!("Unsplash request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(match status.as_u16() {
                401 | 403 => ProviderError::Unavailable(
                    "Unsplash rejected the access key".to_string(),
                ),
                429 => ProviderError::Unavailable(
                    "Unsplash API rate limit exceeded".to_string(),
                ),
                _ => ProviderError::Unavailable(format!("Unsplash API error {status}")),
            });
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::MalformedResponse(format!("Unsplash response: {e}")))
    }
}

#[async_trait::async_trait]
impl ImageProvider for UnsplashProvider {
    fn name(&self) -> &'static str {
        "unsplash"
    }

    async fn fetch_images(
        &self,
        query: &str,
        count: u32,
    ) -> std::result::Result<Vec<String>, ProviderError> {
        debug!("Querying Unsplash for '{}'", query);

        let body = self.search(query, count).await?;
        let images = flatten_results(body);
        if images.is_empty() {
            return Err(ProviderError::EmptyResult);
        }

        info!("Unsplash returned {} images for '{}'", images.len(), query);
        Ok(images)
    }

    async fn fetch_text(
        &self,
        query: &str,
    ) -> std::result::Result<Option<ProviderText>, ProviderError> {
        let body = self.search(query, 1).await?;
        Ok(body.results.into_iter().next().and_then(text_from_result))
    }
}

/// Normalize search hits to a flat URL sequence, preferring the regular
/// rendition over the full-resolution one.
fn flatten_results(response: UnsplashResponse) -> Vec<String> {
    response
        .results
        .into_iter()
        .filter_map(|result| result.urls.regular.or(result.urls.full))
        .collect()
}

fn text_from_result(result: UnsplashResult) -> Option<ProviderText> {
    let description = result
        .alt_description
        .clone()
        .or_else(|| result.description.clone())?;
    let long_description = result.description.or(result.alt_description)?;
    Some(ProviderText {
        description,
        long_description,
    })
}
