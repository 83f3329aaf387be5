//! End-to-end properties of the search resolution pipeline

use wanderai::config::SearchConfig;
use wanderai::error::ProviderError;
use wanderai::search::{ImageProvider, SearchService, Synthesizer, correct_spelling, suggestions};

/// Provider that always returns the same URL list
struct FixedProvider {
    urls: Vec<String>,
}

impl FixedProvider {
    fn with_images(n: usize) -> Self {
        Self {
            urls: (0..n).map(|i| format!("https://img.example/{i}.jpg")).collect(),
        }
    }
}

#[async_trait::async_trait]
impl ImageProvider for FixedProvider {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch_images(&self, _query: &str, _count: u32) -> Result<Vec<String>, ProviderError> {
        Ok(self.urls.clone())
    }
}

/// Provider that simulates a transport failure on every call
struct DownProvider;

#[async_trait::async_trait]
impl ImageProvider for DownProvider {
    fn name(&self) -> &'static str {
        "down"
    }

    async fn fetch_images(&self, _query: &str, _count: u32) -> Result<Vec<String>, ProviderError> {
        Err(ProviderError::Unavailable("connection refused".to_string()))
    }
}

fn service(provider: Option<Box<dyn ImageProvider>>) -> SearchService {
    SearchService::with_synthesizer(provider, &SearchConfig::default(), Synthesizer::with_seed(7))
}

#[tokio::test]
async fn test_search_is_never_empty() {
    let service = service(None);
    for query in ["paris", "afganistan", "random gibberish xyz", ""] {
        let response = service.search(query).await;
        assert!(!response.places.is_empty(), "empty result for {query:?}");
        for place in &response.places {
            assert!(!place.images.is_empty(), "imageless place for {query:?}");
            assert!(place.coordinates.is_valid());
            assert!((3..=6).contains(&place.attractions.len()));
        }
    }
}

#[tokio::test]
async fn test_unreachable_provider_yields_exact_fallback_shape() {
    let service = service(Some(Box::new(DownProvider)));
    let response = service.search("paris").await;

    assert_eq!(response.places.len(), 6);
    for place in &response.places {
        assert_eq!(place.images.len(), 5);
    }
}

#[tokio::test]
async fn test_fallback_shape_is_idempotent() {
    let service = service(None);
    let first = service.search("tokyo").await;
    let second = service.search("tokyo").await;

    assert_eq!(first.places.len(), second.places.len());
    let first_counts: Vec<usize> = first.places.iter().map(|p| p.images.len()).collect();
    let second_counts: Vec<usize> = second.places.iter().map(|p| p.images.len()).collect();
    assert_eq!(first_counts, second_counts);
}

#[tokio::test]
async fn test_seventeen_provider_images_group_as_5_5_5_2() {
    let service = service(Some(Box::new(FixedProvider::with_images(17))));
    let response = service.search("greece").await;

    let counts: Vec<usize> = response.places.iter().map(|p| p.images.len()).collect();
    assert_eq!(counts, vec![5, 5, 5, 2]);
}

#[tokio::test]
async fn test_place_ids_unique_within_response() {
    let service = service(Some(Box::new(FixedProvider::with_images(30))));
    let response = service.search("greece").await;

    let mut ids: Vec<&str> = response.places.iter().map(|p| p.id.as_str()).collect();
    let before = ids.len();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), before);
}

#[test]
fn test_spec_correction_examples() {
    assert_eq!(correct_spelling("afganistan"), "afghanistan");
    assert_eq!(correct_spelling("random gibberish xyz"), "random gibberish xyz");
}

#[test]
fn test_spec_suggestion_examples() {
    assert!(suggestions("gre").iter().any(|s| s == "greece"));
    assert!(suggestions("x").is_empty());
}
