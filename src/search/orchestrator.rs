//! Search orchestration
//!
//! `SearchService` composes the pipeline: spelling correction, provider
//! lookup, grouping, and fallback synthesis. It never fails to the caller —
//! any provider trouble degrades to synthesized placeholder content, so the
//! grid is always populated.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tracing::{debug, warn};

use crate::config::SearchConfig;
use crate::error::ProviderError;
use crate::models::Place;

use super::grouper::group_images;
use super::provider::ImageProvider;
use super::spelling::correct_spelling;
use super::synth::Synthesizer;

/// Fixed qualifier appended to every provider query
const SEARCH_QUALIFIER: &str = "travel destination landscape";

/// Shape of a fully synthesized response: 6 places of 5 images each
const FALLBACK_PLACES: usize = 6;
const FALLBACK_IMAGES: usize = 5;

/// Cycled into the synthesizer tags so fallback places differ in texture
const FALLBACK_VARIATIONS: &[&str] = &["city", "landscape", "architecture", "nature", "tourism"];

/// One resolved search, tagged with its generation so the presentation layer
/// can discard results from overlapping calls that finished out of order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Monotonically increasing per service; higher means fresher
    pub generation: u64,
    /// The query as the user typed it
    pub query: String,
    /// The spelling-corrected form used for all lookups
    pub canonical_query: String,
    /// Never empty
    pub places: Vec<Place>,
}

/// Top-level entry point of the search resolution pipeline
pub struct SearchService {
    provider: Option<Box<dyn ImageProvider>>,
    synth: Mutex<Synthesizer>,
    batch_size: usize,
    image_count: u32,
    generation: AtomicU64,
}

impl SearchService {
    /// Service with OS-seeded synthesis randomness
    #[must_use]
    pub fn new(provider: Option<Box<dyn ImageProvider>>, config: &SearchConfig) -> Self {
        Self::with_synthesizer(provider, config, Synthesizer::new())
    }

    /// Service with a caller-supplied synthesizer (tests seed it)
    #[must_use]
    pub fn with_synthesizer(
        provider: Option<Box<dyn ImageProvider>>,
        config: &SearchConfig,
        synth: Synthesizer,
    ) -> Self {
        Self {
            provider,
            synth: Mutex::new(synth),
            batch_size: config.batch_size,
            image_count: config.image_count,
            generation: AtomicU64::new(0),
        }
    }

    /// Resolve a raw user query into a non-empty list of places.
    ///
    /// Provider failures are logged and absorbed; the worst case is a fully
    /// synthesized result set, indistinguishable in shape from a search with
    /// no real photos available.
    pub async fn search(&self, raw_query: &str) -> SearchResponse {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let canonical = correct_spelling(raw_query);
        debug!("Search '{}' corrected to '{}'", raw_query, canonical);

        let places = match &self.provider {
            Some(provider) => match self.resolve_with_provider(provider.as_ref(), &canonical).await
            {
                Ok(places) => places,
                Err(e) => {
                    warn!(
                        "{} lookup failed for '{}': {}; synthesizing fallback results",
                        provider.name(),
                        canonical,
                        e
                    );
                    self.fallback_places(&canonical)
                }
            },
            None => {
                debug!("No image provider configured for '{}'", canonical);
                self.fallback_places(&canonical)
            }
        };

        SearchResponse {
            generation,
            query: raw_query.to_string(),
            canonical_query: canonical,
            places,
        }
    }

    /// Generation of the most recently started search
    #[must_use]
    pub fn latest_generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Whether a response generation is still the freshest one
    #[must_use]
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.latest_generation()
    }

    async fn resolve_with_provider(
        &self,
        provider: &dyn ImageProvider,
        canonical: &str,
    ) -> Result<Vec<Place>, ProviderError> {
        let search_terms = format!("{canonical} {SEARCH_QUALIFIER}");
        let images = provider.fetch_images(&search_terms, self.image_count).await?;
        if images.is_empty() {
            return Err(ProviderError::EmptyResult);
        }

        // The text capability is optional and its failure is not a reason
        // to discard a perfectly good image response.
        let text = match provider.fetch_text(canonical).await {
            Ok(text) => text,
            Err(e) => {
                debug!("Text lookup failed for '{}': {}", canonical, e);
                None
            }
        };
        let raw_tags = text.as_ref().map(|t| t.long_description.as_str());

        let mut synth = self.synth.lock().expect("synthesizer lock poisoned");
        let places = group_images(&images, self.batch_size, canonical, raw_tags, &mut synth);
        if places.is_empty() {
            return Err(ProviderError::EmptyResult);
        }
        Ok(places)
    }

    fn fallback_places(&self, canonical: &str) -> Vec<Place> {
        let mut synth = self.synth.lock().expect("synthesizer lock poisoned");

        (0..FALLBACK_PLACES)
            .map(|index| {
                let variation = FALLBACK_VARIATIONS[index % FALLBACK_VARIATIONS.len()];
                let tags = format!("{canonical} {variation}");
                let details = synth.synthesize(canonical, index, Some(&tags));
                Place {
                    id: format!("fallback-{index}"),
                    name: details.name,
                    country: details.country,
                    description: details.description,
                    long_description: details.long_description,
                    images: placeholder_images(canonical, index, FALLBACK_IMAGES),
                    category: details.category,
                    coordinates: details.coordinates,
                    best_time_to_visit: details.best_time_to_visit,
                    attractions: details.attractions,
                }
            })
            .collect()
    }
}

/// Placeholder gallery for one fallback place.
///
/// Seeded from the query so repeated searches reproduce the same URL shapes,
/// while each group and slot stays visually distinct.
fn placeholder_images(query: &str, group: usize, count: usize) -> Vec<String> {
    let base = 1_500_000_000_u64 + (fnv1a(query) % 100_000) * 1_000;
    (0..count)
        .map(|slot| {
            format!(
                "https://images.unsplash.com/photo-{}?w=800&h=600&fit=crop&crop=center&auto=format&q=80",
                base + (group as u64) * 100 + slot as u64
            )
        })
        .collect()
}

/// FNV-1a, stable across platforms and releases
fn fnv1a(text: &str) -> u64 {
    let mut hash = 0xcbf2_9ce4_8422_2325_u64;
    for byte in text.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}
