//! Grouping of flat provider image lists into discrete places
//!
//! Providers return one flat, ordered URL list per query. The gallery wants
//! a handful of places with a multi-image gallery each, so the list is cut
//! into consecutive batches and every batch gets a synthesized identity.

use crate::models::Place;

use super::synth::Synthesizer;

/// Images per place when the caller does not override it
pub const DEFAULT_BATCH_SIZE: usize = 5;

/// Upper bound on places produced from one provider response
pub const MAX_GROUPS: usize = 6;

/// Partition `images` into places of `batch_size` images each.
///
/// At most [`MAX_GROUPS`] places are produced; a final short chunk still
/// becomes a place, so any non-empty input yields at least one place. An
/// empty input yields no places, which the orchestrator treats as an empty
/// provider result.
pub fn group_images(
    images: &[String],
    batch_size: usize,
    query: &str,
    raw_tags: Option<&str>,
    synth: &mut Synthesizer,
) -> Vec<Place> {
    let batch_size = batch_size.max(1);
    let prefix = slug(query);

    images
        .chunks(batch_size)
        .take(MAX_GROUPS)
        .enumerate()
        .map(|(index, chunk)| {
            let details = synth.synthesize(query, index, raw_tags);
            Place {
                id: format!("{prefix}-{index}"),
                name: details.name,
                country: details.country,
                description: details.description,
                long_description: details.long_description,
                images: chunk.to_vec(),
                category: details.category,
                coordinates: details.coordinates,
                best_time_to_visit: details.best_time_to_visit,
                attractions: details.attractions,
            }
        })
        .collect()
}

/// URL- and id-safe form of a query ("new york" -> "new-york")
fn slug(query: &str) -> String {
    let slug: String = query
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "place".to_string()
    } else {
        trimmed.to_string()
    }
}
