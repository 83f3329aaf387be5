//! Live autocomplete suggestions for the search bar
//!
//! Candidates come from two static sources in a fixed order: canonical forms
//! of the correction table, then a popular-destination list. Output is
//! de-duplicated and capped, so the dropdown stays deterministic for a given
//! partial query.

use super::spelling::PLACE_CORRECTIONS;

/// Maximum number of suggestions returned for one partial query
pub const MAX_SUGGESTIONS: usize = 5;

/// Frequently searched destinations, appended after table-derived candidates
const POPULAR_PLACES: &[&str] = &[
    "paris",
    "london",
    "tokyo",
    "new york",
    "istanbul",
    "dubai",
    "bangkok",
    "singapore",
    "hong kong",
    "amsterdam",
    "rome",
    "barcelona",
    "vienna",
    "prague",
    "budapest",
    "maldives",
    "bali",
    "santorini",
    "machu picchu",
    "petra",
    "taj mahal",
    "great wall china",
    "pyramids egypt",
    "afghanistan",
    "turkey",
    "greece",
    "italy",
    "spain",
    "portugal",
    "morocco",
    "egypt",
    "thailand",
    "vietnam",
    "cambodia",
    "laos",
    "myanmar",
    "philippines",
    "indonesia",
    "malaysia",
    "india",
    "nepal",
    "bhutan",
    "sri lanka",
];

/// Ordered suggestions for a partial query, at most [`MAX_SUGGESTIONS`].
///
/// Inputs shorter than 2 characters produce nothing; the dropdown would be
/// pure noise at that length.
#[must_use]
pub fn suggestions(partial: &str) -> Vec<String> {
    if partial.len() < 2 {
        return Vec::new();
    }

    let needle = partial.to_lowercase();
    let mut collected: Vec<String> = Vec::new();

    for (misspelling, canonical) in PLACE_CORRECTIONS {
        if misspelling.contains(&needle) || canonical.contains(&needle) {
            if !collected.iter().any(|s| s == canonical) {
                collected.push((*canonical).to_string());
            }
        }
    }

    for place in POPULAR_PLACES {
        if place.contains(&needle) && !collected.iter().any(|s| s == place) {
            collected.push((*place).to_string());
        }
    }

    collected.truncate(MAX_SUGGESTIONS);
    collected
}
