//! Metadata synthesis for places without authoritative data
//!
//! Providers return images, not editorial content. This module fills in the
//! rest: descriptions from sentence templates, a category from keyword
//! matching, pseudo-random coordinates and travel seasons, and names and
//! attractions from static destination tables. Output is best-effort
//! decorative; callers must not treat the numbers as real geocoding.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Category, Coordinates};

/// Provider text shorter than this is ignored in favour of the template
const LONG_TEXT_MIN: usize = 120;

const DESCRIPTION_TEMPLATES: &[&str] = &[
    "Discover the breathtaking beauty of {place} with its stunning landscapes and rich cultural heritage.",
    "Experience the magnificent {place}, a destination that captivates visitors with its unique charm.",
    "Explore {place}, where natural beauty meets cultural significance in perfect harmony.",
    "Visit {place} and immerse yourself in its spectacular scenery and fascinating history.",
    "Journey to {place}, a place of extraordinary beauty and unforgettable experiences.",
];

const LONG_DESCRIPTION_TEMPLATE: &str = "{place} is a remarkable destination that offers visitors an incredible blend of natural beauty, cultural richness, and historical significance. From stunning landscapes to vibrant local traditions, this place provides endless opportunities for exploration and discovery. Whether you're interested in adventure, relaxation, or cultural immersion, {place} has something special to offer every traveler. The region's unique character is reflected in its architecture, cuisine, and the warmth of its people, making it a truly unforgettable destination.";

const BEST_TIMES: &[&str] = &[
    "April to October",
    "May to September",
    "March to November",
    "Year-round",
    "October to March",
    "June to August",
    "December to February",
];

/// Lower-cased query -> country display name
const COUNTRY_BY_QUERY: &[(&str, &str)] = &[
    ("afghanistan", "Afghanistan"),
    ("turkey", "Turkey"),
    ("istanbul", "Turkey"),
    ("egypt", "Egypt"),
    ("cairo", "Egypt"),
    ("greece", "Greece"),
    ("athens", "Greece"),
    ("italy", "Italy"),
    ("rome", "Italy"),
    ("spain", "Spain"),
    ("madrid", "Spain"),
    ("portugal", "Portugal"),
    ("lisbon", "Portugal"),
    ("morocco", "Morocco"),
    ("thailand", "Thailand"),
    ("bangkok", "Thailand"),
    ("vietnam", "Vietnam"),
    ("cambodia", "Cambodia"),
    ("myanmar", "Myanmar"),
    ("philippines", "Philippines"),
    ("indonesia", "Indonesia"),
    ("malaysia", "Malaysia"),
    ("singapore", "Singapore"),
    ("india", "India"),
    ("nepal", "Nepal"),
    ("sri lanka", "Sri Lanka"),
];

/// Lower-cased query -> cities, indexed by result-group position
const CITIES_BY_QUERY: &[(&str, &[&str])] = &[
    ("afghanistan", &["Kabul", "Herat", "Mazar-i-Sharif"]),
    ("turkey", &["Istanbul", "Ankara", "Antalya"]),
    ("egypt", &["Cairo", "Luxor", "Alexandria"]),
    ("greece", &["Athens", "Santorini", "Thessaloniki"]),
    ("italy", &["Rome", "Venice", "Florence"]),
    ("spain", &["Madrid", "Barcelona", "Seville"]),
    ("portugal", &["Lisbon", "Porto"]),
    ("morocco", &["Marrakech", "Fes", "Casablanca"]),
    ("thailand", &["Bangkok", "Chiang Mai", "Phuket"]),
    ("vietnam", &["Ho Chi Minh City", "Hanoi", "Da Nang"]),
    ("cambodia", &["Siem Reap", "Phnom Penh"]),
    ("myanmar", &["Yangon", "Mandalay", "Bagan"]),
    ("philippines", &["Manila", "Cebu"]),
    ("indonesia", &["Jakarta", "Bali", "Yogyakarta"]),
    ("malaysia", &["Kuala Lumpur", "Penang"]),
    ("singapore", &["Singapore"]),
    ("india", &["New Delhi", "Mumbai", "Jaipur"]),
    ("nepal", &["Kathmandu", "Pokhara"]),
    ("sri lanka", &["Colombo", "Kandy"]),
];

const GENERIC_ATTRACTIONS: &[&str] = &[
    "Historic landmarks",
    "Local markets",
    "Scenic viewpoints",
    "Cultural museums",
    "Traditional cuisine",
    "Photography spots",
];

/// Lower-cased query -> destination-specific attractions
const ATTRACTIONS_BY_QUERY: &[(&str, &[&str])] = &[
    ("afghanistan", &["Band-e-Amir Lakes", "Buddhas of Bamiyan", "Kabul Museum"]),
    ("turkey", &["Hagia Sophia", "Cappadocia", "Pamukkale"]),
    ("istanbul", &["Blue Mosque", "Grand Bazaar", "Bosphorus Cruise"]),
    ("egypt", &["Pyramids of Giza", "Valley of the Kings", "Nile River"]),
    ("greece", &["Acropolis", "Santorini Sunsets", "Ancient Temples"]),
    ("thailand", &["Grand Palace", "Floating Markets", "Buddhist Temples"]),
    ("vietnam", &["Ha Long Bay", "Cu Chi Tunnels", "Mekong Delta"]),
    ("cambodia", &["Angkor Wat", "Bayon Temple", "Royal Palace"]),
    ("myanmar", &["Shwedagon Pagoda", "Bagan Temples", "Inle Lake"]),
];

/// Everything the synthesizer decides about one place; the grouper adds the
/// id and the image gallery on top.
#[derive(Debug, Clone)]
pub struct PlaceDetails {
    pub name: String,
    pub country: String,
    pub description: String,
    pub long_description: String,
    pub category: Category,
    pub coordinates: Coordinates,
    pub best_time_to_visit: String,
    pub attractions: Vec<String>,
}

/// Generates place metadata from a canonical query and optional provider
/// tags/snippets.
///
/// Holds its own RNG so the randomized fields (template pick, coordinates,
/// travel season) are seedable in tests instead of reaching for an ambient
/// random source.
pub struct Synthesizer {
    rng: StdRng,
}

impl Synthesizer {
    /// Synthesizer with OS-seeded randomness
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic synthesizer for tests and reproducible output
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Synthesize metadata for result group `index` of `query`.
    ///
    /// `raw_tags` is whatever free text the provider offered (image tags or
    /// search snippets); it sharpens the category match and, when long
    /// enough, replaces the templated long description verbatim.
    pub fn synthesize(&mut self, query: &str, index: usize, raw_tags: Option<&str>) -> PlaceDetails {
        let needle = query.to_lowercase();
        let tags = raw_tags.unwrap_or_default();

        let template = DESCRIPTION_TEMPLATES[self.rng.random_range(0..DESCRIPTION_TEMPLATES.len())];
        let description = template.replace("{place}", query);

        let long_description = if tags.len() >= LONG_TEXT_MIN {
            tags.to_string()
        } else {
            LONG_DESCRIPTION_TEMPLATE.replace("{place}", query)
        };

        PlaceDetails {
            name: place_name(&needle, query, index),
            country: country_for(&needle),
            description,
            long_description,
            category: categorize(&needle, tags),
            coordinates: Coordinates {
                lat: self.rng.random_range(-90.0..=90.0),
                lng: self.rng.random_range(-180.0..=180.0),
            },
            best_time_to_visit: BEST_TIMES[self.rng.random_range(0..BEST_TIMES.len())]
                .to_string(),
            attractions: attractions_for(&needle),
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Keyword-match a category from the query and provider tags.
///
/// Fixed priority: beach, mountain, forest, desert, island; city otherwise.
pub(crate) fn categorize(query: &str, tags: &str) -> Category {
    let tags = tags.to_lowercase();

    if query.contains("beach")
        || query.contains("island")
        || tags.contains("beach")
        || tags.contains("ocean")
    {
        return Category::Beach;
    }
    if query.contains("mountain")
        || query.contains("peak")
        || tags.contains("mountain")
        || tags.contains("peak")
    {
        return Category::Mountain;
    }
    if query.contains("forest")
        || query.contains("jungle")
        || tags.contains("forest")
        || tags.contains("tree")
    {
        return Category::Forest;
    }
    if query.contains("desert")
        || query.contains("sand")
        || tags.contains("desert")
        || tags.contains("sand")
    {
        return Category::Desert;
    }
    if query.contains("island") || tags.contains("island") {
        return Category::Island;
    }

    Category::City
}

fn place_name(needle: &str, query: &str, index: usize) -> String {
    if let Some((_, cities)) = CITIES_BY_QUERY.iter().find(|(key, _)| *key == needle) {
        if let Some(city) = cities.get(index) {
            return (*city).to_string();
        }
    }
    format!("{} {}", capitalize(query), index + 1)
}

fn country_for(needle: &str) -> String {
    COUNTRY_BY_QUERY
        .iter()
        .find(|(key, _)| *key == needle)
        .map_or_else(|| "Unknown".to_string(), |(_, country)| (*country).to_string())
}

fn attractions_for(needle: &str) -> Vec<String> {
    let mut attractions: Vec<String> = GENERIC_ATTRACTIONS
        .iter()
        .take(3)
        .map(|s| (*s).to_string())
        .collect();

    if let Some((_, specific)) = ATTRACTIONS_BY_QUERY.iter().find(|(key, _)| *key == needle) {
        attractions.extend(specific.iter().take(3).map(|s| (*s).to_string()));
    }

    attractions
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
