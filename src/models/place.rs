//! Place model: the output record of the search resolution pipeline

use serde::{Deserialize, Serialize};

/// A resolved travel destination with its image gallery and metadata.
///
/// Field names serialize as camelCase because the gallery frontend consumes
/// them verbatim. `id` is unique within one search response only; it is not
/// stable across calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    /// Best-effort country name, `"Unknown"` when no mapping exists
    pub country: String,
    /// One-sentence teaser
    pub description: String,
    /// Paragraph-length description for the detail modal
    pub long_description: String,
    /// Display-ordered gallery, first entry is the cover image; never empty
    pub images: Vec<String>,
    pub category: Category,
    pub coordinates: Coordinates,
    pub best_time_to_visit: String,
    /// 3 generic + up to 3 destination-specific attractions
    pub attractions: Vec<String>,
}

impl Place {
    /// First image of the gallery, shown on the result card
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

/// Destination category shown as a card badge and used for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Mountain,
    Beach,
    City,
    Forest,
    Desert,
    Island,
}

impl Category {
    /// All categories, in badge display order
    pub const ALL: [Category; 6] = [
        Category::Mountain,
        Category::Beach,
        Category::City,
        Category::Forest,
        Category::Desert,
        Category::Island,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Mountain => "mountain",
            Category::Beach => "beach",
            Category::City => "city",
            Category::Forest => "forest",
            Category::Desert => "desert",
            Category::Island => "island",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Geographic coordinates in decimal degrees.
///
/// Synthesized coordinates are cosmetic filler and must not be treated as
/// real geocoding output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    /// Whether lat/lng are inside the valid WGS84 ranges
    #[must_use]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}
