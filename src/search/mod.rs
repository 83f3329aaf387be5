//! Search resolution pipeline
//!
//! Takes a raw user query and deterministically produces a ranked list of
//! image-backed places:
//! - Spelling correction against a static table
//! - Autocomplete suggestions for the search bar
//! - Provider lookup behind a uniform adapter capability
//! - Grouping of flat image results into discrete places
//! - Metadata synthesis and full fallback when no provider data exists

pub mod grouper;
pub mod orchestrator;
pub mod provider;
pub mod spelling;
pub mod suggest;
pub mod synth;

// Re-export commonly used items from submodules
pub use grouper::{DEFAULT_BATCH_SIZE, MAX_GROUPS, group_images};
pub use orchestrator::{SearchResponse, SearchService};
pub use provider::{ImageProvider, PixabayProvider, ProviderText, UnsplashProvider, build_provider};
pub use spelling::correct_spelling;
pub use suggest::{MAX_SUGGESTIONS, suggestions};
pub use synth::{PlaceDetails, Synthesizer};
