//! `WanderAI` - travel-discovery search backend
//!
//! This library provides the search resolution pipeline behind the gallery
//! frontend: spelling correction, live suggestions, provider image lookup,
//! and fallback synthesis of place metadata.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod search;
pub mod web;

// Re-export core types for public API
pub use config::WanderAiConfig;
pub use error::{ProviderError, WanderAiError};
pub use models::{Category, Coordinates, Place};
pub use search::{
    ImageProvider, SearchResponse, SearchService, Synthesizer, build_provider, correct_spelling,
    suggestions,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, WanderAiError>;
