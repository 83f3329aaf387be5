//! Data models for the `WanderAI` backend
//!
//! The search pipeline's output contract lives here; everything else in the
//! crate produces or consumes these types.

pub mod place;

pub use place::{Category, Coordinates, Place};
