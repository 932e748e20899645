//! Domain model types for tour construction.
//!
//! Provides the two core values: cities as identified 2D points, and tours as
//! closed walks over those cities with their per-edge weights.

mod point;
mod tour;

pub use point::Point;
pub use tour::Tour;
