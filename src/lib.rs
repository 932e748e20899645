//! # nn-tour
//!
//! Nearest-neighbor tour construction for the Euclidean traveling
//! salesperson problem.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Tour)
//! - [`constructive`] — Nearest-neighbor tour construction
//! - [`evaluation`] — Tour invariant checking
//! - [`io`] — TSPLIB-style city loader
//! - [`timing`] — Wall-clock timing wrapper for solver calls
//! - [`config`] — Command-line options for the `nn-tour` binary
//! - [`error`] — Error types
//!
//! ## Example
//!
//! ```
//! use nn_tour::constructive::nearest_neighbor;
//! use nn_tour::models::Point;
//!
//! let cities = vec![
//!     Point::new(1, 0.0, 0.0),
//!     Point::new(2, 3.0, 0.0),
//!     Point::new(3, 3.0, 4.0),
//! ];
//! let tour = nearest_neighbor(&cities, 1).unwrap();
//! assert_eq!(tour.city_ids(), vec![1, 2, 3, 1]);
//! assert_eq!(tour.total_distance(), 12);
//! ```

pub mod config;
pub mod constructive;
pub mod error;
pub mod evaluation;
pub mod io;
pub mod models;
pub mod timing;

pub use error::{LoadError, TourError};
