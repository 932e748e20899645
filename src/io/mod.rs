//! City loading.
//!
//! - [`load_cities`] / [`parse_cities`] / [`parse_str`] — TSPLIB coordinate sections

mod tsplib;

pub use tsplib::{load_cities, parse_cities, parse_str};
