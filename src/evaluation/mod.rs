//! Tour verification.
//!
//! Checks a finished tour against its instance: closed loop, per-edge weights,
//! total distance, and that every city is visited exactly once.

mod evaluator;

pub use evaluator::{TourEvaluator, Violation, ViolationType};
