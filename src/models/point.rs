//! City location type.

use serde::{Deserialize, Serialize};

/// A city in a tour: a unique identifier and 2D coordinates.
///
/// # Examples
///
/// ```
/// use nn_tour::models::Point;
///
/// let a = Point::new(1, 0.0, 0.0);
/// let b = Point::new(2, 3.0, 4.0);
/// assert_eq!(a.id(), 1);
/// assert_eq!(a.distance(&b), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    id: usize,
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a new point.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// City ID.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point, rounded to the nearest integer.
    ///
    /// Halfway cases round away from zero (`2.5` becomes `3`). Distances too
    /// large for a `u64` saturate at `u64::MAX`; use
    /// [`checked_distance`](Self::checked_distance) to detect them.
    pub fn distance(&self, other: &Point) -> u64 {
        self.checked_distance(other).unwrap_or(u64::MAX)
    }

    /// Rounded Euclidean distance, or `None` if it does not fit in a `u64`.
    ///
    /// ```
    /// use nn_tour::models::Point;
    ///
    /// let a = Point::new(1, -1e300, 0.0);
    /// let b = Point::new(2, 1e300, 0.0);
    /// assert_eq!(a.checked_distance(&b), None);
    /// ```
    pub fn checked_distance(&self, other: &Point) -> Option<u64> {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let d = dx.hypot(dy).round();
        // 2^64, the first value past u64::MAX
        if d.is_finite() && d < 18_446_744_073_709_551_616.0 {
            Some(d as u64)
        } else {
            None
        }
    }
}
