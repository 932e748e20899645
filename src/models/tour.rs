//! Closed tour type.

use std::fmt;
use std::io;

use serde::Serialize;

use super::Point;
use crate::error::TourError;

/// A closed walk over a set of cities, starting and ending at the same city.
///
/// `weights[i]` is the distance from `path[i - 1]` to `path[i]`; the first
/// weight is always zero since nothing leads into the start.
///
/// Tours are produced by the constructive heuristics and are read-only to
/// callers.
///
/// # Examples
///
/// ```
/// use nn_tour::constructive::nearest_neighbor;
/// use nn_tour::models::Point;
///
/// let cities = vec![Point::new(1, 0.0, 0.0), Point::new(2, 0.0, 5.0)];
/// let tour = nearest_neighbor(&cities, 1).unwrap();
/// assert_eq!(tour.len(), 3);
/// assert_eq!(tour.weights(), &[0, 5, 5]);
/// assert_eq!(tour.total_distance(), 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tour {
    path: Vec<Point>,
    weights: Vec<u64>,
    total_distance: u64,
}

impl Tour {
    /// Creates a tour positioned at `start` with no edges yet.
    pub(crate) fn new(start: Point) -> Self {
        Self {
            path: vec![start],
            weights: vec![0],
            total_distance: 0,
        }
    }

    /// Creates a tour from raw parts without checking any invariant.
    #[cfg(test)]
    pub(crate) fn from_parts(path: Vec<Point>, weights: Vec<u64>, total_distance: u64) -> Self {
        Self {
            path,
            weights,
            total_distance,
        }
    }

    /// Appends `point`, reached over an edge of length `weight`.
    ///
    /// Leaves the tour unchanged if the total would overflow.
    pub(crate) fn push(&mut self, point: Point, weight: u64) -> Result<(), TourError> {
        self.total_distance = self
            .total_distance
            .checked_add(weight)
            .ok_or(TourError::DistanceOverflow)?;
        self.path.push(point);
        self.weights.push(weight);
        Ok(())
    }

    /// Returns the visited cities in order, start repeated at the end.
    pub fn path(&self) -> &[Point] {
        &self.path
    }

    /// Returns the per-step edge weights, aligned with [`path`](Self::path).
    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Sum of all edge weights, including the edge back to the start.
    pub fn total_distance(&self) -> u64 {
        self.total_distance
    }

    /// Returns the starting city.
    pub fn start(&self) -> Option<&Point> {
        self.path.first()
    }

    /// Returns the city IDs in visit order.
    pub fn city_ids(&self) -> Vec<usize> {
        self.path.iter().map(|p| p.id()).collect()
    }

    /// Number of entries in the path (cities + 1 for a closed tour).
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns `true` if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Writes the edge-by-edge summary produced by `Display` to `out`.
    pub fn write_summary<W: io::Write>(&self, mut out: W) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (edge, weight) in self.path.windows(2).zip(self.weights.iter().skip(1)) {
            writeln!(
                f,
                "EDGE {} -> {} | WEIGHT : {}",
                edge[0].id(),
                edge[1].id(),
                weight
            )?;
        }
        writeln!(f, "TOTAL DISTANCE: {}", self.total_distance)
    }
}
