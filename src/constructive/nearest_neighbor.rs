//! Nearest-neighbor constructive heuristic.
//!
//! Builds a closed tour greedily: starting from the given city, always move
//! to the nearest unvisited city, then return to the start.
//!
//! # Tie-breaking
//!
//! Candidates are scanned in input order and replaced only on a strictly
//! smaller distance, so among equidistant cities the one listed first wins.
//!
//! # Complexity
//!
//! O(n²) where n = number of cities.

use log::debug;

use crate::error::TourError;
use crate::models::{Point, Tour};

/// Constructs a closed tour using the nearest-neighbor heuristic.
///
/// The caller's slice is left untouched; visited cities are tracked by index.
/// IDs are assumed to be unique. The start is the first city whose ID equals
/// `start_id`.
///
/// # Errors
///
/// * [`TourError::EmptyCityCollection`] if `cities` is empty
/// * [`TourError::StartCityNotFound`] if no city has ID `start_id`
/// * [`TourError::DistanceOverflow`] if a distance met during the scan, or
///   the running total, does not fit in a `u64`
///
/// # Examples
///
/// ```
/// use nn_tour::constructive::nearest_neighbor;
/// use nn_tour::models::Point;
/// use nn_tour::TourError;
///
/// let cities = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 3.0, 0.0),
///     Point::new(3, 3.0, 4.0),
/// ];
///
/// let tour = nearest_neighbor(&cities, 1).unwrap();
/// assert_eq!(tour.city_ids(), vec![1, 2, 3, 1]);
/// assert_eq!(tour.weights(), &[0, 3, 4, 5]);
///
/// assert_eq!(nearest_neighbor(&cities, 4), Err(TourError::StartCityNotFound(4)));
/// ```
pub fn nearest_neighbor(cities: &[Point], start_id: usize) -> Result<Tour, TourError> {
    if cities.is_empty() {
        return Err(TourError::EmptyCityCollection);
    }

    let start_idx = cities
        .iter()
        .position(|c| c.id() == start_id)
        .ok_or(TourError::StartCityNotFound(start_id))?;
    let start = cities[start_idx];

    debug!(
        "building nearest-neighbor tour over {} cities from {}",
        cities.len(),
        start_id
    );

    let n = cities.len();
    let mut visited = vec![false; n];
    visited[start_idx] = true;

    let mut tour = Tour::new(start);
    let mut current = start;

    for _ in 1..n {
        let mut best: Option<(usize, u64)> = None;
        for (i, city) in cities.iter().enumerate() {
            if visited[i] {
                continue;
            }
            let d = current
                .checked_distance(city)
                .ok_or(TourError::DistanceOverflow)?;
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((i, d)),
            }
        }

        // n - 1 iterations over n - 1 unvisited cities, so a candidate exists
        let Some((next, d)) = best else { break };
        visited[next] = true;
        current = cities[next];
        tour.push(current, d)?;
    }

    let back = current
        .checked_distance(&start)
        .ok_or(TourError::DistanceOverflow)?;
    tour.push(start, back)?;

    debug!("tour complete, total distance {}", tour.total_distance());

    Ok(tour)
}
