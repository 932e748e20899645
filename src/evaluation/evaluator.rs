//! Tour evaluator that checks a tour against the cities it should cover.

use std::collections::{HashMap, HashSet};

use crate::models::{Point, Tour};

/// A type of invariant violation in a tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// The tour has no cities at all.
    EmptyTour,
    /// `path` and `weights` have different lengths.
    LengthMismatch {
        /// Number of path entries.
        path: usize,
        /// Number of weight entries.
        weights: usize,
    },
    /// The last city is not the start city.
    OpenTour {
        /// ID of the first city.
        first: usize,
        /// ID of the last city.
        last: usize,
    },
    /// The weight into the start is not zero.
    NonZeroStartWeight(u64),
    /// An edge weight disagrees with the distance between its endpoints.
    WeightMismatch {
        /// Index into `weights`.
        index: usize,
        /// Distance between `path[index - 1]` and `path[index]`.
        expected: u64,
        /// Stored weight.
        actual: u64,
    },
    /// The distance between `path[index - 1]` and `path[index]` does not fit
    /// in a `u64`.
    EdgeOverflow {
        /// Index into `weights`.
        index: usize,
    },
    /// The weights sum past `u64::MAX`.
    TotalOverflow,
    /// The stored total is not the sum of the weights.
    TotalMismatch {
        /// Sum of all weights.
        expected: u64,
        /// Stored total distance.
        actual: u64,
    },
    /// The tour visits a city that is not in the instance.
    UnknownCity(usize),
    /// The tour visits a city more than once before closing.
    RepeatedCity(usize),
    /// The tour never visits a city of the instance.
    MissingCity(usize),
}

/// An invariant violation found in a tour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// Checks that a tour is a closed walk visiting every city exactly once with
/// consistent edge weights and total.
///
/// # Examples
///
/// ```
/// use nn_tour::constructive::nearest_neighbor;
/// use nn_tour::evaluation::TourEvaluator;
/// use nn_tour::models::Point;
///
/// let cities = vec![
///     Point::new(1, 0.0, 0.0),
///     Point::new(2, 3.0, 0.0),
///     Point::new(3, 3.0, 4.0),
/// ];
/// let tour = nearest_neighbor(&cities, 1).unwrap();
///
/// let evaluator = TourEvaluator::new(&cities);
/// assert!(evaluator.evaluate(&tour).is_empty());
///
/// // The same tour does not cover a larger instance.
/// let mut more = cities.clone();
/// more.push(Point::new(4, 9.0, 9.0));
/// assert!(!TourEvaluator::new(&more).is_valid(&tour));
/// ```
pub struct TourEvaluator<'a> {
    cities: &'a [Point],
}

impl<'a> TourEvaluator<'a> {
    /// Creates a new evaluator for the given instance.
    pub fn new(cities: &'a [Point]) -> Self {
        Self { cities }
    }

    /// Returns `true` if the tour has no violations.
    pub fn is_valid(&self, tour: &Tour) -> bool {
        self.evaluate(tour).is_empty()
    }

    /// Evaluates a tour, returning every violation found.
    pub fn evaluate(&self, tour: &Tour) -> Vec<Violation> {
        let path = tour.path();
        let weights = tour.weights();
        let mut violations = Vec::new();

        let (first, last) = match (path.first(), path.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => {
                violations.push(Violation::new(ViolationType::EmptyTour));
                return violations;
            }
        };

        if path.len() != weights.len() {
            violations.push(Violation::new(ViolationType::LengthMismatch {
                path: path.len(),
                weights: weights.len(),
            }));
        }

        if first.id() != last.id() {
            violations.push(Violation::new(ViolationType::OpenTour {
                first: first.id(),
                last: last.id(),
            }));
        }

        if let Some(&w) = weights.first() {
            if w != 0 {
                violations.push(Violation::new(ViolationType::NonZeroStartWeight(w)));
            }
        }

        for (index, (edge, &actual)) in path.windows(2).zip(weights.iter().skip(1)).enumerate() {
            let Some(expected) = edge[0].checked_distance(&edge[1]) else {
                violations.push(Violation::new(ViolationType::EdgeOverflow { index: index + 1 }));
                continue;
            };
            if expected != actual {
                violations.push(Violation::new(ViolationType::WeightMismatch {
                    index: index + 1,
                    expected,
                    actual,
                }));
            }
        }

        match weights.iter().try_fold(0u64, |acc, &w| acc.checked_add(w)) {
            Some(sum) if sum != tour.total_distance() => {
                violations.push(Violation::new(ViolationType::TotalMismatch {
                    expected: sum,
                    actual: tour.total_distance(),
                }));
            }
            Some(_) => {}
            None => violations.push(Violation::new(ViolationType::TotalOverflow)),
        }

        self.check_coverage(path, &mut violations);

        violations
    }

    /// Every city once in `path[..len - 1]`; the closing entry repeats the start.
    fn check_coverage(&self, path: &[Point], violations: &mut Vec<Violation>) {
        let known: HashSet<usize> = self.cities.iter().map(|c| c.id()).collect();
        let mut seen: HashMap<usize, usize> = HashMap::new();

        for city in &path[..path.len() - 1] {
            let count = seen.entry(city.id()).or_insert(0);
            *count += 1;
            if !known.contains(&city.id()) {
                if *count == 1 {
                    violations.push(Violation::new(ViolationType::UnknownCity(city.id())));
                }
            } else if *count == 2 {
                violations.push(Violation::new(ViolationType::RepeatedCity(city.id())));
            }
        }

        for city in self.cities {
            if !seen.contains_key(&city.id()) {
                violations.push(Violation::new(ViolationType::MissingCity(city.id())));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructive::nearest_neighbor;

    fn setup() -> Vec<Point> {
        vec![
            Point::new(1, 0.0, 0.0),
            Point::new(2, 3.0, 0.0),
            Point::new(3, 3.0, 4.0),
        ]
    }

    fn kinds(violations: &[Violation]) -> Vec<ViolationType> {
        violations.iter().map(|v| v.kind.clone()).collect()
    }

    #[test]
    fn test_valid_tour() {
        let cities = setup();
        let tour = nearest_neighbor(&cities, 2).expect("valid");
        let eval = TourEvaluator::new(&cities);
        assert!(eval.evaluate(&tour).is_empty());
        assert!(eval.is_valid(&tour));
    }

    #[test]
    fn test_empty_tour() {
        let cities = setup();
        let tour = Tour::from_parts(vec![], vec![], 0);
        let violations = TourEvaluator::new(&cities).evaluate(&tour);
        assert_eq!(kinds(&violations), vec![ViolationType::EmptyTour]);
    }

    #[test]
    fn test_open_tour() {
        let cities = setup();
        let path = vec![cities[0], cities[1], cities[2]];
        let tour = Tour::from_parts(path, vec![0, 3, 4], 7);
        let violations = TourEvaluator::new(&cities).evaluate(&tour);
        // The last entry is treated as the closing one, so 3 counts as unvisited
        assert_eq!(
            kinds(&violations),
            vec![
                ViolationType::OpenTour { first: 1, last: 3 },
                ViolationType::MissingCity(3),
            ]
        );
    }

    #[test]
    fn test_length_mismatch() {
        let cities = setup();
        let path = vec![cities[0], cities[1], cities[2], cities[0]];
        let tour = Tour::from_parts(path, vec![0, 3, 4], 7);
        let violations = TourEvaluator::new(&cities).evaluate(&tour);
        assert!(kinds(&violations).contains(&ViolationType::LengthMismatch {
            path: 4,
            weights: 3,
        }));
    }

    #[test]
    fn test_weight_and_total_mismatch() {
        let cities = setup();
        let path = vec![cities[0], cities[1], cities[2], cities[0]];
        let tour = Tour::from_parts(path, vec![1, 3, 6, 5], 12);
        let violations = TourEvaluator::new(&cities).evaluate(&tour);
        assert_eq!(
            kinds(&violations),
            vec![
                ViolationType::NonZeroStartWeight(1),
                ViolationType::WeightMismatch {
                    index: 2,
                    expected: 4,
                    actual: 6,
                },
                ViolationType::TotalMismatch {
                    expected: 15,
                    actual: 12,
                },
            ]
        );
    }

    #[test]
    fn test_total_overflow() {
        let a = Point::new(1, 0.0, 0.0);
        let b = Point::new(2, 1e19, 0.0);
        let cities = vec![a, b];
        let d = a.distance(&b);
        let tour = Tour::from_parts(vec![a, b, a], vec![0, d, d], u64::MAX);
        let violations = TourEvaluator::new(&cities).evaluate(&tour);
        assert_eq!(kinds(&violations), vec![ViolationType::TotalOverflow]);
    }

    #[test]
    fn test_edge_overflow() {
        let a = Point::new(1, -1e300, 0.0);
        let b = Point::new(2, 1e300, 0.0);
        let cities = vec![a, b];
        let tour = Tour::from_parts(vec![a, b, a], vec![0, 0, 0], 0);
        let violations = TourEvaluator::new(&cities).evaluate(&tour);
        assert_eq!(
            kinds(&violations),
            vec![
                ViolationType::EdgeOverflow { index: 1 },
                ViolationType::EdgeOverflow { index: 2 },
            ]
        );
    }

    #[test]
    fn test_repeated_and_missing_city() {
        let cities = setup();
        let path = vec![cities[0], cities[1], cities[0], cities[0]];
        let tour = Tour::from_parts(path, vec![0, 3, 3, 0], 6);
        let violations = TourEvaluator::new(&cities).evaluate(&tour);
        assert_eq!(
            kinds(&violations),
            vec![ViolationType::RepeatedCity(1), ViolationType::MissingCity(3)]
        );
    }

    #[test]
    fn test_unknown_city() {
        let cities = setup();
        let stranger = Point::new(99, 3.0, 0.0);
        let path = vec![cities[0], stranger, cities[1], cities[2], cities[0]];
        let tour = Tour::from_parts(path, vec![0, 3, 0, 4, 5], 12);
        let violations = TourEvaluator::new(&cities).evaluate(&tour);
        assert_eq!(kinds(&violations), vec![ViolationType::UnknownCity(99)]);
    }
}
