//! Wall-clock timing around solver calls.

use std::time::{Duration, Instant};

/// The result of a timed call together with how long it took.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    /// Value returned by the call.
    pub value: T,
    /// Wall-clock time spent in the call.
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    /// Elapsed time in fractional milliseconds.
    pub fn as_millis_f64(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    /// Discards the timing and returns the value.
    pub fn into_value(self) -> T {
        self.value
    }
}

/// Runs `f`, measuring wall-clock time around it.
///
/// # Examples
///
/// ```
/// use nn_tour::timing::time;
///
/// let timed = time(|| (1..=10).sum::<u32>());
/// assert_eq!(timed.value, 55);
/// ```
pub fn time<T, F>(f: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = f();
    Timed {
        value,
        elapsed: start.elapsed(),
    }
}

/// Runs the two-argument function `f` on `a` and `b`, measuring wall-clock
/// time around it.
///
/// # Examples
///
/// ```
/// use nn_tour::constructive::nearest_neighbor;
/// use nn_tour::models::Point;
/// use nn_tour::timing::time_with;
///
/// let cities = vec![Point::new(1, 0.0, 0.0), Point::new(2, 1.0, 0.0)];
/// let timed = time_with(nearest_neighbor, cities.as_slice(), 1);
/// assert_eq!(timed.value.unwrap().total_distance(), 2);
/// ```
pub fn time_with<A, B, T, F>(f: F, a: A, b: B) -> Timed<T>
where
    F: FnOnce(A, B) -> T,
{
    time(move || f(a, b))
}
