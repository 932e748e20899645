//! Error types for tour construction and city loading.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reported by the tour construction heuristics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TourError {
    #[error("no cities to tour")]
    EmptyCityCollection,
    #[error("start city {0} not found")]
    StartCityNotFound(usize),
    #[error("tour distance does not fit in a u64")]
    DistanceOverflow,
}

/// Errors reported while reading a city file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("could not read file {}", .path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("error reading input")]
    Io(#[from] io::Error),
    #[error("no NODE_COORD_SECTION in input")]
    MissingCoordSection,
    #[error("malformed record on line {line}: {content:?}")]
    MalformedRecord { line: usize, content: String },
    #[error("duplicate city id {0}")]
    DuplicateCityId(usize),
    #[error("input contains no cities")]
    NoCities,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tour_error_messages() {
        assert_eq!(
            TourError::StartCityNotFound(7).to_string(),
            "start city 7 not found"
        );
        assert_eq!(TourError::EmptyCityCollection.to_string(), "no cities to tour");
    }

    #[test]
    fn test_load_error_source() {
        use std::error::Error;

        let err = LoadError::InputUnreadable {
            path: PathBuf::from("missing.tsp"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "could not read file missing.tsp");
        assert!(err.source().is_some());
    }
}
