//! TSPLIB-style city reader.
//!
//! Only the parts needed for 2D Euclidean instances are understood: header
//! lines are skipped up to `NODE_COORD_SECTION`, after which each line holds
//! `ID X Y`. A line reading `EOF` ends the section.
//!
//! ```text
//! NAME : square
//! TYPE : TSP
//! DIMENSION : 4
//! EDGE_WEIGHT_TYPE : EUC_2D
//! NODE_COORD_SECTION
//! 1 0.0 0.0
//! 2 0.0 10.0
//! 3 10.0 10.0
//! 4 10.0 0.0
//! EOF
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, warn};

use crate::error::LoadError;
use crate::models::Point;

const COORD_SECTION: &str = "NODE_COORD_SECTION";
const END_OF_FILE: &str = "EOF";

/// Reads cities from the file at `path`.
///
/// # Errors
///
/// [`LoadError::InputUnreadable`] if the file cannot be opened, otherwise
/// whatever [`parse_cities`] reports.
pub fn load_cities<P: AsRef<Path>>(path: P) -> Result<Vec<Point>, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::InputUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loading cities from {}", path.display());
    parse_cities(BufReader::new(file))
}

/// Reads cities from an in-memory string.
///
/// # Examples
///
/// ```
/// use nn_tour::io::parse_str;
///
/// let cities = parse_str("NAME : tiny\nNODE_COORD_SECTION\n1 0 0\n2 3 4\nEOF\n").unwrap();
/// assert_eq!(cities.len(), 2);
/// assert_eq!(cities[1].id(), 2);
/// assert_eq!(cities[0].distance(&cities[1]), 5);
/// ```
pub fn parse_str(input: &str) -> Result<Vec<Point>, LoadError> {
    parse_cities(input.as_bytes())
}

/// Reads cities from any buffered reader.
///
/// # Errors
///
/// * [`LoadError::MissingCoordSection`] if no `NODE_COORD_SECTION` line exists
/// * [`LoadError::MalformedRecord`] for a record that is not `ID X Y`
/// * [`LoadError::DuplicateCityId`] if an ID appears twice
/// * [`LoadError::NoCities`] if the section holds no records
/// * [`LoadError::Io`] if reading fails
pub fn parse_cities<R: BufRead>(reader: R) -> Result<Vec<Point>, LoadError> {
    let mut lines = reader.lines().enumerate();
    let mut dimension: Option<usize> = None;
    let mut in_section = false;

    for (_, line) in lines.by_ref() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.starts_with(COORD_SECTION) {
            in_section = true;
            break;
        }
        if let Some((key, value)) = trimmed.split_once(':') {
            if key.trim() == "DIMENSION" {
                dimension = value.trim().parse().ok();
            }
        }
    }

    if !in_section {
        return Err(LoadError::MissingCoordSection);
    }

    let mut cities = Vec::new();
    let mut ids = HashSet::new();

    for (index, line) in lines {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed == END_OF_FILE {
            break;
        }

        let point = parse_record(trimmed).ok_or_else(|| LoadError::MalformedRecord {
            line: index + 1,
            content: trimmed.to_string(),
        })?;
        if !ids.insert(point.id()) {
            return Err(LoadError::DuplicateCityId(point.id()));
        }
        cities.push(point);
    }

    if cities.is_empty() {
        return Err(LoadError::NoCities);
    }

    if let Some(expected) = dimension {
        if expected != cities.len() {
            warn!(
                "DIMENSION says {} cities but {} were read",
                expected,
                cities.len()
            );
        }
    }

    debug!("read {} cities", cities.len());
    Ok(cities)
}

fn parse_record(line: &str) -> Option<Point> {
    let mut fields = line.split_whitespace();
    let id = fields.next()?.parse().ok()?;
    let x: f64 = fields.next()?.parse().ok()?;
    let y: f64 = fields.next()?.parse().ok()?;
    if fields.next().is_some() || !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some(Point::new(id, x, y))
}
