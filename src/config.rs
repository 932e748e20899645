//! Command-line options for the `nn-tour` binary.

use std::path::PathBuf;

use clap::arg_enum;
use structopt::StructOpt;
use thiserror::Error;

use crate::error::{LoadError, TourError};
use crate::evaluation::Violation;

#[derive(Error, Debug)]
/// Error types for argument validation
pub enum ConfigError {
    #[error("start must be a non-negative integer city id")]
    Start(#[from] std::num::ParseIntError),
}

#[derive(Error, Debug)]
/// Errors surfaced by the binary
pub enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error(transparent)]
    Tour(#[from] TourError),
    #[error("tour failed verification: {0:?}")]
    InvalidTour(Vec<Violation>),
    #[error("could not serialize tour")]
    Json(#[from] serde_json::Error),
    #[error("could not write output")]
    Io(#[from] std::io::Error),
    #[error("could not initialize logging")]
    Logger(#[from] log::SetLoggerError),
}

arg_enum! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum OutputFormat {
        Text,
        Json
    }
}

fn parse_start(src: &str) -> Result<usize, ConfigError> {
    Ok(src.trim().parse::<usize>()?)
}

// set up program arguments
#[derive(Debug, StructOpt)]
#[structopt(name = "nn-tour", about = "Builds a nearest-neighbor tour over a TSPLIB instance")]
pub struct Opt {
    /// TSPLIB file with a NODE_COORD_SECTION
    #[structopt(short, long, parse(from_os_str))]
    pub input: PathBuf,

    /// ID of the city the tour starts and ends at
    #[structopt(short, long, default_value = "1", parse(try_from_str = parse_start))]
    pub start: usize,

    /// Output format: a plain-text edge summary or the tour as JSON
    #[structopt(short, long, possible_values = &OutputFormat::variants(), default_value = "text", case_insensitive = true)]
    pub format: OutputFormat,

    /// Check the finished tour against the instance before printing it
    #[structopt(long)]
    pub verify: bool,

    /// Log at debug level
    #[structopt(long)]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opt_defaults() {
        let opt = Opt::from_iter_safe(&["nn-tour", "-i", "cities.tsp"]).expect("valid args");
        assert_eq!(opt.input, PathBuf::from("cities.tsp"));
        assert_eq!(opt.start, 1);
        assert_eq!(opt.format, OutputFormat::Text);
        assert!(!opt.verify);
        assert!(!opt.debug);
    }

    #[test]
    fn test_opt_all_flags() {
        let opt = Opt::from_iter_safe(&[
            "nn-tour", "--input", "mu1979.tsp", "--start", "1022", "--format", "JSON",
            "--verify", "--debug",
        ])
        .expect("valid args");
        assert_eq!(opt.start, 1022);
        assert_eq!(opt.format, OutputFormat::Json);
        assert!(opt.verify);
        assert!(opt.debug);
    }

    #[test]
    fn test_opt_rejects_negative_start() {
        assert!(Opt::from_iter_safe(&["nn-tour", "-i", "a.tsp", "-s", "-3"]).is_err());
    }

    #[test]
    fn test_opt_requires_input() {
        assert!(Opt::from_iter_safe(&["nn-tour"]).is_err());
    }

    #[test]
    fn test_parse_start() {
        assert_eq!(parse_start(" 12 ").expect("valid"), 12);
        assert!(matches!(parse_start("x"), Err(ConfigError::Start(_))));
    }
}
