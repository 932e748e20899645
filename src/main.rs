use std::io::{self, Write};

use log::{info, LevelFilter};
use nn_tour::config::{CliError, Opt, OutputFormat};
use nn_tour::constructive::nearest_neighbor;
use nn_tour::evaluation::TourEvaluator;
use nn_tour::io::load_cities;
use nn_tour::timing::time_with;
use simplelog::{Config, SimpleLogger};
use structopt::StructOpt;

fn main() {
    let opt = Opt::from_args();
    if let Err(e) = run(&opt) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn run(opt: &Opt) -> Result<(), CliError> {
    let level = if opt.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    SimpleLogger::init(level, Config::default())?;

    let cities = load_cities(&opt.input)?;
    info!("loaded {} cities from {}", cities.len(), opt.input.display());

    let timed = time_with(nearest_neighbor, cities.as_slice(), opt.start);
    info!("finished executing in {:.3} ms", timed.as_millis_f64());
    let tour = timed.into_value()?;

    if opt.verify {
        let violations = TourEvaluator::new(&cities).evaluate(&tour);
        if !violations.is_empty() {
            return Err(CliError::InvalidTour(violations));
        }
        info!("tour verified");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match opt.format {
        OutputFormat::Text => tour.write_summary(&mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &tour)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
