use std::path::PathBuf;

use chrono::{DateTime, Duration, Utc};
use clap::Parser;
use mars_time::*;
use thiserror::Error;
use tracing::info;

#[derive(Parser)]
#[command(name = "mars_clock")]
#[command(about = "Convert Earth UTC instants to Mars Coordinated and Local Mean Solar Time", long_about = None)]
struct Cli {
    /// Longitude in degrees East; values outside [-180, 180] are wrapped
    #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
    longitude: f64,

    /// Instant to convert, RFC 3339 (defaults to now)
    #[arg(long)]
    at: Option<String>,

    /// Number of samples to produce
    #[arg(short, long, default_value_t = 1)]
    samples: usize,

    /// Minutes between consecutive samples
    #[arg(long, default_value_t = 15, allow_negative_numbers = true)]
    step_minutes: i64,

    /// Print results as a JSON array
    #[arg(long)]
    json: bool,

    /// JSON file overriding the constant table
    #[arg(long, env = "MARS_TIME_CONSTANTS")]
    constants: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("Invalid --at timestamp {0:?}: {1}")]
    Timestamp(String, chrono::ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid --step-minutes {0}: too large to represent as a duration")]
    InvalidStep(i64),

    #[error("Failed to encode results: {0}")]
    Json(#[from] serde_json::Error),
}

fn parse_instant(raw: Option<&str>) -> Result<DateTime<Utc>, CliError> {
    match raw {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|instant| instant.with_timezone(&Utc))
            .map_err(|err| CliError::Timestamp(raw.to_string(), err)),
        None => Ok(Utc::now()),
    }
}

fn step_duration(minutes: i64) -> Result<Duration, CliError> {
    Duration::try_minutes(minutes).ok_or(CliError::InvalidStep(minutes))
}

fn load_constants(path: Option<&PathBuf>) -> Result<TimeConstants, CliError> {
    let constants = match path {
        Some(path) => TimeConstants::from_json_file(path)?,
        None => TimeConstants::from_env()?,
    };
    Ok(constants)
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let clock = MarsClock::with_constants(load_constants(cli.constants.as_ref())?);
    let start = parse_instant(cli.at.as_deref())?;
    info!(%start, longitude = cli.longitude, samples = cli.samples, "starting conversion");

    let timeline = Timeline::generate(
        &clock,
        start,
        step_duration(cli.step_minutes)?,
        cli.samples,
        cli.longitude,
    )?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&timeline.entries)?);
        return Ok(());
    }

    for entry in &timeline.entries {
        println!("{}\n", entry);
    }
    if timeline.len() > 1 {
        println!("{}", timeline.summary());
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(err) = logging::init_tracing(None) {
        eprintln!("{}", err);
    }

    let cli = Cli::parse();
    run(&cli)?;

    Ok(())
}
