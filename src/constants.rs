use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

// Earth time scales
pub const UNIX_EPOCH_JULIAN_DATE: f64 = 2_440_587.5; // JD of 1970-01-01T00:00:00Z
pub const SECONDS_PER_DAY: f64 = 86_400.0; // s
pub const NANOSECONDS_PER_SECOND: f64 = 1_000_000_000.0;
pub const TERRESTRIAL_TIME_OFFSET_SECONDS: f64 = 69.184; // s (37 leap seconds + 32.184)

// Mars time scales
pub const MARS_EPOCH_JULIAN_DATE: f64 = 2_451_549.5; // JD of 2000-01-06T00:00:00 TT
pub const MARS_SOL_TO_EARTH_DAY_RATIO: f64 = 1.027_491_251_7;
pub const MARS_SOL_DATE_OFFSET: f64 = 44_796.0; // sols
pub const DEGREES_PER_HOUR_OF_LONGITUDE: f64 = 15.0; // °/h

// Clock arithmetic
pub const HOURS_PER_DAY: f64 = 24.0;
pub const MINUTES_PER_HOUR: f64 = 60.0;
pub const SECONDS_PER_MINUTE: f64 = 60.0;
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
pub const DEGREES_PER_REVOLUTION: f64 = 360.0;
pub const MAX_LONGITUDE_DEGREES: f64 = 180.0;

// Validity window of the algorithm
pub const MINIMUM_VALID_UNIX_SECONDS: i64 = 946_684_800; // 2000-01-01T00:00:00Z
pub const MAXIMUM_VALID_UNIX_SECONDS: i64 = 4_133_980_799; // 2100-12-31T23:59:59Z

/// Environment variable that overrides ΔT when loading constants from the environment.
pub const TT_OFFSET_ENV_VAR: &str = "MARS_TIME_TT_OFFSET_SECONDS";

/// The numeric parameters of the Earth-to-Mars conversion chain.
///
/// `Default` is the compiled-in table. ΔT is the value most likely to drift
/// (every new leap second adds one), so it can be overridden through
/// [`TimeConstants::from_env`] or a JSON file without a rebuild.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeConstants {
    pub unix_epoch_julian_date: f64,
    pub seconds_per_day: f64,
    pub terrestrial_time_offset_seconds: f64,
    pub mars_epoch_julian_date: f64,
    pub mars_sol_to_earth_day_ratio: f64,
    pub mars_sol_date_offset: f64,
    pub degrees_per_hour_of_longitude: f64,
    pub minimum_valid_unix_seconds: i64,
    pub maximum_valid_unix_seconds: i64,
}

impl Default for TimeConstants {
    fn default() -> Self {
        TimeConstants {
            unix_epoch_julian_date: UNIX_EPOCH_JULIAN_DATE,
            seconds_per_day: SECONDS_PER_DAY,
            terrestrial_time_offset_seconds: TERRESTRIAL_TIME_OFFSET_SECONDS,
            mars_epoch_julian_date: MARS_EPOCH_JULIAN_DATE,
            mars_sol_to_earth_day_ratio: MARS_SOL_TO_EARTH_DAY_RATIO,
            mars_sol_date_offset: MARS_SOL_DATE_OFFSET,
            degrees_per_hour_of_longitude: DEGREES_PER_HOUR_OF_LONGITUDE,
            minimum_valid_unix_seconds: MINIMUM_VALID_UNIX_SECONDS,
            maximum_valid_unix_seconds: MAXIMUM_VALID_UNIX_SECONDS,
        }
    }
}

impl TimeConstants {
    /// Returns a copy of this table with a different ΔT.
    pub fn with_terrestrial_time_offset(self, seconds: f64) -> Self {
        TimeConstants {
            terrestrial_time_offset_seconds: seconds,
            ..self
        }
    }

    /// Default table, with ΔT taken from [`TT_OFFSET_ENV_VAR`] when it is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let constants = match env::var(TT_OFFSET_ENV_VAR) {
            Ok(raw) => {
                let seconds = raw
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| ConfigError::InvalidEnvVar {
                        name: TT_OFFSET_ENV_VAR.to_string(),
                        value: raw.clone(),
                    })?;
                TimeConstants::default().with_terrestrial_time_offset(seconds)
            }
            Err(_) => TimeConstants::default(),
        };
        constants.validate()?;
        Ok(constants)
    }

    /// Parses a JSON table. Missing fields fall back to the defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let constants: TimeConstants = serde_json::from_str(json)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Rejects tables the pipeline cannot divide by or that describe an empty window.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let reals = [
            ("unix_epoch_julian_date", self.unix_epoch_julian_date),
            ("seconds_per_day", self.seconds_per_day),
            (
                "terrestrial_time_offset_seconds",
                self.terrestrial_time_offset_seconds,
            ),
            ("mars_epoch_julian_date", self.mars_epoch_julian_date),
            ("mars_sol_to_earth_day_ratio", self.mars_sol_to_earth_day_ratio),
            ("mars_sol_date_offset", self.mars_sol_date_offset),
            (
                "degrees_per_hour_of_longitude",
                self.degrees_per_hour_of_longitude,
            ),
        ];
        if let Some((name, _)) = reals.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::InvalidConstant {
                name: name.to_string(),
                reason: "must be finite".to_string(),
            });
        }

        let divisors = [
            ("seconds_per_day", self.seconds_per_day),
            ("mars_sol_to_earth_day_ratio", self.mars_sol_to_earth_day_ratio),
            (
                "degrees_per_hour_of_longitude",
                self.degrees_per_hour_of_longitude,
            ),
        ];
        if let Some((name, _)) = divisors.iter().find(|(_, value)| *value <= 0.0) {
            return Err(ConfigError::InvalidConstant {
                name: name.to_string(),
                reason: "must be positive".to_string(),
            });
        }

        if self.minimum_valid_unix_seconds > self.maximum_valid_unix_seconds {
            return Err(ConfigError::InvalidConstant {
                name: "minimum_valid_unix_seconds".to_string(),
                reason: "must not exceed maximum_valid_unix_seconds".to_string(),
            });
        }

        Ok(())
    }
}
