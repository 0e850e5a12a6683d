use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

use crate::utils::clock_time::ClockTime;

/// Everything one pass through the conversion pipeline produces.
///
/// Built once per [`MarsClock::calculate`](crate::clock::mars_clock::MarsClock::calculate)
/// call and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanetaryTimeResult {
    pub source_instant: DateTime<Utc>,
    pub julian_date: f64,
    pub terrestrial_time: f64,
    pub mars_sol_date: f64,
    pub sol_number: i64,
    pub coordinated_time: ClockTime,
    pub local_time: ClockTime,
    pub longitude_east_degrees: f64,
}

impl PlanetaryTimeResult {
    /// Fraction of the current sol that has elapsed at the prime meridian.
    pub fn sol_fraction(&self) -> f64 {
        self.mars_sol_date - self.mars_sol_date.floor()
    }

    fn format_longitude(longitude: f64) -> String {
        if longitude < 0.0 {
            format!("{:.2}°W", -longitude)
        } else {
            format!("{:.2}°E", longitude)
        }
    }
}

impl fmt::Display for PlanetaryTimeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Earth UTC: {}\n\
             Julian Date: {:.6}\n\
             Terrestrial Time: {:.6}\n\
             Mars Sol Date: {:.5}\n\
             Sol: {}\n\
             MTC: {}\n\
             LMST ({}): {}",
            self.source_instant.to_rfc3339_opts(SecondsFormat::Secs, true),
            self.julian_date,
            self.terrestrial_time,
            self.mars_sol_date,
            self.sol_number,
            self.coordinated_time,
            Self::format_longitude(self.longitude_east_degrees),
            self.local_time
        )
    }
}
