use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{HOURS_PER_DAY, MINUTES_PER_HOUR, SECONDS_PER_HOUR};

/// Residue (in seconds) close enough to the next whole second to count as it.
pub const SUB_SECOND_CARRY_TOLERANCE: f64 = 1e-9;

const SECONDS_PER_DAY_WHOLE: u32 = 86_400;

/// A 24-hour time of day, split into whole components plus a sub-second residue.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub fractional_seconds: f64,
}

impl ClockTime {
    pub fn new(hours: u32, minutes: u32, seconds: u32, fractional_seconds: f64) -> Self {
        ClockTime {
            hours,
            minutes,
            seconds,
            fractional_seconds,
        }
    }

    pub fn midnight() -> Self {
        ClockTime::new(0, 0, 0, 0.0)
    }

    /// Decomposes a decimal hour value by truncating at every level, so only
    /// `fractional_seconds` carries the sub-second residue.
    ///
    /// A residue within [`SUB_SECOND_CARRY_TOLERANCE`] of the next whole second
    /// is carried first, so a whole-second time recomposed from its decimal
    /// hours decomposes back to the same components. Values outside [0, 24)
    /// are first wrapped into the day.
    pub fn from_decimal_hours(decimal_hours: f64) -> Self {
        let total_seconds = normalize_to_day_range(decimal_hours) * SECONDS_PER_HOUR;

        let next_second = total_seconds.ceil();
        let whole_seconds = if next_second - total_seconds < SUB_SECOND_CARRY_TOLERANCE {
            next_second
        } else {
            total_seconds.floor()
        };
        let fractional_seconds = (total_seconds - whole_seconds).clamp(0.0, 1.0 - f64::EPSILON);

        let whole_seconds = (whole_seconds as u32) % SECONDS_PER_DAY_WHOLE;
        ClockTime {
            hours: whole_seconds / 3_600,
            minutes: (whole_seconds % 3_600) / 60,
            seconds: whole_seconds % 60,
            fractional_seconds,
        }
    }

    pub fn decimal_hours(&self) -> f64 {
        self.hours as f64
            + self.minutes as f64 / MINUTES_PER_HOUR
            + self.seconds as f64 / SECONDS_PER_HOUR
            + self.fractional_seconds / SECONDS_PER_HOUR
    }

    /// Seconds elapsed since midnight, including the fractional part.
    pub fn seconds_since_midnight(&self) -> f64 {
        self.decimal_hours() * SECONDS_PER_HOUR
    }
}

/// Wraps an hour value into [0, 24) using a floor modulus.
pub fn normalize_to_day_range(hours: f64) -> f64 {
    let wrapped = hours.rem_euclid(HOURS_PER_DAY);
    // rem_euclid rounds tiny negative inputs up to exactly 24.0
    if wrapped >= HOURS_PER_DAY {
        0.0
    } else {
        wrapped
    }
}

impl Default for ClockTime {
    fn default() -> Self {
        ClockTime::midnight()
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}
