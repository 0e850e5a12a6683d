//! The five conversion stages from an Earth UTC instant to Mars local mean solar time.
//!
//! ```text
//! UTC --(1)--> JD --(2)--> TT --(3)--> MSD --(4)--> MTC --(5)--> LMST
//! ```
//!
//! Every stage is a total function of its input and the constant table. Range
//! checks happen once, before stage 1, in [`crate::conversion_system::validation`].

use chrono::{DateTime, Utc};

use crate::constants::{
    DEGREES_PER_REVOLUTION, HOURS_PER_DAY, MAX_LONGITUDE_DEGREES, NANOSECONDS_PER_SECOND,
    TimeConstants,
};
use crate::utils::clock_time::{normalize_to_day_range, ClockTime};

/// Seconds since the Unix epoch, keeping the sub-second part.
pub fn unix_seconds(instant: &DateTime<Utc>) -> f64 {
    instant.timestamp() as f64 + instant.timestamp_subsec_nanos() as f64 / NANOSECONDS_PER_SECOND
}

/// Stage 1: UTC instant to Julian Date.
pub fn utc_to_julian_date(instant: &DateTime<Utc>, constants: &TimeConstants) -> f64 {
    unix_seconds(instant) / constants.seconds_per_day + constants.unix_epoch_julian_date
}

/// Stage 2: Julian Date (UTC) to Terrestrial Time, as a Julian Date.
pub fn julian_date_to_terrestrial_time(julian_date: f64, constants: &TimeConstants) -> f64 {
    julian_date + constants.terrestrial_time_offset_seconds / constants.seconds_per_day
}

/// Stage 3: Terrestrial Time to Mars Sol Date. Affine, never clamped or rounded.
pub fn terrestrial_time_to_mars_sol_date(terrestrial_time: f64, constants: &TimeConstants) -> f64 {
    (terrestrial_time - constants.mars_epoch_julian_date) / constants.mars_sol_to_earth_day_ratio
        + constants.mars_sol_date_offset
}

/// Stage 4: Mars Sol Date to Coordinated Mars Time at the prime meridian.
pub fn mars_sol_date_to_coordinated_time(mars_sol_date: f64) -> ClockTime {
    // floor modulus: stays in [0, 1) for negative dates too
    let fractional_sol = mars_sol_date - mars_sol_date.floor();
    ClockTime::from_decimal_hours(fractional_sol * HOURS_PER_DAY)
}

/// Stage 5: shift Coordinated Mars Time by longitude to Local Mean Solar Time.
pub fn coordinated_time_to_local_time(
    coordinated_time: &ClockTime,
    longitude_east_degrees: f64,
    constants: &TimeConstants,
) -> ClockTime {
    let offset_hours = longitude_east_degrees / constants.degrees_per_hour_of_longitude;
    if offset_hours == 0.0 {
        return *coordinated_time;
    }

    let local_hours = normalize_to_day_range(coordinated_time.decimal_hours() + offset_hours);
    ClockTime::from_decimal_hours(local_hours)
}

/// Wraps a longitude into [-180, 180] by whole turns.
///
/// Values already inside the closed interval, including both end points, are
/// returned unchanged. Non-finite input maps to the prime meridian.
pub fn normalize_longitude(longitude_degrees: f64) -> f64 {
    if !longitude_degrees.is_finite() {
        return 0.0;
    }

    if longitude_degrees > MAX_LONGITUDE_DEGREES {
        // whole turns off the eastern end land in (-180, 180]
        let past_end = (longitude_degrees - MAX_LONGITUDE_DEGREES) % DEGREES_PER_REVOLUTION;
        if past_end == 0.0 {
            MAX_LONGITUDE_DEGREES
        } else {
            past_end - MAX_LONGITUDE_DEGREES
        }
    } else if longitude_degrees < -MAX_LONGITUDE_DEGREES {
        let past_end = (-MAX_LONGITUDE_DEGREES - longitude_degrees) % DEGREES_PER_REVOLUTION;
        if past_end == 0.0 {
            -MAX_LONGITUDE_DEGREES
        } else {
            MAX_LONGITUDE_DEGREES - past_end
        }
    } else {
        longitude_degrees
    }
}
