use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use crate::clock::planetary_time::PlanetaryTimeResult;
use crate::constants::TimeConstants;
use crate::conversion_system::pipeline::{
    coordinated_time_to_local_time, julian_date_to_terrestrial_time,
    mars_sol_date_to_coordinated_time, normalize_longitude, terrestrial_time_to_mars_sol_date,
    utc_to_julian_date,
};
use crate::conversion_system::validation::validate;
use crate::errors::ValidationError;

/// Earth-to-Mars time converter.
///
/// Holds only its constant table, so it is `Copy` and every call is a pure
/// function of `(instant, longitude)`. Share one instance freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarsClock {
    constants: TimeConstants,
}

impl MarsClock {
    pub fn new() -> Self {
        MarsClock::default()
    }

    pub fn with_constants(constants: TimeConstants) -> Self {
        MarsClock { constants }
    }

    pub fn constants(&self) -> &TimeConstants {
        &self.constants
    }

    pub fn calculate(
        &self,
        instant: DateTime<Utc>,
        longitude_east_degrees: f64,
    ) -> Result<PlanetaryTimeResult, ValidationError> {
        if let Err(error) = validate(&instant, longitude_east_degrees, &self.constants) {
            warn!(%instant, "rejecting instant outside the conversion window");
            return Err(error);
        }

        let longitude = normalize_longitude(longitude_east_degrees);
        if longitude != longitude_east_degrees {
            warn!(
                requested = longitude_east_degrees,
                normalized = longitude,
                "longitude wrapped into [-180, 180]"
            );
        }

        let julian_date = utc_to_julian_date(&instant, &self.constants);
        let terrestrial_time = julian_date_to_terrestrial_time(julian_date, &self.constants);
        let mars_sol_date = terrestrial_time_to_mars_sol_date(terrestrial_time, &self.constants);
        let coordinated_time = mars_sol_date_to_coordinated_time(mars_sol_date);
        let local_time = coordinated_time_to_local_time(&coordinated_time, longitude, &self.constants);
        let sol_number = mars_sol_date.floor() as i64;

        debug!(
            %instant,
            julian_date,
            mars_sol_date,
            sol_number,
            mtc = %coordinated_time,
            lmst = %local_time,
            "converted Earth instant to Mars time"
        );

        Ok(PlanetaryTimeResult {
            source_instant: instant,
            julian_date,
            terrestrial_time,
            mars_sol_date,
            sol_number,
            coordinated_time,
            local_time,
            longitude_east_degrees: longitude,
        })
    }

    /// Converts the current system time.
    pub fn now(&self, longitude_east_degrees: f64) -> Result<PlanetaryTimeResult, ValidationError> {
        self.calculate(Utc::now(), longitude_east_degrees)
    }
}

/// Converts with the compiled-in constant table.
pub fn calculate(
    instant: DateTime<Utc>,
    longitude_east_degrees: f64,
) -> Result<PlanetaryTimeResult, ValidationError> {
    MarsClock::default().calculate(instant, longitude_east_degrees)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use chrono::{Duration, TimeZone};

    #[test]
    fn test_calculate_assembles_every_stage() {
        let instant = Utc.with_ymd_and_hms(2000, 1, 6, 0, 0, 0).unwrap();
        let result = calculate(instant, 0.0).expect("instant is inside the window");

        assert_eq!(result.source_instant, instant);
        assert_eq!(result.julian_date, 2_451_549.5);
        assert_abs_diff_eq!(
            result.terrestrial_time,
            2_451_549.5 + 69.184 / 86_400.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(result.mars_sol_date, 44_796.000_779_32, epsilon = 1e-6);
        assert_eq!(result.sol_number, 44_796);
        assert_eq!(result.coordinated_time.hours, 0);
        assert_eq!(result.coordinated_time.minutes, 1);
        assert_eq!(result.coordinated_time.seconds, 7);
        assert_eq!(result.local_time, result.coordinated_time);
    }

    #[test]
    fn test_calculate_reports_normalized_longitude() {
        let instant = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let wrapped = calculate(instant, 370.0).unwrap();
        let direct = calculate(instant, 10.0).unwrap();

        assert_abs_diff_eq!(wrapped.longitude_east_degrees, 10.0, epsilon = 1e-9);
        assert_eq!(wrapped.local_time.hours, direct.local_time.hours);
        assert_eq!(wrapped.local_time.minutes, direct.local_time.minutes);
    }

    #[test]
    fn test_calculate_rejects_instant_before_window() {
        let instant = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        assert_eq!(
            calculate(instant, 0.0),
            Err(ValidationError::InstantOutOfRange { instant })
        );
    }

    #[test]
    fn test_overridden_delta_t_shifts_sol_date() {
        let instant = Utc.with_ymd_and_hms(2040, 5, 5, 5, 5, 5).unwrap();
        let standard = MarsClock::new().calculate(instant, 0.0).unwrap();
        let updated = MarsClock::with_constants(
            TimeConstants::default().with_terrestrial_time_offset(70.184),
        )
        .calculate(instant, 0.0)
        .unwrap();

        let expected_shift = 1.0 / 86_400.0 / 1.027_491_251_7;
        assert_abs_diff_eq!(
            updated.mars_sol_date - standard.mars_sol_date,
            expected_shift,
            epsilon = 1e-9
        );
        assert_eq!(updated.julian_date, standard.julian_date);
    }

    #[test]
    fn test_sol_number_advances_after_one_sol() {
        let clock = MarsClock::new();
        let start = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        // 1.0274912517 Earth days = 88775.244 s
        let one_sol_later = start + Duration::milliseconds(88_775_244);

        let first = clock.calculate(start, 0.0).unwrap();
        let second = clock.calculate(one_sol_later, 0.0).unwrap();
        assert_eq!(second.sol_number, first.sol_number + 1);
        assert_abs_diff_eq!(
            second.mars_sol_date - first.mars_sol_date,
            1.0,
            epsilon = 1e-6
        );
    }

    #[test]
    fn test_now_is_inside_window() {
        let result = MarsClock::new().now(-45.0).expect("system clock is in range");
        assert!(result.sol_number > 44_791);
    }
}
