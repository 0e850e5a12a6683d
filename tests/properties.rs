use chrono::{DateTime, Utc};
use mars_time::{calculate, normalize_longitude, normalize_to_day_range, ClockTime};
use proptest::prelude::*;

fn arb_valid_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (946_684_800i64..=4_133_980_799i64, 0u32..1_000_000_000u32).prop_filter_map(
        "instant past the window",
        |(seconds, nanos)| {
            if seconds == 4_133_980_799 && nanos > 0 {
                None
            } else {
                DateTime::from_timestamp(seconds, nanos)
            }
        },
    )
}

proptest! {
    #[test]
    fn clock_time_round_trips_decimal_hours(hours in 0.0f64..24.0) {
        let time = ClockTime::from_decimal_hours(hours);
        prop_assert!((time.decimal_hours() - hours).abs() < 1e-6);
    }

    #[test]
    fn component_and_decimal_construction_agree(
        hours in 0u32..24,
        minutes in 0u32..60,
        seconds in 0u32..60,
        fraction in prop_oneof![Just(0.0f64), 0.0f64..0.999],
    ) {
        let components = ClockTime::new(hours, minutes, seconds, fraction);
        let decomposed = ClockTime::from_decimal_hours(components.decimal_hours());
        prop_assert_eq!(decomposed.hours, hours);
        prop_assert_eq!(decomposed.minutes, minutes);
        prop_assert_eq!(decomposed.seconds, seconds);
        prop_assert!((decomposed.fractional_seconds - fraction).abs() < 1e-6);
    }

    #[test]
    fn normalize_longitude_is_idempotent(longitude in -1e9f64..1e9) {
        let once = normalize_longitude(longitude);
        prop_assert_eq!(normalize_longitude(once), once);
        prop_assert!((-180.0..=180.0).contains(&once));
    }

    #[test]
    fn normalize_longitude_is_identity_inside_range(longitude in -180.0f64..=180.0) {
        prop_assert_eq!(normalize_longitude(longitude), longitude);
    }

    #[test]
    fn normalize_longitude_moves_by_whole_turns(longitude in -1e6f64..1e6) {
        let turns = (longitude - normalize_longitude(longitude)) / 360.0;
        prop_assert!((turns - turns.round()).abs() < 1e-6);
    }

    #[test]
    fn day_range_is_half_open(hours in -1e6f64..1e6) {
        let wrapped = normalize_to_day_range(hours);
        prop_assert!((0.0..24.0).contains(&wrapped));
    }

    #[test]
    fn calculate_is_deterministic(instant in arb_valid_instant(), longitude in -1e4f64..1e4) {
        prop_assert_eq!(calculate(instant, longitude), calculate(instant, longitude));
    }

    #[test]
    fn prime_meridian_matches_coordinated_time(instant in arb_valid_instant()) {
        let result = calculate(instant, 0.0).unwrap();
        prop_assert_eq!(result.local_time, result.coordinated_time);
    }

    #[test]
    fn clock_components_stay_in_range(instant in arb_valid_instant(), longitude in -720.0f64..720.0) {
        let result = calculate(instant, longitude).unwrap();
        for time in [result.coordinated_time, result.local_time] {
            prop_assert!(time.hours <= 23);
            prop_assert!(time.minutes <= 59);
            prop_assert!(time.seconds <= 59);
            prop_assert!((0.0..1.0).contains(&time.fractional_seconds));
        }
        prop_assert_eq!(result.sol_number, result.mars_sol_date.floor() as i64);
    }

    #[test]
    fn later_instants_have_later_sol_dates(
        first in arb_valid_instant(),
        second in arb_valid_instant(),
        longitude in -180.0f64..180.0,
    ) {
        prop_assume!(first.timestamp() != second.timestamp());
        let (earlier, later) = if first < second { (first, second) } else { (second, first) };
        let earlier = calculate(earlier, longitude).unwrap();
        let later = calculate(later, longitude).unwrap();
        prop_assert!(later.mars_sol_date > earlier.mars_sol_date);
        prop_assert!(later.sol_number >= earlier.sol_number);
    }

    #[test]
    fn local_offset_tracks_longitude(instant in arb_valid_instant(), longitude in -179.9f64..179.9) {
        let result = calculate(instant, longitude).unwrap();
        let offset = result.local_time.decimal_hours() - result.coordinated_time.decimal_hours();
        let expected = longitude / 15.0;
        let difference = normalize_to_day_range(offset - expected + 12.0) - 12.0;
        prop_assert!(difference.abs() < 1e-6);
    }
}
