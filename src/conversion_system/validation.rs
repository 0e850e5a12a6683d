use chrono::{DateTime, Utc};

use crate::constants::TimeConstants;
use crate::errors::ValidationError;

/// Checks that an instant lies inside the conversion window.
///
/// The window is inclusive at both ends and compared with nanosecond
/// precision. The longitude is accepted as-is: any out-of-range value is
/// wrapped later by [`normalize_longitude`](crate::conversion_system::pipeline::normalize_longitude)
/// rather than rejected here.
pub fn validate(
    instant: &DateTime<Utc>,
    _longitude_east_degrees: f64,
    constants: &TimeConstants,
) -> Result<(), ValidationError> {
    let position = (instant.timestamp(), instant.timestamp_subsec_nanos());

    if position < (constants.minimum_valid_unix_seconds, 0)
        || position > (constants.maximum_valid_unix_seconds, 0)
    {
        return Err(ValidationError::InstantOutOfRange { instant: *instant });
    }

    Ok(())
}
