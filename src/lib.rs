pub mod clock;
pub mod constants;
pub mod conversion_system;
pub mod errors;
pub mod logging;
pub mod timeline_system;
pub mod utils;

pub use constants::TimeConstants;
pub use errors::{ConfigError, ValidationError};

// Re-export the entry points most callers need
pub use clock::mars_clock::{calculate, MarsClock};
pub use clock::planetary_time::PlanetaryTimeResult;

// Re-export the individual pipeline stages
pub use conversion_system::pipeline::{
    coordinated_time_to_local_time, julian_date_to_terrestrial_time,
    mars_sol_date_to_coordinated_time, normalize_longitude, terrestrial_time_to_mars_sol_date,
    utc_to_julian_date,
};
pub use conversion_system::validation::validate;

// Re-export commonly used utilities
pub use timeline_system::timeline::Timeline;
pub use utils::clock_time::{normalize_to_day_range, ClockTime};
