use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::SubscriberBuilder;

use crate::errors::ConfigError;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise `level` (or `info`) applies. Output
/// goes to stderr so it never interleaves with printed or JSON results.
pub fn init_tracing(level: Option<&str>) -> Result<(), ConfigError> {
    let default_level = level.unwrap_or("info");
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    SubscriberBuilder::default()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| ConfigError::Tracing(err.to_string()))
}
