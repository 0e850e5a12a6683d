use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Instant {instant} is outside the supported conversion range")]
    InstantOutOfRange { instant: DateTime<Utc> },
}

impl ValidationError {
    /// The instant that failed validation.
    pub fn instant(&self) -> DateTime<Utc> {
        match self {
            ValidationError::InstantOutOfRange { instant } => *instant,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for environment variable {name}")]
    InvalidEnvVar { name: String, value: String },

    #[error("Invalid constant {name}: {reason}")]
    InvalidConstant { name: String, reason: String },

    #[error("Failed to read constants file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse constants: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to initialise tracing: {0}")]
    Tracing(String),
}
