//! Error types for the booking core.

use thiserror::Error;

/// Errors that can occur while loading or laying out booking data.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Invalid start time '{0}'. Expected HH:MM (00:00-23:59)")]
    InvalidTime(String),

    #[error("Invalid duration {0} min. Duration must be positive")]
    InvalidDuration(i64),

    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    #[error("Unknown view '{0}'. Expected day, week or month")]
    UnknownGranularity(String),

    #[error("Data source error: {0}")]
    DataSource(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for booking operations.
pub type BookingResult<T> = Result<T, BookingError>;
