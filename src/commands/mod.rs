pub mod config;
pub mod resources;
pub mod view;

use std::path::Path;

use anyhow::{Context, Result};
use booking_core::config::BookingConfig;
use booking_core::source::{BookingData, BookingSource, FileSource, StaticSource};
use chrono::NaiveDate;

/// Load booking data from `data` if given, else from the configured data
/// file, else the built-in demo records.
pub fn load_data(config: &BookingConfig, data: Option<&Path>) -> Result<BookingData> {
    let path = data.map(Path::to_path_buf).or_else(|| config.data_path());

    let snapshot = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading bookings from file");
            FileSource::new(path).snapshot()?
        }
        None => {
            tracing::debug!("no data file configured, using demo bookings");
            StaticSource::demo().snapshot()?
        }
    };

    Ok(snapshot)
}

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}
