//! User configuration at ~/.config/booking/config.toml

use std::path::{Path, PathBuf};

use ::config::{Config, File};
use serde::{Deserialize, Serialize};

use crate::constants::{DAY_VIEW_HOUR_HEIGHT, MIN_APPOINTMENT_HEIGHT, WEEK_VIEW_HOUR_HEIGHT};
use crate::error::{BookingError, BookingResult};
use crate::grid::Granularity;
use crate::layout::AxisScale;
use crate::resource::ResourceSelection;
use crate::state::DEFAULT_SELECTION;

fn default_resources() -> Vec<String> {
    DEFAULT_SELECTION.iter().map(|s| s.to_string()).collect()
}

fn default_day_hour_height() -> f64 {
    DAY_VIEW_HOUR_HEIGHT
}

fn default_week_hour_height() -> f64 {
    WEEK_VIEW_HOUR_HEIGHT
}

fn default_min_appointment_height() -> f64 {
    MIN_APPOINTMENT_HEIGHT
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConfig {
    /// TOML file with appointments and resources. The built-in demo data
    /// is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,

    #[serde(default)]
    pub default_view: Granularity,

    #[serde(default = "default_resources")]
    pub default_resources: Vec<String>,

    #[serde(default = "default_day_hour_height")]
    pub day_hour_height: f64,

    #[serde(default = "default_week_hour_height")]
    pub week_hour_height: f64,

    #[serde(default = "default_min_appointment_height")]
    pub min_appointment_height: f64,
}

impl Default for BookingConfig {
    fn default() -> Self {
        BookingConfig {
            data_file: None,
            default_view: Granularity::default(),
            default_resources: default_resources(),
            day_hour_height: default_day_hour_height(),
            week_hour_height: default_week_hour_height(),
            min_appointment_height: default_min_appointment_height(),
        }
    }
}

impl BookingConfig {
    pub fn config_path() -> BookingResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| BookingError::Config("Could not determine config directory".into()))?
            .join("booking");

        Ok(config_dir.join("config.toml"))
    }

    /// Load the user config, writing a commented-out default file first if
    /// none exists yet.
    pub fn load() -> BookingResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> BookingResult<Self> {
        let config: BookingConfig = Config::builder()
            .add_source(File::from(path.to_path_buf()).required(false))
            .build()
            .map_err(|e| BookingError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| BookingError::Config(e.to_string()))?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn validate(&self) -> BookingResult<()> {
        for (key, value) in [
            ("day_hour_height", self.day_hour_height),
            ("week_hour_height", self.week_hour_height),
            ("min_appointment_height", self.min_appointment_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(BookingError::Config(format!(
                    "{key} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Data file path with `~` expanded
    pub fn data_path(&self) -> Option<PathBuf> {
        self.data_file.as_ref().map(|p| {
            PathBuf::from(shellexpand::tilde(&p.to_string_lossy()).into_owned())
        })
    }

    pub fn default_selection(&self) -> ResourceSelection {
        ResourceSelection::new(self.default_resources.iter().cloned())
    }

    pub fn day_scale(&self) -> AxisScale {
        AxisScale {
            hour_height: self.day_hour_height,
            min_height: self.min_appointment_height,
        }
    }

    pub fn week_scale(&self) -> AxisScale {
        AxisScale {
            hour_height: self.week_hour_height,
            min_height: self.min_appointment_height,
        }
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> BookingResult<()> {
        let contents = format!(
            "\
# booking configuration

# Appointments and resources (built-in demo data when unset):
# data_file = \"~/bookings.toml\"

# View opened by default (day, week or month):
# default_view = \"day\"

# Resources selected by default:
# default_resources = [{}]

# Pixel scale of the time axis:
# day_hour_height = {DAY_VIEW_HOUR_HEIGHT:.0}
# week_hour_height = {WEEK_VIEW_HOUR_HEIGHT:.0}
# min_appointment_height = {MIN_APPOINTMENT_HEIGHT:.0}
",
            DEFAULT_SELECTION
                .iter()
                .map(|id| format!("\"{id}\""))
                .collect::<Vec<_>>()
                .join(", ")
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                BookingError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| BookingError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}
