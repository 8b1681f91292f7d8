//! Appointment records as supplied by a data source.
//!
//! Records are stored the way the source hands them over (start time as a
//! raw "HH:MM" string, duration in minutes) and validated lazily when the
//! layout engine positions them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BookingError, BookingResult};

/// A booked appointment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub title: String,
    pub client: String,
    /// Start time, "HH:MM" 24h
    pub time: String,
    /// Duration in minutes
    pub duration: i64,
    /// Id of the resource this appointment is booked on
    pub resource: String,
    pub service: String,
    pub status: AppointmentStatus,
}

impl Appointment {
    pub fn start_time(&self) -> BookingResult<StartTime> {
        self.time.parse()
    }

    /// Duration in minutes, rejected when not positive
    pub fn checked_duration(&self) -> BookingResult<i64> {
        if self.duration <= 0 {
            return Err(BookingError::InvalidDuration(self.duration));
        }
        Ok(self.duration)
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.client)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
    /// Any status string the dashboard does not know
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub fn category(&self) -> DisplayCategory {
        match self {
            AppointmentStatus::Confirmed => DisplayCategory::Success,
            AppointmentStatus::Pending => DisplayCategory::Warning,
            AppointmentStatus::Cancelled => DisplayCategory::Danger,
            AppointmentStatus::Unknown => DisplayCategory::Neutral,
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Cancelled => "cancelled",
            AppointmentStatus::Unknown => "unknown",
        };
        write!(f, "{}", s)
    }
}

/// How the rendering surface should color an appointment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayCategory {
    Success,
    Warning,
    Danger,
    Neutral,
}

/// Validated wall-clock start of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StartTime {
    hour: u8,
    minute: u8,
}

impl StartTime {
    pub fn new(hour: u8, minute: u8) -> BookingResult<Self> {
        if hour > 23 || minute > 59 {
            return Err(BookingError::InvalidTime(format!("{:02}:{:02}", hour, minute)));
        }
        Ok(StartTime { hour, minute })
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    pub fn minute(&self) -> u8 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        self.hour as u32 * 60 + self.minute as u32
    }
}

impl FromStr for StartTime {
    type Err = BookingError;

    /// Parse strict "HH:MM" (two digits each side)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BookingError::InvalidTime(s.to_string());

        let (hours, minutes) = s.split_once(':').ok_or_else(invalid)?;
        let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());
        if !two_digits(hours) || !two_digits(minutes) {
            return Err(invalid());
        }

        let hour: u8 = hours.parse().map_err(|_| invalid())?;
        let minute: u8 = minutes.parse().map_err(|_| invalid())?;
        StartTime::new(hour, minute).map_err(|_| invalid())
    }
}

impl fmt::Display for StartTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
