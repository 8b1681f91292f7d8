//! Appointment geometry on the vertical time axis.

use serde::{Deserialize, Serialize, Serializer};

use crate::appointment::{Appointment, DisplayCategory, StartTime};
use crate::constants::{DAY_VIEW_HOUR_HEIGHT, MIN_APPOINTMENT_HEIGHT, WEEK_VIEW_HOUR_HEIGHT};
use crate::error::{BookingError, BookingResult};

/// Pixel scale of a time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisScale {
    pub hour_height: f64,
    pub min_height: f64,
}

impl AxisScale {
    pub fn day() -> Self {
        AxisScale {
            hour_height: DAY_VIEW_HOUR_HEIGHT,
            min_height: MIN_APPOINTMENT_HEIGHT,
        }
    }

    pub fn week() -> Self {
        AxisScale {
            hour_height: WEEK_VIEW_HOUR_HEIGHT,
            min_height: MIN_APPOINTMENT_HEIGHT,
        }
    }

    /// Total pixel height of the 24-hour axis
    pub fn axis_height(&self) -> f64 {
        24.0 * self.hour_height
    }
}

/// Top offset and height, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub top: f64,
    pub height: f64,
}

/// Place a block starting at `start` and lasting `duration_minutes`.
/// The height never drops below `scale.min_height`.
pub fn position_for(start: StartTime, duration_minutes: i64, scale: AxisScale) -> Position {
    let top = start.minutes_since_midnight() as f64 / 60.0 * scale.hour_height;
    let height = duration_minutes as f64 / 60.0 * scale.hour_height;

    Position {
        top,
        height: height.max(scale.min_height),
    }
}

impl Appointment {
    /// Validated position on an axis of the given scale.
    pub fn position(&self, scale: AxisScale) -> BookingResult<Position> {
        let start = self.start_time()?;
        let duration = self.checked_duration()?;
        Ok(position_for(start, duration, scale))
    }
}

/// Where and how to paint one appointment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    pub id: String,
    /// Position of the appointment in the sequence that was laid out
    #[serde(skip)]
    pub index: usize,
    pub position: Position,
    pub category: DisplayCategory,
}

/// An appointment left out of the layout, with the reason
#[derive(Debug, Serialize)]
pub struct Skipped {
    pub id: String,
    #[serde(rename = "reason", serialize_with = "serialize_error")]
    pub error: BookingError,
}

fn serialize_error<S: Serializer>(error: &BookingError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

#[derive(Debug, Default, Serialize)]
pub struct Layout {
    pub placements: Vec<Placement>,
    pub skipped: Vec<Skipped>,
}

impl Layout {
    pub fn get(&self, id: &str) -> Option<&Placement> {
        self.placements.iter().find(|p| p.id == id)
    }
}

/// Position every appointment, skipping (and warning about) the malformed ones.
pub fn layout_appointments<'a, I>(appointments: I, scale: AxisScale) -> Layout
where
    I: IntoIterator<Item = &'a Appointment>,
{
    let mut layout = Layout::default();

    for (index, appt) in appointments.into_iter().enumerate() {
        match appt.position(scale) {
            Ok(position) => layout.placements.push(Placement {
                id: appt.id.clone(),
                index,
                position,
                category: appt.status.category(),
            }),
            Err(error) => {
                tracing::warn!(appointment = %appt.id, %error, "skipping appointment");
                layout.skipped.push(Skipped {
                    id: appt.id.clone(),
                    error,
                });
            }
        }
    }

    layout
}
