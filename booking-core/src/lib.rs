//! Calendar layout engine for the booking dashboard.
//!
//! This crate turns an anchor date, a view granularity, a resource selection
//! and a list of appointments into what a rendering surface paints:
//! - `grid`: visible date cells for the day, week and month views
//! - `time_slot`: the 24 hourly rows of the time axis
//! - `layout`: pixel rectangles for appointments on the time axis
//! - `columns`: appointments partitioned into resource columns
//! - `view`: all of the above composed per granularity
//!
//! Data comes in through a `source::BookingSource`; UI state transitions
//! live in `state`.

pub mod appointment;
pub mod columns;
pub mod config;
pub mod constants;
pub mod error;
pub mod grid;
pub mod layout;
pub mod resource;
pub mod source;
pub mod state;
pub mod time_slot;
pub mod view;

pub use appointment::{Appointment, AppointmentStatus, DisplayCategory, StartTime};
pub use error::{BookingError, BookingResult};
pub use grid::Granularity;
pub use resource::{Location, Resource, ResourceKind, ResourceSelection};
