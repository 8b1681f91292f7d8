/// Number of hourly slots on the time axis
pub const HOURS_PER_DAY: u8 = 24;

/// Pixel height of one hour in the day view
pub const DAY_VIEW_HOUR_HEIGHT: f64 = 64.0;

/// Pixel height of one hour in the week view
pub const WEEK_VIEW_HOUR_HEIGHT: f64 = 48.0;

/// Appointments are never drawn shorter than this, however brief
pub const MIN_APPOINTMENT_HEIGHT: f64 = 48.0;

pub const DAYS_PER_WEEK: usize = 7;
