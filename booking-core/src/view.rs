//! Render model: everything a surface needs to paint the current calendar.

use chrono::{NaiveDate, Weekday};
use serde::Serialize;

use crate::appointment::Appointment;
use crate::columns::ResourceColumns;
use crate::grid::{self, Granularity, MonthCell};
use crate::layout::{AxisScale, Layout, Placement, Skipped, layout_appointments};
use crate::resource::Resource;
use crate::source::BookingData;
use crate::state::CalendarState;
use crate::time_slot::{TimeSlot, time_slots};

/// Pixel scales for the views that have a time axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewSettings {
    pub day: AxisScale,
    pub week: AxisScale,
}

impl Default for ViewSettings {
    fn default() -> Self {
        ViewSettings {
            day: AxisScale::day(),
            week: AxisScale::week(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum CalendarView<'a> {
    Day(DayView<'a>),
    Week(WeekView),
    Month(MonthView),
}

#[derive(Debug, Serialize)]
pub struct DayView<'a> {
    pub date: NaiveDate,
    pub is_today: bool,
    pub scale: AxisScale,
    pub time_slots: Vec<TimeSlot>,
    pub columns: Vec<DayColumn<'a>>,
    /// Appointments booked on resources missing from the roster
    pub orphans: Vec<&'a Appointment>,
}

#[derive(Debug, Serialize)]
pub struct DayColumn<'a> {
    pub resource: &'a Resource,
    pub appointments: Vec<&'a Appointment>,
    pub layout: Layout,
}

impl<'a> DayColumn<'a> {
    /// Positioned appointments paired with their records
    pub fn entries(&self) -> impl Iterator<Item = (&'a Appointment, &Placement)> + '_ {
        self.layout.placements.iter().filter_map(|placement| {
            self.appointments
                .get(placement.index)
                .map(|appt| (*appt, placement))
        })
    }

    pub fn skipped(&self) -> &[Skipped] {
        &self.layout.skipped
    }
}

#[derive(Debug, Serialize)]
pub struct WeekView {
    pub header: [Weekday; 7],
    pub days: Vec<WeekDay>,
    pub scale: AxisScale,
    pub time_slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekDay {
    pub date: NaiveDate,
    pub is_today: bool,
}

#[derive(Debug, Serialize)]
pub struct MonthView {
    /// First day of the displayed month
    pub month: NaiveDate,
    pub header: [Weekday; 7],
    pub weeks: Vec<Vec<MonthCell>>,
}

impl<'a> CalendarView<'a> {
    pub fn build(
        state: &CalendarState,
        data: &'a BookingData,
        settings: &ViewSettings,
        today: NaiveDate,
    ) -> Self {
        match state.granularity {
            Granularity::Day => CalendarView::Day(DayView::build(state, data, settings.day, today)),
            Granularity::Week => CalendarView::Week(WeekView::build(state.anchor, settings.week, today)),
            Granularity::Month => CalendarView::Month(MonthView::build(state.anchor, today)),
        }
    }

    pub fn granularity(&self) -> Granularity {
        match self {
            CalendarView::Day(_) => Granularity::Day,
            CalendarView::Week(_) => Granularity::Week,
            CalendarView::Month(_) => Granularity::Month,
        }
    }
}

impl<'a> DayView<'a> {
    pub fn build(
        state: &CalendarState,
        data: &'a BookingData,
        scale: AxisScale,
        today: NaiveDate,
    ) -> Self {
        let partition = ResourceColumns::build(&data.appointments, &data.resources, &state.selection);

        let columns = partition
            .columns
            .into_iter()
            .map(|column| {
                let layout = layout_appointments(column.appointments.iter().copied(), scale);
                DayColumn {
                    resource: column.resource,
                    appointments: column.appointments,
                    layout,
                }
            })
            .collect();

        DayView {
            date: state.anchor,
            is_today: state.anchor == today,
            scale,
            time_slots: time_slots().collect(),
            columns,
            orphans: partition.orphans,
        }
    }

    /// Id → placement across all columns
    pub fn placement(&self, id: &str) -> Option<&Placement> {
        self.columns.iter().find_map(|c| c.layout.get(id))
    }
}

impl WeekView {
    pub fn build(anchor: NaiveDate, scale: AxisScale, today: NaiveDate) -> Self {
        WeekView {
            header: grid::week_strip_header(),
            days: grid::visible_dates(anchor, Granularity::Week)
                .map(|date| WeekDay {
                    date,
                    is_today: date == today,
                })
                .collect(),
            scale,
            time_slots: time_slots().collect(),
        }
    }
}

impl MonthView {
    pub fn build(anchor: NaiveDate, today: NaiveDate) -> Self {
        MonthView {
            month: grid::first_of_month(anchor),
            header: grid::month_grid_header(),
            weeks: grid::month_weeks(anchor, today),
        }
    }
}
