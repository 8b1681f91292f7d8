//! TUI rendering traits for booking types.
//!
//! This module provides an extension trait that adds colored terminal
//! rendering to booking-core types using owo_colors.

use booking_core::appointment::{Appointment, DisplayCategory};
use booking_core::grid::MonthCell;
use booking_core::layout::Placement;
use booking_core::resource::{Location, Resource, ResourceKind};
use booking_core::view::{CalendarView, DayColumn, DayView, MonthView, WeekDay, WeekView};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

/// Colorize text according to the appointment's status category
fn colorize(category: DisplayCategory, text: &str) -> String {
    match category {
        DisplayCategory::Success => text.green().to_string(),
        DisplayCategory::Warning => text.yellow().to_string(),
        DisplayCategory::Danger => text.red().to_string(),
        DisplayCategory::Neutral => text.dimmed().to_string(),
    }
}

impl Render for CalendarView<'_> {
    fn render(&self) -> String {
        match self {
            CalendarView::Day(day) => day.render(),
            CalendarView::Week(week) => week.render(),
            CalendarView::Month(month) => month.render(),
        }
    }
}

impl Render for DayView<'_> {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        let mut title = self.date.format("%A, %B %-d, %Y").to_string().bold().to_string();
        if self.is_today {
            title = format!("{} {}", title, "(today)".dimmed());
        }
        lines.push(title);

        if self.columns.is_empty() {
            lines.push("   No resources selected".dimmed().to_string());
        }

        for column in &self.columns {
            lines.push(String::new());
            lines.push(column.render());
        }

        if !self.orphans.is_empty() {
            lines.push(String::new());
            lines.push("Unassigned (unknown resource):".yellow().to_string());
            for appt in &self.orphans {
                lines.push(format!("   {} {}", appt.render(), appt.resource.dimmed()));
            }
        }

        lines.join("\n")
    }
}

impl Render for DayColumn<'_> {
    fn render(&self) -> String {
        let mut lines = vec![self.resource.render()];

        let mut entries: Vec<(&Appointment, &Placement)> = self.entries().collect();
        entries.sort_by(|a, b| a.1.position.top.total_cmp(&b.1.position.top));

        if entries.is_empty() && self.skipped().is_empty() {
            lines.push("   No appointments".dimmed().to_string());
        }

        for (appt, placement) in entries {
            let geometry = format!(
                "[{:.0}px +{:.0}px]",
                placement.position.top, placement.position.height
            );
            lines.push(format!(
                "   {} {} {}",
                colorize(placement.category, &appt.time),
                appt.render(),
                geometry.dimmed()
            ));
        }

        for skipped in self.skipped() {
            lines.push(format!("   {} {}: {}", "!".red(), skipped.id, skipped.error.to_string().red()));
        }

        lines.join("\n")
    }
}

impl Render for Appointment {
    fn render(&self) -> String {
        let details = format!("{} · {} ({}min)", self.client, self.service, self.duration);
        format!(
            "{} {}",
            colorize(self.status.category(), &self.title),
            details.dimmed()
        )
    }
}

impl Render for Resource {
    fn render(&self) -> String {
        let icon = match self.kind {
            ResourceKind::Professional => "👤",
            ResourceKind::Workstation => "▪",
        };
        let availability = if self.available {
            "available".green().to_string()
        } else {
            "busy".red().to_string()
        };
        format!("{} {} {}", icon, self.name.bold(), availability)
    }
}

impl Render for Location {
    fn render(&self) -> String {
        format!("📍 {} {}", self.name, self.address.dimmed())
    }
}

impl Render for WeekDay {
    fn render(&self) -> String {
        let day = format!("{:>4}", self.date.format("%-d").to_string());
        if self.is_today {
            day.reversed().to_string()
        } else {
            day
        }
    }
}

impl Render for WeekView {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        if let (Some(first), Some(last)) = (self.days.first(), self.days.last()) {
            let title = format!(
                "{} - {}",
                first.date.format("%b %-d"),
                last.date.format("%b %-d, %Y")
            );
            lines.push(title.bold().to_string());
        }

        let header: Vec<String> = self.header.iter().map(|d| format!("{:>4}", d.to_string())).collect();
        lines.push(header.join("").dimmed().to_string());
        lines.push(self.days.iter().map(|d| d.render()).collect::<Vec<_>>().join(""));

        let first_slot = self.time_slots.first().map(|s| s.label()).unwrap_or_default();
        let last_slot = self.time_slots.last().map(|s| s.label()).unwrap_or_default();
        lines.push(
            format!(
                "{} slots {}-{} at {:.0}px/h",
                self.time_slots.len(),
                first_slot,
                last_slot,
                self.scale.hour_height
            )
            .dimmed()
            .to_string(),
        );

        lines.join("\n")
    }
}

impl Render for MonthCell {
    fn render(&self) -> String {
        let day = format!("{:>4}", self.date.format("%-d").to_string());
        if self.is_today {
            day.reversed().to_string()
        } else if !self.in_current_month {
            day.dimmed().to_string()
        } else {
            day
        }
    }
}

impl Render for MonthView {
    fn render(&self) -> String {
        let mut lines = vec![self.month.format("%B %Y").to_string().bold().to_string()];

        let header: Vec<String> = self.header.iter().map(|d| format!("{:>4}", d.to_string())).collect();
        lines.push(header.join("").dimmed().to_string());

        for week in &self.weeks {
            lines.push(week.iter().map(|cell| cell.render()).collect::<Vec<_>>().join(""));
        }

        lines.join("\n")
    }
}
