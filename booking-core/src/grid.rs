//! Visible date cells for the day, week and month views.
//!
//! The week strip starts on Sunday while the month grid starts on Monday.
//! Both conventions are kept as the dashboard displays them.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::constants::DAYS_PER_WEEK;
use crate::error::BookingError;

/// Calendar view mode. Parsed case-insensitively from CLI args and config alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Granularity {
    #[default]
    Day,
    Week,
    Month,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Granularity::Day => "day",
            Granularity::Week => "week",
            Granularity::Month => "month",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Granularity {
    type Err = BookingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "day" => Ok(Granularity::Day),
            "week" => Ok(Granularity::Week),
            "month" => Ok(Granularity::Month),
            _ => Err(BookingError::UnknownGranularity(s.to_string())),
        }
    }
}

impl TryFrom<String> for Granularity {
    type Error = BookingError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

/// Lazy run of consecutive dates. Clone it to walk the same cells again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridDates {
    next: Option<NaiveDate>,
    remaining: usize,
}

impl GridDates {
    fn new(start: NaiveDate, len: usize) -> Self {
        GridDates {
            next: Some(start),
            remaining: len,
        }
    }

    /// Inclusive date span covered by this run, if it is non-empty.
    pub fn span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.next?;
        let last = self.clone().last()?;
        Some((first, last))
    }
}

impl Iterator for GridDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        if self.remaining == 0 {
            return None;
        }
        let current = self.next?;
        self.next = current.succ_opt();
        self.remaining = if self.next.is_some() {
            self.remaining - 1
        } else {
            0
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (self.remaining, Some(self.remaining)),
            None => (0, Some(0)),
        }
    }
}

impl ExactSizeIterator for GridDates {}

/// Ordered dates shown for `anchor` at the given granularity.
pub fn visible_dates(anchor: NaiveDate, granularity: Granularity) -> GridDates {
    match granularity {
        Granularity::Day => GridDates::new(anchor, 1),
        Granularity::Week => GridDates::new(week_start(anchor), DAYS_PER_WEEK),
        Granularity::Month => {
            let (start, end) = month_grid_bounds(anchor);
            let len = (end - start).num_days() as usize + 1;
            GridDates::new(start, len)
        }
    }
}

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as u64;
    date.checked_sub_days(Days::new(offset)).unwrap_or(date)
}

pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    first_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// First and last cell of the month grid: the Monday on or before the 1st
/// and the Sunday on or after the last day.
pub fn month_grid_bounds(anchor: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = first_of_month(anchor);
    let last = last_of_month(anchor);

    let lead = first.weekday().num_days_from_monday() as u64;
    let trail = 6 - last.weekday().num_days_from_monday() as u64;

    let start = first.checked_sub_days(Days::new(lead)).unwrap_or(first);
    let end = last.checked_add_days(Days::new(trail)).unwrap_or(last);
    (start, end)
}

/// A cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthCell {
    pub date: NaiveDate,
    /// False for padding days from the adjacent months (rendered dimmed)
    pub in_current_month: bool,
    pub is_today: bool,
}

pub fn month_cells(anchor: NaiveDate, today: NaiveDate) -> impl Iterator<Item = MonthCell> + Clone {
    visible_dates(anchor, Granularity::Month).map(move |date| MonthCell {
        date,
        in_current_month: date.month() == anchor.month() && date.year() == anchor.year(),
        is_today: date == today,
    })
}

/// Month grid split into Monday-to-Sunday rows.
pub fn month_weeks(anchor: NaiveDate, today: NaiveDate) -> Vec<Vec<MonthCell>> {
    let cells: Vec<MonthCell> = month_cells(anchor, today).collect();
    cells.chunks(DAYS_PER_WEEK).map(|week| week.to_vec()).collect()
}

/// Column headers of the week strip, Sunday first.
pub fn week_strip_header() -> [Weekday; DAYS_PER_WEEK] {
    header_from(Weekday::Sun)
}

/// Column headers of the month grid, Monday first.
pub fn month_grid_header() -> [Weekday; DAYS_PER_WEEK] {
    header_from(Weekday::Mon)
}

fn header_from(first: Weekday) -> [Weekday; DAYS_PER_WEEK] {
    std::array::from_fn(|i| (0..i).fold(first, |day, _| day.succ()))
}

/// Current local date, for callers that need the "today" highlight.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_view_is_the_anchor() {
        let anchor = date(2025, 6, 18);
        let dates: Vec<_> = visible_dates(anchor, Granularity::Day).collect();
        assert_eq!(dates, vec![anchor]);
    }

    #[test]
    fn test_week_view_starts_on_sunday() {
        let dates: Vec<_> = visible_dates(date(2025, 6, 18), Granularity::Week).collect();

        let expected: Vec<_> = (15..=21).map(|d| date(2025, 6, d)).collect();
        assert_eq!(dates, expected);
        assert_eq!(dates[0].weekday(), Weekday::Sun);
    }

    #[test]
    fn test_week_view_when_anchor_is_sunday() {
        let anchor = date(2025, 6, 15);
        let dates: Vec<_> = visible_dates(anchor, Granularity::Week).collect();
        assert_eq!(dates[0], anchor);
        assert_eq!(dates.len(), 7);
    }

    #[test]
    fn test_week_view_contains_anchor_for_every_weekday() {
        let mut anchor = date(2024, 12, 28);
        for _ in 0..21 {
            let dates: Vec<_> = visible_dates(anchor, Granularity::Week).collect();
            assert_eq!(dates.len(), 7);
            assert!(dates.contains(&anchor), "week of {} misses the anchor", anchor);
            assert!(dates.windows(2).all(|w| w[0] < w[1]));
            anchor = anchor.succ_opt().unwrap();
        }
    }

    #[test]
    fn test_month_view_june_2025() {
        let dates: Vec<_> = visible_dates(date(2025, 6, 18), Granularity::Month).collect();

        assert_eq!(dates.first(), Some(&date(2025, 5, 26)));
        assert_eq!(dates.last(), Some(&date(2025, 7, 6)));
        assert_eq!(dates.len(), 42);
    }

    #[test]
    fn test_month_view_already_aligned() {
        // September 2025 starts on a Monday and ends on a Tuesday
        let (start, end) = month_grid_bounds(date(2025, 9, 10));
        assert_eq!(start, date(2025, 9, 1));
        assert_eq!(end, date(2025, 10, 5));

        // February 2021 is exactly four Monday-to-Sunday weeks
        let dates: Vec<_> = visible_dates(date(2021, 2, 14), Granularity::Month).collect();
        assert_eq!(dates.len(), 28);
        assert_eq!(dates[0], date(2021, 2, 1));
        assert_eq!(dates[27], date(2021, 2, 28));
    }

    #[test]
    fn test_month_view_invariants_over_several_years() {
        let mut anchor = date(2023, 1, 15);
        for _ in 0..36 {
            let cells: Vec<_> = month_cells(anchor, anchor).collect();

            assert_eq!(cells.len() % 7, 0);
            assert_eq!(cells.first().unwrap().date.weekday(), Weekday::Mon);
            assert_eq!(cells.last().unwrap().date.weekday(), Weekday::Sun);

            let in_month: Vec<_> = cells.iter().filter(|c| c.in_current_month).collect();
            assert_eq!(in_month.len() as u32, last_of_month(anchor).day());
            for (i, cell) in in_month.iter().enumerate() {
                assert_eq!(cell.date.day(), i as u32 + 1);
            }

            anchor = anchor.checked_add_months(Months::new(1)).unwrap();
        }
    }

    #[test]
    fn test_month_cells_today_flag() {
        let cells: Vec<_> = month_cells(date(2025, 6, 18), date(2025, 6, 20)).collect();
        let today: Vec<_> = cells.iter().filter(|c| c.is_today).collect();

        assert_eq!(today.len(), 1);
        assert_eq!(today[0].date, date(2025, 6, 20));
    }

    #[test]
    fn test_month_cells_today_outside_grid() {
        let cells: Vec<_> = month_cells(date(2025, 6, 18), date(2030, 1, 1)).collect();
        assert!(cells.iter().all(|c| !c.is_today));
    }

    #[test]
    fn test_month_weeks_rows() {
        let weeks = month_weeks(date(2025, 6, 18), date(2025, 6, 18));
        assert_eq!(weeks.len(), 6);
        assert!(weeks.iter().all(|w| w.len() == 7));
        assert!(weeks.iter().all(|w| w[0].date.weekday() == Weekday::Mon));
    }

    #[test]
    fn test_enumeration_is_repeatable() {
        let anchor = date(2025, 6, 18);
        for granularity in [Granularity::Day, Granularity::Week, Granularity::Month] {
            let dates = visible_dates(anchor, granularity);
            let first: Vec<_> = dates.clone().collect();
            let second: Vec<_> = dates.collect();
            assert_eq!(first, second);
            assert_eq!(first, visible_dates(anchor, granularity).collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_exact_size() {
        assert_eq!(visible_dates(date(2025, 6, 18), Granularity::Week).size_hint(), (7, Some(7)));
        assert_eq!(
            visible_dates(date(2025, 6, 18), Granularity::Week).span(),
            Some((date(2025, 6, 15), date(2025, 6, 21)))
        );
    }

    #[test]
    fn test_end_of_representable_range_stops() {
        let dates: Vec<_> = visible_dates(NaiveDate::MAX, Granularity::Month).collect();
        assert_eq!(dates.last(), Some(&NaiveDate::MAX));
    }

    #[test]
    fn test_headers() {
        assert_eq!(week_strip_header()[0], Weekday::Sun);
        assert_eq!(week_strip_header()[6], Weekday::Sat);
        assert_eq!(month_grid_header()[0], Weekday::Mon);
        assert_eq!(month_grid_header()[6], Weekday::Sun);

        for header in [week_strip_header(), month_grid_header()] {
            for pair in header.windows(2) {
                assert_eq!(pair[0].succ(), pair[1]);
            }
        }
    }

    #[test]
    fn test_granularity_parse() {
        assert_eq!("Week".parse::<Granularity>().unwrap(), Granularity::Week);
        assert_eq!(Granularity::Month.to_string(), "month");
        assert!("year".parse::<Granularity>().is_err());
    }

    #[test]
    fn test_granularity_deserialize_matches_parse() {
        #[derive(Deserialize)]
        struct View {
            view: Granularity,
        }

        let view: View = toml::from_str("view = \"Month\"").unwrap();
        assert_eq!(view.view, Granularity::Month);
        let view: View = toml::from_str("view = \"week\"").unwrap();
        assert_eq!(view.view, Granularity::Week);
        assert!(toml::from_str::<View>("view = \"year\"").is_err());
    }
}
