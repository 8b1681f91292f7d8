//! Hourly slots of the calendar time axis.

use std::fmt;
use std::ops::Range;

use serde::{Serialize, Serializer};

use crate::constants::HOURS_PER_DAY;

/// One hour row on the time axis, labelled "HH:00".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeSlot(u8);

impl TimeSlot {
    pub fn hour(&self) -> u8 {
        self.0
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.0)
    }
}

impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Iterator over the 24 slots of a day, "00:00" through "23:00".
#[derive(Debug, Clone)]
pub struct TimeSlots {
    hours: Range<u8>,
}

impl Iterator for TimeSlots {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<TimeSlot> {
        self.hours.next().map(TimeSlot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.hours.size_hint()
    }
}

impl ExactSizeIterator for TimeSlots {}

pub fn time_slots() -> TimeSlots {
    TimeSlots {
        hours: 0..HOURS_PER_DAY,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_slots_cover_the_day() {
        let slots: Vec<TimeSlot> = time_slots().collect();

        assert_eq!(slots.len(), 24);
        assert_eq!(slots[0].label(), "00:00");
        assert_eq!(slots[9].label(), "09:00");
        assert_eq!(slots[23].label(), "23:00");
    }

    #[test]
    fn test_time_slots_strictly_ascending_without_gaps() {
        let hours: Vec<u8> = time_slots().map(|s| s.hour()).collect();

        for pair in hours.windows(2) {
            assert_eq!(pair[1], pair[0] + 1);
        }
        assert_eq!(time_slots().len(), 24);
    }
}
