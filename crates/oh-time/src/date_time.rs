//! `DateTime` — a calendar date with a wall-clock time.

use crate::date::Date;
use crate::time_of_day::TimeOfDay;

/// A date paired with a time of day, ordered date-first.
///
/// This is the "now" handed to the evaluator — one caller-supplied local
/// clock reading, no timezone machinery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    time: TimeOfDay,
}

impl DateTime {
    /// Combine a date and a time of day.
    pub fn new(date: Date, time: TimeOfDay) -> Self {
        Self { date, time }
    }

    /// The given date at 00:00.
    pub fn at_midnight(date: Date) -> Self {
        Self {
            date,
            time: TimeOfDay::MIDNIGHT,
        }
    }

    /// Return the date part.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Return the time-of-day part.
    pub fn time(&self) -> TimeOfDay {
        self.time
    }
}

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
