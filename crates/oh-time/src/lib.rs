//! # oh-time
//!
//! Date, time-of-day, weekday, and holiday-calendar types for the
//! opening-hours engine.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Concrete holiday calendars (country specific).
pub mod calendars;

/// `Date` type.
pub mod date;

/// `DateTime` — a date with a wall-clock time.
pub mod date_time;

/// `Holiday`, the `HolidayCalendar` trait, and the Easter computation.
pub mod holiday;

/// `Month` — month-of-year enum.
pub mod month;

/// `MonthDay` — a recurring month-day pair (no year).
pub mod month_day;

/// `TimeOfDay` — wall-clock `HH:MM` time.
pub mod time_of_day;

/// `Weekday` — day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::Date;
pub use date_time::DateTime;
pub use holiday::{easter_sunday, Holiday, HolidayCalendar};
pub use month::Month;
pub use month_day::MonthDay;
pub use time_of_day::TimeOfDay;
pub use weekday::Weekday;
