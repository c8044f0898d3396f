//! # openinghours
//!
//! Opening-hours evaluation engine: seasonal schedules, split-shift days,
//! and holiday calendars.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `oh-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! openinghours = "0.1"
//! ```
//!
//! ```rust
//! use openinghours::time::calendars::Austria;
//! use openinghours::time::{Date, HolidayCalendar};
//!
//! let calendar = Austria;
//! let christmas = Date::from_ymd(2024, 12, 25).unwrap();
//! assert_eq!(calendar.holiday(christmas).map(|h| h.name), Some("Christtag"));
//! ```
//!
//! Evaluating a schedule:
//!
//! ```rust
//! use openinghours::schedule::{evaluate, ScheduleConfig};
//! use openinghours::time::calendars::Austria;
//! use openinghours::time::{Date, DateTime, TimeOfDay};
//!
//! let config: ScheduleConfig = serde_json::from_str(
//!     r#"{
//!         "opening-hours": {
//!             "all-year": {
//!                 "valid-from": "01-01", "valid-to": "12-31",
//!                 "times": {
//!                     "Monday": { "open": "09:00", "close": "17:00" }
//!                 }
//!             }
//!         }
//!     }"#,
//! ).unwrap();
//! config.validate().unwrap();
//!
//! // Monday, June 3rd 2024, at noon
//! let now = DateTime::new(
//!     Date::from_ymd(2024, 6, 3).unwrap(),
//!     TimeOfDay::new(12, 0).unwrap(),
//! );
//! let result = evaluate(&config, now, &Austria).unwrap();
//! assert!(result.is_open);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and shared macros.
pub use oh_core as core;

/// Date, time-of-day, weekday, and holiday-calendar types.
pub use oh_time as time;

/// Configuration model, season selection, and the hours evaluator.
pub use oh_schedule as schedule;
