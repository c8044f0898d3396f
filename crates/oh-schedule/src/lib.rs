//! # oh-schedule
//!
//! The opening-hours evaluation engine: configuration model, seasonal
//! section selection, and the hours evaluator.
//!
//! Evaluation is a pure function of `(configuration, now, calendar)`; the
//! engine keeps no state between calls, performs no I/O, and hands a plain
//! result structure to the host renderer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Typed schedule configuration.
pub mod config;

/// The hours evaluator.
pub mod evaluator;

/// Display helpers shared with the host templates.
pub mod format;

/// Seasonal section selection.
pub mod season;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::{HoursSpec, ScheduleConfig, SeasonSection, Templates, TimeSlot};
pub use evaluator::{evaluate, DayGroup, Evaluation, NextOpening, OpensToday};
pub use format::format_time;
pub use season::active_sections;
