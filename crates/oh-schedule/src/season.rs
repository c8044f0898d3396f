//! Seasonal section selection.
//!
//! Sections carry recurring month-day windows; selection resolves each
//! window to concrete dates around the evaluation day and keeps the
//! sections whose window strictly contains "now". A window whose end is
//! numerically before its start (e.g. October → April) wraps the turn of
//! the year, so the anchor year differs per bound.

use crate::config::SeasonSection;
use oh_core::errors::Result;
use oh_time::{Date, DateTime, MonthDay};

/// A section window resolved to concrete dates for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ResolvedSeasonWindow {
    from: Date,
    to: Date,
}

/// Anchor a recurring window to the year of `today`.
///
/// For a wrapping window the bound on the far side of the year boundary is
/// shifted: into last year when the window began before the turn, into next
/// year when it ends after it.
fn resolve_window(
    valid_from: MonthDay,
    valid_to: MonthDay,
    today: Date,
) -> Result<ResolvedSeasonWindow> {
    let month = today.month();
    let from_month = valid_from.month().number();
    let to_month = valid_to.month().number();

    let mut from_year = today.year();
    let mut to_year = today.year();
    if from_month > month && to_month > month && from_month > to_month {
        from_year -= 1;
    } else if from_month > month && to_month <= month && from_month > to_month {
        to_year += 1;
    } else if from_month <= month && to_month < month && from_month > to_month {
        to_year += 1;
    }

    Ok(ResolvedSeasonWindow {
        from: valid_from.resolve(from_year)?,
        to: valid_to.resolve(to_year)?,
    })
}

/// Select the sections whose resolved window strictly contains `now`
/// (both window bounds are taken at midnight and excluded).
///
/// Sections are returned in declaration order; overlap is allowed and
/// resolves last-write-wins in the flattened weekly schedule.
pub fn active_sections<'a>(
    sections: &'a [SeasonSection],
    now: DateTime,
) -> Result<Vec<&'a SeasonSection>> {
    let mut active = Vec::new();
    for section in sections {
        let window = resolve_window(section.valid_from, section.valid_to, now.date())?;
        let from = DateTime::at_midnight(window.from);
        let to = DateTime::at_midnight(window.to);
        if from < now && now < to {
            active.push(section);
        }
    }
    Ok(active)
}

#[cfg(test)]
mod tests {
    use super::*;
    use oh_time::TimeOfDay;

    fn md(s: &str) -> MonthDay {
        s.parse().unwrap()
    }

    fn noon(y: u16, m: u8, d: u8) -> DateTime {
        DateTime::new(
            Date::from_ymd(y, m, d).unwrap(),
            TimeOfDay::new(12, 0).unwrap(),
        )
    }

    fn window_contains(from: &str, to: &str, now: DateTime) -> bool {
        let w = resolve_window(md(from), md(to), now.date()).unwrap();
        DateTime::at_midnight(w.from) < now && now < DateTime::at_midnight(w.to)
    }

    #[test]
    fn plain_window() {
        assert!(window_contains("04-01", "10-01", noon(2024, 6, 15)));
        assert!(!window_contains("04-01", "10-01", noon(2024, 12, 15)));
        assert!(!window_contains("04-01", "10-01", noon(2024, 3, 31)));
    }

    #[test]
    fn wrapping_window_before_the_turn() {
        // Inside the October → April window, December side
        assert!(window_contains("10-01", "04-01", noon(2024, 12, 15)));
    }

    #[test]
    fn wrapping_window_after_the_turn() {
        // Inside the same window, January side: the start was last year
        assert!(window_contains("10-01", "04-01", noon(2024, 1, 15)));
    }

    #[test]
    fn wrapping_window_summer_gap() {
        assert!(!window_contains("10-01", "04-01", noon(2024, 6, 15)));
    }

    #[test]
    fn bounds_are_exclusive() {
        // By April 1st the resolved window has rolled over to next autumn
        assert!(!window_contains("10-01", "04-01", noon(2024, 4, 1)));
        // On the start date a daytime query is already inside
        assert!(window_contains("10-01", "04-01", noon(2024, 10, 1)));
    }
}
