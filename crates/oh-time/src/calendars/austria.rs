//! Austria holiday calendar.

use crate::date::Date;
use crate::holiday::{easter_sunday, Holiday, HolidayCalendar};

/// Austrian public holidays, with their German-language identifier names.
///
/// Fixed dates:
/// * Neujahr (Jan 1)
/// * Heilige Drei Könige (Jan 6)
/// * Erster Mai (May 1)
/// * Mariä Himmelfahrt (Aug 15)
/// * Allerheiligen (Nov 1)
/// * Heiliger Abend (Dec 24)
/// * Christtag (Dec 25)
/// * Stefanitag (Dec 26)
///
/// Easter-relative:
/// * Ostersonntag (Easter Sunday)
/// * Ostermontag (+1)
/// * Christi Himmelfahrt (+39)
/// * Pfingstsonntag (+49)
/// * Pfingstmontag (+50)
/// * Fronleichnam (+60)
#[derive(Debug, Clone, Copy, Default)]
pub struct Austria;

impl HolidayCalendar for Austria {
    fn name(&self) -> &str {
        "Austria"
    }

    fn holiday(&self, date: Date) -> Option<Holiday> {
        let m = date.month();
        let d = date.day_of_month();

        // The January feasts are matched before the movable ones, the other
        // fixed dates after them: Ascension can land on May 1 (e.g. 2008)
        // and then wins over Erster Mai.
        match (m, d) {
            (1, 1) => return Some(Holiday::new(date, "Neujahr")),
            (1, 6) => return Some(Holiday::new(date, "Heilige Drei Könige")),
            _ => {}
        }

        let movable = match date - easter_sunday(date.year()) {
            0 => Some("Ostersonntag"),
            1 => Some("Ostermontag"),
            39 => Some("Christi Himmelfahrt"),
            49 => Some("Pfingstsonntag"),
            50 => Some("Pfingstmontag"),
            60 => Some("Fronleichnam"),
            _ => None,
        };
        if let Some(name) = movable {
            return Some(Holiday::new(date, name));
        }

        let fixed = match (m, d) {
            (5, 1) => "Erster Mai",
            (8, 15) => "Mariä Himmelfahrt",
            (11, 1) => "Allerheiligen",
            (12, 24) => "Heiliger Abend",
            (12, 25) => "Christtag",
            (12, 26) => "Stefanitag",
            _ => return None,
        };
        Some(Holiday::new(date, fixed))
    }
}
