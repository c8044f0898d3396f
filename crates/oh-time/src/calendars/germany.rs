//! Germany holiday calendar.

use crate::date::Date;
use crate::holiday::{easter_sunday, Holiday, HolidayCalendar};

/// Nationwide German public holidays plus the customary closing days,
/// with their German-language identifier names.
///
/// Fixed dates:
/// * Neujahr (Jan 1)
/// * Tag der Arbeit (May 1)
/// * Tag der Deutschen Einheit (Oct 3)
/// * Heiligabend (Dec 24)
/// * Erster Weihnachtstag (Dec 25)
/// * Zweiter Weihnachtstag (Dec 26)
/// * Silvester (Dec 31)
///
/// Easter-relative:
/// * Karfreitag (−2)
/// * Ostermontag (+1)
/// * Christi Himmelfahrt (+39)
/// * Pfingstmontag (+50)
#[derive(Debug, Clone, Copy, Default)]
pub struct Germany;

impl HolidayCalendar for Germany {
    fn name(&self) -> &str {
        "Germany"
    }

    fn holiday(&self, date: Date) -> Option<Holiday> {
        let m = date.month();
        let d = date.day_of_month();

        // Same precedence as the Austrian set: January first, movable
        // feasts next, remaining fixed dates last.
        if (m, d) == (1, 1) {
            return Some(Holiday::new(date, "Neujahr"));
        }

        let movable = match date - easter_sunday(date.year()) {
            -2 => Some("Karfreitag"),
            1 => Some("Ostermontag"),
            39 => Some("Christi Himmelfahrt"),
            50 => Some("Pfingstmontag"),
            _ => None,
        };
        if let Some(name) = movable {
            return Some(Holiday::new(date, name));
        }

        let fixed = match (m, d) {
            (5, 1) => "Tag der Arbeit",
            (10, 3) => "Tag der Deutschen Einheit",
            (12, 24) => "Heiligabend",
            (12, 25) => "Erster Weihnachtstag",
            (12, 26) => "Zweiter Weihnachtstag",
            (12, 31) => "Silvester",
            _ => return None,
        };
        Some(Holiday::new(date, fixed))
    }
}
