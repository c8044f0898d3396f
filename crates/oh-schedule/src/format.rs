//! Display helpers shared with the host templates.

use oh_time::TimeOfDay;

/// Format a time for display: the bare hour (`"9"`) when `simple` is set,
/// the zero-padded `"09:00"` otherwise.
pub fn format_time(time: TimeOfDay, simple: bool) -> String {
    if simple {
        format!("{}", time.hour())
    } else {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn simple_drops_minutes_and_padding() {
        assert_eq!(format_time(t("09:00"), true), "9");
        assert_eq!(format_time(t("14:30"), true), "14");
        assert_eq!(format_time(t("00:15"), true), "0");
    }

    #[test]
    fn full_form_is_unchanged() {
        assert_eq!(format_time(t("09:00"), false), "09:00");
        assert_eq!(format_time(t("14:30"), false), "14:30");
    }
}
