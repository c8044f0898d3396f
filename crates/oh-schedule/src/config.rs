//! Typed schedule configuration.
//!
//! This is the in-process mirror of the host's JSON/YAML configuration
//! block. All string parsing (`HH:MM` times, `MM-DD` window bounds, weekday
//! names) happens during deserialisation, so a malformed schedule fails
//! when it is loaded and the evaluator only ever sees typed data.

use std::collections::BTreeMap;
use std::fmt;

use oh_core::ensure;
use oh_core::errors::Result;
use oh_time::{MonthDay, TimeOfDay, Weekday};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// One open/close interval within a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct TimeSlot {
    /// Opening time.
    pub open: TimeOfDay,
    /// Closing time.
    pub close: TimeOfDay,
}

/// Opening hours for one weekday: a single interval or a list of
/// split-shift slots, optionally tagged with a display group label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HoursSpec {
    /// Split hours, e.g. separate lunch and evening service. Slots keep
    /// their declaration order; they are never merged or sorted.
    Split {
        /// The slots in declaration order.
        slots: Vec<TimeSlot>,
        /// Display group label, if the day takes part in grouping.
        #[serde(default)]
        group: Option<String>,
    },
    /// A single open/close interval.
    Single {
        /// Opening time.
        open: TimeOfDay,
        /// Closing time.
        close: TimeOfDay,
        /// Display group label, if the day takes part in grouping.
        #[serde(default)]
        group: Option<String>,
    },
}

impl HoursSpec {
    /// The display group label, if any.
    pub fn group(&self) -> Option<&str> {
        match self {
            HoursSpec::Split { group, .. } | HoursSpec::Single { group, .. } => group.as_deref(),
        }
    }

    /// The day's slots in declaration order; a single-interval day yields
    /// exactly one slot.
    pub fn slots(&self) -> Vec<TimeSlot> {
        match self {
            HoursSpec::Split { slots, .. } => slots.clone(),
            HoursSpec::Single { open, close, .. } => vec![TimeSlot {
                open: *open,
                close: *close,
            }],
        }
    }

    /// `true` for a split-shift day.
    pub fn is_split(&self) -> bool {
        matches!(self, HoursSpec::Split { .. })
    }
}

/// One named seasonal rule-set: a recurring date window plus per-weekday
/// hours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonSection {
    /// Section name — the key in the configuration object.
    pub name: String,
    /// Start of the recurring validity window.
    pub valid_from: MonthDay,
    /// End of the recurring validity window. A bound numerically before
    /// `valid_from` means the window wraps the turn of the year.
    pub valid_to: MonthDay,
    /// Opening hours per weekday; iterates Monday..Sunday.
    pub times: BTreeMap<Weekday, HoursSpec>,
}

/// Section payload as it appears in the configuration, without its name.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SectionBody {
    valid_from: MonthDay,
    valid_to: MonthDay,
    times: BTreeMap<Weekday, HoursSpec>,
}

/// Host template overrides, carried opaquely for the renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Templates {
    /// Detail template.
    #[serde(default)]
    pub default: Option<String>,
    /// Overview template.
    #[serde(default)]
    pub overview: Option<String>,
}

/// The full opening-hours configuration block handed over by the host.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleConfig {
    /// Seasonal sections in declaration order. Overlapping windows are
    /// allowed; the flattened weekly schedule resolves them last-write-wins
    /// per weekday.
    #[serde(rename = "opening-hours", deserialize_with = "sections_in_order")]
    pub sections: Vec<SeasonSection>,
    /// Whether the grouped-days output view is produced.
    #[serde(rename = "groupedDays", default)]
    pub grouped_days: bool,
    /// Renderer flag: collapse grouped day ranges ("Mon–Fri").
    #[serde(rename = "shortenGroupedDays", default)]
    pub shorten_grouped_days: bool,
    /// Renderer flag: display bare hours instead of `HH:MM`.
    #[serde(rename = "simpleTime", default)]
    pub simple_time: bool,
    /// Free-form message appended by the renderer.
    #[serde(rename = "additionalMessage", default)]
    pub additional_message: Option<String>,
    /// Template overrides.
    #[serde(default)]
    pub templates: Templates,
}

impl ScheduleConfig {
    /// Check the invariants the types cannot express. Call once at load
    /// time; the evaluator assumes a validated configuration.
    pub fn validate(&self) -> Result<()> {
        for section in &self.sections {
            for (day, hours) in &section.times {
                if let HoursSpec::Split { slots, .. } = hours {
                    ensure!(
                        !slots.is_empty(),
                        "section `{}`: {day} has an empty slot list",
                        section.name
                    );
                }
            }
        }
        Ok(())
    }
}

/// Deserialise the `"opening-hours"` object into a `Vec`, keeping the
/// declaration order of the sections (a plain map would lose it, and
/// last-write-wins depends on it).
fn sections_in_order<'de, D>(deserializer: D) -> Result<Vec<SeasonSection>, D::Error>
where
    D: Deserializer<'de>,
{
    struct SectionsVisitor;

    impl<'de> Visitor<'de> for SectionsVisitor {
        type Value = Vec<SeasonSection>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of section name to seasonal rule-set")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut sections = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, body)) = map.next_entry::<String, SectionBody>()? {
                sections.push(SeasonSection {
                    name,
                    valid_from: body.valid_from,
                    valid_to: body.valid_to,
                    times: body.times,
                });
            }
            Ok(sections)
        }
    }

    deserializer.deserialize_map(SectionsVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_and_split_days() {
        let config: ScheduleConfig = serde_json::from_str(
            r#"{
                "opening-hours": {
                    "all-year": {
                        "valid-from": "01-01",
                        "valid-to": "12-31",
                        "times": {
                            "Monday": { "open": "09:00", "close": "17:00" },
                            "Tuesday": {
                                "slots": [
                                    { "open": "09:00", "close": "12:00" },
                                    { "open": "14:00", "close": "18:00" }
                                ],
                                "group": "midweek"
                            }
                        }
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(config.sections.len(), 1);
        let times = &config.sections[0].times;
        assert!(!times[&Weekday::Monday].is_split());
        assert_eq!(times[&Weekday::Monday].group(), None);
        let tuesday = &times[&Weekday::Tuesday];
        assert!(tuesday.is_split());
        assert_eq!(tuesday.group(), Some("midweek"));
        assert_eq!(tuesday.slots().len(), 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn sections_keep_declaration_order() {
        let config: ScheduleConfig = serde_json::from_str(
            r#"{
                "opening-hours": {
                    "winter": {
                        "valid-from": "10-01", "valid-to": "04-01",
                        "times": { "Monday": { "open": "10:00", "close": "16:00" } }
                    },
                    "default": {
                        "valid-from": "01-01", "valid-to": "12-31",
                        "times": { "Monday": { "open": "09:00", "close": "17:00" } }
                    }
                }
            }"#,
        )
        .unwrap();

        // "winter" sorts after "default" — only declaration order gives this
        let names: Vec<&str> = config.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["winter", "default"]);
    }

    #[test]
    fn display_options_and_defaults() {
        let config: ScheduleConfig = serde_json::from_str(
            r#"{
                "opening-hours": {},
                "groupedDays": true,
                "simpleTime": true,
                "additionalMessage": "closed on trade fairs",
                "templates": { "overview": "overview.html" }
            }"#,
        )
        .unwrap();

        assert!(config.grouped_days);
        assert!(!config.shorten_grouped_days);
        assert!(config.simple_time);
        assert_eq!(
            config.additional_message.as_deref(),
            Some("closed on trade fairs")
        );
        assert_eq!(config.templates.overview.as_deref(), Some("overview.html"));
        assert_eq!(config.templates.default, None);
    }

    #[test]
    fn malformed_input_fails_at_load() {
        // bad weekday name
        assert!(serde_json::from_str::<ScheduleConfig>(
            r#"{"opening-hours": {"s": {"valid-from": "01-01", "valid-to": "12-31",
                "times": {"Mon": {"open": "09:00", "close": "17:00"}}}}}"#
        )
        .is_err());
        // unparseable time
        assert!(serde_json::from_str::<ScheduleConfig>(
            r#"{"opening-hours": {"s": {"valid-from": "01-01", "valid-to": "12-31",
                "times": {"Monday": {"open": "25:00", "close": "17:00"}}}}}"#
        )
        .is_err());
        // invalid month-day window bound
        assert!(serde_json::from_str::<ScheduleConfig>(
            r#"{"opening-hours": {"s": {"valid-from": "13-01", "valid-to": "12-31",
                "times": {}}}}"#
        )
        .is_err());
    }

    #[test]
    fn validate_rejects_empty_slot_list() {
        let config: ScheduleConfig = serde_json::from_str(
            r#"{"opening-hours": {"s": {"valid-from": "01-01", "valid-to": "12-31",
                "times": {"Friday": {"slots": []}}}}}"#,
        )
        .unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("empty slot list"), "{err}");
    }
}
