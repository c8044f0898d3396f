//! The hours evaluator.
//!
//! One synchronous pass over the active sections computes the open/closed
//! state for "now", the next opening moment within the coming week, the
//! flattened weekly schedule, and the optional grouped view. The running
//! next-opening candidate is threaded through the iteration as a value and
//! replaced wholesale, never mutated in place.

use std::collections::BTreeMap;

use crate::config::{HoursSpec, ScheduleConfig, TimeSlot};
use crate::season::active_sections;
use oh_core::errors::Result;
use oh_time::{DateTime, HolidayCalendar, TimeOfDay, Weekday};

/// Evaluation result handed to the host renderer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Whether the venue is open at the queried instant.
    pub is_open: bool,
    /// The currently open day; present iff [`Evaluation::is_open`].
    pub opens_today: Option<OpensToday>,
    /// The earliest upcoming opening within the next week, if any.
    pub opens_next: Option<NextOpening>,
    /// Flattened weekly schedule across all active sections, later
    /// sections overwriting earlier ones per weekday.
    pub opening_hours: BTreeMap<Weekday, HoursSpec>,
    /// Grouped view with labels in first-appearance order. Stays empty
    /// unless grouping is enabled in the configuration.
    pub grouped: Vec<DayGroup>,
}

/// The currently open day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpensToday {
    /// Today's weekday.
    pub day: Weekday,
    /// When the current slot closes.
    pub closes: TimeOfDay,
}

/// The next opening moment found by the forward search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextOpening {
    /// Days from today: 0 (later today) to 6.
    pub days_ahead: u8,
    /// Weekday of the opening.
    pub day: Weekday,
    /// The full hours of that day, for display.
    pub hours: HoursSpec,
    /// The specific slot that opens.
    pub slot: TimeSlot,
    /// `true` iff the opening is later on the query day.
    pub opens_later_today: bool,
}

/// Weekdays sharing a group label, with their slot lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayGroup {
    /// The group label from the configuration.
    pub label: String,
    /// Member days Monday..Sunday, each with its slots in declaration
    /// order.
    pub days: BTreeMap<Weekday, Vec<TimeSlot>>,
}

/// Evaluate the schedule at `now`.
///
/// Pure: no I/O, no retained state; identical inputs produce identical
/// results. A configuration with no active section yields a default result
/// (`is_open == false`, empty maps), not an error.
///
/// Holidays suppress the open-now check for the query date itself; the
/// forward search does not route around future holiday dates.
pub fn evaluate(
    config: &ScheduleConfig,
    now: DateTime,
    calendar: &dyn HolidayCalendar,
) -> Result<Evaluation> {
    let today = now.date();
    let holiday_today = calendar.is_holiday(today);
    let active = active_sections(&config.sections, now)?;

    let mut result = Evaluation::default();
    for section in active {
        for (&day, hours) in &section.times {
            let days_ahead = today.weekday().days_until(day);

            result.opening_hours.insert(day, hours.clone());
            if config.grouped_days {
                if let Some(label) = hours.group() {
                    group_entry(&mut result.grouped, label).insert(day, hours.slots());
                }
            }

            let open_slot = if days_ahead == 0 && !holiday_today {
                current_slot(hours, now.time())
            } else {
                None
            };
            if let Some(slot) = open_slot {
                result.is_open = true;
                result.opens_today = Some(OpensToday {
                    day,
                    closes: slot.close,
                });
                // an open day is not its own next-opening candidate
                continue;
            }
            if result.opens_today.map(|o| o.day) == Some(day) {
                // day already consumed as currently open by an earlier section
                continue;
            }

            if let Some(candidate) = next_candidate(day, days_ahead, hours, now.time()) {
                if replaces(result.opens_next.as_ref(), &candidate) {
                    result.opens_next = Some(candidate);
                }
            }
        }
    }
    Ok(result)
}

/// The slot containing `time`, if any.
///
/// A single interval is inclusive on both ends; split-shift slots are
/// half-open so back-to-back slots never both claim the shared minute.
fn current_slot(hours: &HoursSpec, time: TimeOfDay) -> Option<TimeSlot> {
    match hours {
        HoursSpec::Single { open, close, .. } => (*open <= time && time <= *close).then(|| {
            TimeSlot {
                open: *open,
                close: *close,
            }
        }),
        HoursSpec::Split { slots, .. } => slots
            .iter()
            .copied()
            .find(|s| s.open <= time && time < s.close),
    }
}

/// Build the next-opening candidate a day contributes, if any.
///
/// Today only qualifies through a slot that still opens after `time` — a
/// fully elapsed day yields no candidate for itself. A future day projects
/// `time` onto its slots and falls back to its first-declared slot.
fn next_candidate(
    day: Weekday,
    days_ahead: u8,
    hours: &HoursSpec,
    time: TimeOfDay,
) -> Option<NextOpening> {
    let slots = hours.slots();
    let slot = if days_ahead == 0 {
        slots.iter().copied().find(|s| s.open > time)?
    } else {
        slots
            .iter()
            .copied()
            .find(|s| s.open <= time && time < s.close)
            .or_else(|| slots.first().copied())?
    };
    Some(NextOpening {
        days_ahead,
        day,
        hours: hours.clone(),
        slot,
        opens_later_today: days_ahead == 0,
    })
}

/// Candidate replacement rule: the first candidate fills the empty slot, a
/// strictly closer day wins, and a later-today candidate wins every tie.
fn replaces(best: Option<&NextOpening>, candidate: &NextOpening) -> bool {
    match best {
        None => true,
        Some(best) => candidate.days_ahead < best.days_ahead || candidate.days_ahead == 0,
    }
}

/// The day map of the group labelled `label`, creating the group at the
/// back on first use so labels keep their first-appearance order.
fn group_entry<'a>(
    groups: &'a mut Vec<DayGroup>,
    label: &str,
) -> &'a mut BTreeMap<Weekday, Vec<TimeSlot>> {
    match groups.iter().position(|g| g.label == label) {
        Some(i) => &mut groups[i].days,
        None => {
            groups.push(DayGroup {
                label: label.to_string(),
                days: BTreeMap::new(),
            });
            let last = groups.len() - 1;
            &mut groups[last].days
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    fn slot(open: &str, close: &str) -> TimeSlot {
        TimeSlot {
            open: t(open),
            close: t(close),
        }
    }

    fn split(slots: &[(&str, &str)]) -> HoursSpec {
        HoursSpec::Split {
            slots: slots.iter().map(|(o, c)| slot(o, c)).collect(),
            group: None,
        }
    }

    fn single(open: &str, close: &str) -> HoursSpec {
        HoursSpec::Single {
            open: t(open),
            close: t(close),
            group: None,
        }
    }

    #[test]
    fn single_interval_is_inclusive() {
        let hours = single("09:00", "17:00");
        assert!(current_slot(&hours, t("09:00")).is_some());
        assert!(current_slot(&hours, t("12:30")).is_some());
        assert!(current_slot(&hours, t("17:00")).is_some());
        assert!(current_slot(&hours, t("08:59")).is_none());
        assert!(current_slot(&hours, t("17:01")).is_none());
    }

    #[test]
    fn split_slots_are_half_open() {
        let hours = split(&[("09:00", "12:00"), ("14:00", "18:00")]);
        assert!(current_slot(&hours, t("09:00")).is_some());
        assert!(current_slot(&hours, t("12:00")).is_none());
        assert!(current_slot(&hours, t("13:00")).is_none());
        assert_eq!(
            current_slot(&hours, t("14:00")).map(|s| s.close),
            Some(t("18:00"))
        );
    }

    #[test]
    fn elapsed_today_yields_no_candidate() {
        let hours = single("09:00", "17:00");
        assert!(next_candidate(Weekday::Monday, 0, &hours, t("18:00")).is_none());
        let c = next_candidate(Weekday::Monday, 0, &hours, t("08:00")).unwrap();
        assert!(c.opens_later_today);
        assert_eq!(c.slot.open, t("09:00"));
    }

    #[test]
    fn future_day_falls_back_to_first_slot() {
        let hours = split(&[("09:00", "12:00"), ("14:00", "18:00")]);
        // 13:00 projected ahead matches no slot → earliest declared slot
        let c = next_candidate(Weekday::Friday, 3, &hours, t("13:00")).unwrap();
        assert_eq!(c.slot.open, t("09:00"));
        assert!(!c.opens_later_today);
        // 15:00 projected ahead falls inside the second slot
        let c = next_candidate(Weekday::Friday, 3, &hours, t("15:00")).unwrap();
        assert_eq!(c.slot.open, t("14:00"));
    }

    #[test]
    fn later_today_wins_ties() {
        let tomorrow = next_candidate(Weekday::Tuesday, 1, &single("09:00", "17:00"), t("13:00"))
            .unwrap();
        let today =
            next_candidate(Weekday::Monday, 0, &split(&[("14:00", "18:00")]), t("13:00")).unwrap();
        assert!(replaces(None, &tomorrow));
        assert!(replaces(Some(&tomorrow), &today));
        assert!(!replaces(Some(&today), &tomorrow));
    }
}
