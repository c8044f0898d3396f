//! `MonthDay` — a recurring calendar point (month and day, no year).
//!
//! Seasonal validity windows are configured as `"MM-DD"` pairs that recur
//! every year; [`MonthDay::resolve`] anchors one to a concrete year.

use crate::date::Date;
use crate::month::Month;
use oh_core::errors::{Error, Result};

/// A month-day pair without a year, parsed from `"MM-DD"`.
///
/// February 29 is admissible; resolving it against a non-leap year fails at
/// [`MonthDay::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "String")
)]
pub struct MonthDay {
    month: Month,
    day: u8,
}

impl MonthDay {
    /// Create a month-day pair.
    ///
    /// The day is checked against the month's greatest possible length.
    pub fn new(month: Month, day: u8) -> Result<Self> {
        if day == 0 || day > month.max_length() {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {}] for {month}",
                month.max_length()
            )));
        }
        Ok(Self { month, day })
    }

    /// Return the month.
    pub fn month(&self) -> Month {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Anchor this recurring point to a concrete year.
    pub fn resolve(&self, year: u16) -> Result<Date> {
        Date::from_ymd(year, self.month.number(), self.day)
    }
}

impl std::str::FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (m, d) = s
            .split_once('-')
            .ok_or_else(|| Error::Date(format!("expected MM-DD, got `{s}`")))?;
        let month = m
            .parse::<u8>()
            .ok()
            .and_then(Month::from_number)
            .ok_or_else(|| Error::Date(format!("invalid month in `{s}`")))?;
        let day = d
            .parse::<u8>()
            .map_err(|_| Error::Date(format!("invalid day in `{s}`")))?;
        MonthDay::new(month, day)
    }
}

impl TryFrom<String> for MonthDay {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Error> {
        s.parse()
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}-{:02}", self.month.number(), self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        let md: MonthDay = "10-01".parse().unwrap();
        assert_eq!(md.month(), Month::October);
        assert_eq!(md.day(), 1);
        assert_eq!(md.to_string(), "10-01");
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("".parse::<MonthDay>().is_err());
        assert!("13-01".parse::<MonthDay>().is_err());
        assert!("04-31".parse::<MonthDay>().is_err());
        assert!("0401".parse::<MonthDay>().is_err());
        assert!("04-xx".parse::<MonthDay>().is_err());
    }

    #[test]
    fn ordering_is_month_then_day() {
        let a: MonthDay = "04-01".parse().unwrap();
        let b: MonthDay = "10-01".parse().unwrap();
        let c: MonthDay = "10-15".parse().unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn resolve_leap_day() {
        let md: MonthDay = "02-29".parse().unwrap();
        assert!(md.resolve(2024).is_ok());
        assert!(md.resolve(2023).is_err());
    }
}
