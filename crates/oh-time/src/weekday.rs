//! `Weekday` — day-of-week enum.

use oh_core::errors::Error;

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7); the engine evaluates
/// weeks Monday-first, so the derived order is also the display order of a
/// weekly schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Weekday::Monday),
            2 => Some(Weekday::Tuesday),
            3 => Some(Weekday::Wednesday),
            4 => Some(Weekday::Thursday),
            5 => Some(Weekday::Friday),
            6 => Some(Weekday::Saturday),
            7 => Some(Weekday::Sunday),
            _ => None,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Forward distance from `self` to `other` within a Monday-start week:
    /// 0 for the same day, otherwise 1–6. A target earlier in the week wraps
    /// to its next occurrence.
    pub fn days_until(&self, other: Weekday) -> u8 {
        (other.ordinal() + 7 - self.ordinal()) % 7
    }

    /// Return the English day name (`"Monday"`, …), as used for
    /// configuration keys.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }
}

impl std::str::FromStr for Weekday {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "Monday" => Ok(Weekday::Monday),
            "Tuesday" => Ok(Weekday::Tuesday),
            "Wednesday" => Ok(Weekday::Wednesday),
            "Thursday" => Ok(Weekday::Thursday),
            "Friday" => Ok(Weekday::Friday),
            "Saturday" => Ok(Weekday::Saturday),
            "Sunday" => Ok(Weekday::Sunday),
            _ => Err(Error::Config(format!("unknown weekday name `{s}`"))),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip() {
        for n in 1..=7u8 {
            let w = Weekday::from_ordinal(n).unwrap();
            assert_eq!(w.ordinal(), n);
            assert_eq!(w.name().parse::<Weekday>().unwrap(), w);
        }
        assert!(Weekday::from_ordinal(0).is_none());
        assert!(Weekday::from_ordinal(8).is_none());
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert!("monday".parse::<Weekday>().is_err());
        assert!("Mon".parse::<Weekday>().is_err());
    }

    #[test]
    fn days_until_wraps_forward() {
        assert_eq!(Weekday::Wednesday.days_until(Weekday::Wednesday), 0);
        assert_eq!(Weekday::Wednesday.days_until(Weekday::Friday), 2);
        assert_eq!(Weekday::Wednesday.days_until(Weekday::Monday), 5);
        assert_eq!(Weekday::Sunday.days_until(Weekday::Saturday), 6);
        assert_eq!(Weekday::Monday.days_until(Weekday::Sunday), 6);
    }
}
