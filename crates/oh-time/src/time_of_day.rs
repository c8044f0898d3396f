//! `TimeOfDay` — wall-clock time with minute precision.
//!
//! Opening and closing times are configured as `"HH:MM"` strings; this type
//! gives them explicit hour/minute fields and a total order, so slot
//! containment checks are plain comparisons instead of date arithmetic.

use oh_core::errors::{Error, Result};

/// A wall-clock time: hour 0–23, minute 0–59.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize),
    serde(try_from = "String")
)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Midnight (00:00), the start of the day.
    pub const MIDNIGHT: TimeOfDay = TimeOfDay { hour: 0, minute: 0 };

    /// Create a time of day.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 {
            return Err(Error::Time(format!("hour {hour} out of range [0, 23]")));
        }
        if minute > 59 {
            return Err(Error::Time(format!("minute {minute} out of range [0, 59]")));
        }
        Ok(Self { hour, minute })
    }

    /// Return the hour (0–23).
    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Return the minute (0–59).
    pub fn minute(&self) -> u8 {
        self.minute
    }

    /// Minutes elapsed since midnight.
    pub fn minutes_from_midnight(&self) -> u16 {
        self.hour as u16 * 60 + self.minute as u16
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let (h, m) = s
            .split_once(':')
            .ok_or_else(|| Error::Time(format!("expected HH:MM, got `{s}`")))?;
        let hour = h
            .parse::<u8>()
            .map_err(|_| Error::Time(format!("invalid hour in `{s}`")))?;
        let minute = m
            .parse::<u8>()
            .map_err(|_| Error::Time(format!("invalid minute in `{s}`")))?;
        TimeOfDay::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Error> {
        s.parse()
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}
