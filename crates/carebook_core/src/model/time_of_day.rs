//! Structured wall-clock time for appointment slots.
//!
//! # Responsibility
//! - Hold appointment start/end as a real time value.
//! - Format to the `"09:00 AM"` display shape only at the boundary.
//!
//! # Invariants
//! - `TimeOfDay::parse(t.to_string())` yields `t` for every value.
//! - Canonical 12-hour strings (zero-padded hour, uppercase meridiem)
//!   round-trip byte for byte.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

const TWELVE_HOUR_FORMAT: &str = "%I:%M %p";
const TWENTY_FOUR_HOUR_FORMAT: &str = "%H:%M";

/// Clock convention used when rendering a time for display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeFormat {
    /// `02:00 PM`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `14:00`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

/// Error returned when a display time string cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOfDayParseError {
    pub input: String,
}

impl Display for TimeOfDayParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "invalid time of day `{}`; expected `hh:mm AM|PM` or `HH:MM`",
            self.input
        )
    }
}

impl Error for TimeOfDayParseError {}

/// Minute-precision time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Builds a time from 24-hour components.
    ///
    /// Returns `None` for out-of-range hour/minute values.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Parses `"09:00 AM"` style strings, falling back to `"14:00"`.
    ///
    /// Leading/trailing whitespace is ignored and the meridiem is
    /// case-insensitive.
    pub fn parse(input: &str) -> Result<Self, TimeOfDayParseError> {
        let trimmed = input.trim();
        NaiveTime::parse_from_str(trimmed, TWELVE_HOUR_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(trimmed, TWENTY_FOUR_HOUR_FORMAT))
            .map(Self)
            .map_err(|_| TimeOfDayParseError {
                input: input.to_string(),
            })
    }

    pub fn hour(self) -> u32 {
        self.0.hour()
    }

    pub fn minute(self) -> u32 {
        self.0.minute()
    }

    pub fn as_naive(self) -> NaiveTime {
        self.0
    }

    /// Renders this time using the requested clock convention.
    pub fn display(self, format: TimeFormat) -> String {
        match format {
            TimeFormat::TwelveHour => self.0.format(TWELVE_HOUR_FORMAT).to_string(),
            TimeFormat::TwentyFourHour => self.0.format(TWENTY_FOUR_HOUR_FORMAT).to_string(),
        }
    }
}

impl Display for TimeOfDay {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.format(TWELVE_HOUR_FORMAT))
    }
}

impl FromStr for TimeOfDay {
    type Err = TimeOfDayParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
