//! Display-boundary formatting shared by cards, feeds and headers.
//!
//! # Invariants
//! - Formatting never fails; every input maps to some display string.
//! - Relative ages never go negative: timestamps in the future read
//!   `Just now`.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// User-selectable short date layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "MM/dd/yyyy")]
    MonthDayYear,
    #[serde(rename = "dd/MM/yyyy")]
    DayMonthYear,
    #[serde(rename = "yyyy-MM-dd")]
    Iso,
}

impl DateFormat {
    fn pattern(self) -> &'static str {
        match self {
            Self::MonthDayYear => "%m/%d/%Y",
            Self::DayMonthYear => "%d/%m/%Y",
            Self::Iso => "%Y-%m-%d",
        }
    }
}

/// Where a relative timestamp is rendered; controls the long-age fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeStyle {
    /// Notes feed: days are shown up to a week, then `Jun 15, 2024`.
    Feed,
    /// Conversation list: anything older than a day shows `Jun 15`.
    Conversation,
}

/// Upper-cased first letters of each whitespace-separated word.
///
/// `"Dr. Sarah Wilson"` -> `"DSW"`.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Short relative age such as `5m ago` or `3h ago`.
pub fn relative_time(timestamp: NaiveDateTime, now: NaiveDateTime, style: AgeStyle) -> String {
    let minutes = now.signed_duration_since(timestamp).num_minutes();
    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return format!("{minutes}m ago");
    }

    let hours = minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }

    match style {
        AgeStyle::Conversation => timestamp.format("%b %-d").to_string(),
        AgeStyle::Feed => {
            let days = hours / 24;
            if days < 7 {
                format!("{days}d ago")
            } else {
                timestamp.format("%b %-d, %Y").to_string()
            }
        }
    }
}

/// Appointment detail date: `Saturday, June 15, 2024`.
pub fn long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Short numeric date in the user's preferred layout.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    date.format(format.pattern()).to_string()
}
