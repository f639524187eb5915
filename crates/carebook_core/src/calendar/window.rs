//! Week/month window arithmetic.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

const DAYS_PER_WEEK: u64 = 7;

/// Span of dates shown by the calendar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WindowKind {
    #[default]
    Week,
    Month,
}

/// Navigation direction for previous/next controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

/// Visible calendar range derived from an anchor date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CalendarWindow {
    anchor: NaiveDate,
    kind: WindowKind,
}

impl CalendarWindow {
    pub fn new(anchor: NaiveDate, kind: WindowKind) -> Self {
        Self { anchor, kind }
    }

    pub fn week(anchor: NaiveDate) -> Self {
        Self::new(anchor, WindowKind::Week)
    }

    pub fn month(anchor: NaiveDate) -> Self {
        Self::new(anchor, WindowKind::Month)
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn kind(&self) -> WindowKind {
        self.kind
    }

    /// Same anchor, different window kind.
    pub fn with_kind(self, kind: WindowKind) -> Self {
        Self { kind, ..self }
    }

    /// Moves the anchor to `today`, keeping the window kind.
    pub fn reset_to(self, today: NaiveDate) -> Self {
        Self {
            anchor: today,
            ..self
        }
    }

    /// Shifts the anchor by one window unit.
    ///
    /// Week mode moves by 7 days. Month mode moves by one calendar month and
    /// clamps the day to the target month's length (Jan 31 -> Feb 28/29).
    /// At the edges of the representable date range the anchor stays put.
    pub fn shift(self, direction: Direction) -> Self {
        let anchor = match (self.kind, direction) {
            (WindowKind::Week, Direction::Next) => {
                self.anchor.checked_add_days(Days::new(DAYS_PER_WEEK))
            }
            (WindowKind::Week, Direction::Previous) => {
                self.anchor.checked_sub_days(Days::new(DAYS_PER_WEEK))
            }
            (WindowKind::Month, Direction::Next) => self.anchor.checked_add_months(Months::new(1)),
            (WindowKind::Month, Direction::Previous) => {
                self.anchor.checked_sub_months(Months::new(1))
            }
        }
        .unwrap_or(self.anchor);
        Self { anchor, ..self }
    }

    pub fn next(self) -> Self {
        self.shift(Direction::Next)
    }

    pub fn previous(self) -> Self {
        self.shift(Direction::Previous)
    }

    /// First visible date: the Sunday on/before the anchor, or the 1st.
    pub fn start(&self) -> NaiveDate {
        match self.kind {
            WindowKind::Week => start_of_week(self.anchor),
            WindowKind::Month => start_of_month(self.anchor),
        }
    }

    /// Last visible date (inclusive).
    pub fn end(&self) -> NaiveDate {
        let start = self.start();
        let span = self.len() as u64;
        start
            .checked_add_days(Days::new(span.saturating_sub(1)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Number of days in the window.
    pub fn len(&self) -> usize {
        match self.kind {
            WindowKind::Week => DAYS_PER_WEEK as usize,
            WindowKind::Month => days_in_month(self.anchor),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every visible date in ascending order.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.start().iter_days().take(self.len()).collect()
    }

    /// Whether `date` is visible in this window.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self.kind {
            WindowKind::Week => self.start() <= date && date <= self.end(),
            WindowKind::Month => {
                date.year() == self.anchor.year() && date.month() == self.anchor.month()
            }
        }
    }

    /// Header label: `Jun 9 - Jun 15, 2024` or `June 2024`.
    pub fn period_label(&self) -> String {
        match self.kind {
            WindowKind::Week => format!(
                "{} - {}",
                self.start().format("%b %-d"),
                self.end().format("%b %-d, %Y")
            ),
            WindowKind::Month => self.anchor.format("%B %Y").to_string(),
        }
    }
}

/// Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    let offset = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(offset))
        .unwrap_or(NaiveDate::MIN)
}

/// First day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Number of days in `date`'s month.
pub fn days_in_month(date: NaiveDate) -> usize {
    let first = start_of_month(date);
    match first.checked_add_months(Months::new(1)) {
        Some(next_first) => next_first.signed_duration_since(first).num_days() as usize,
        // December of the last representable year.
        None => 31,
    }
}
