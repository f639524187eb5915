//! Appointment bucketing by calendar day.

use crate::calendar::window::CalendarWindow;
use crate::model::appointment::Appointment;
use crate::search::filter::{filter_items, Predicate};
use chrono::NaiveDate;

/// Matches appointments whose calendar date equals the given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OnDay(pub NaiveDate);

impl Predicate<Appointment> for OnDay {
    fn matches(&self, item: &Appointment) -> bool {
        item.is_on(self.0)
    }
}

/// Matches appointments that fall anywhere inside a calendar window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InWindow(pub CalendarWindow);

impl Predicate<Appointment> for InWindow {
    fn matches(&self, item: &Appointment) -> bool {
        self.0.contains(item.day())
    }
}

/// Appointments scheduled on a single visible day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayBucket<'a> {
    pub date: NaiveDate,
    /// Set when `date` equals the caller-supplied current date.
    pub is_today: bool,
    /// Appointments in input order.
    pub appointments: Vec<&'a Appointment>,
}

/// Appointments on `day`, in input order.
pub fn appointments_on(day: NaiveDate, appointments: &[Appointment]) -> Vec<&Appointment> {
    filter_items(appointments, &OnDay(day))
}

/// Appointments visible anywhere in `window`, in input order.
pub fn appointments_in<'a>(
    window: &CalendarWindow,
    appointments: &'a [Appointment],
) -> Vec<&'a Appointment> {
    filter_items(appointments, &InWindow(*window))
}

/// Number of appointments visible in `window`.
pub fn count_in_window(window: &CalendarWindow, appointments: &[Appointment]) -> usize {
    let predicate = InWindow(*window);
    appointments
        .iter()
        .filter(|appointment| predicate.matches(appointment))
        .count()
}

/// One bucket per visible day, in date order.
pub fn bucket_by_day<'a>(
    window: &CalendarWindow,
    appointments: &'a [Appointment],
    today: NaiveDate,
) -> Vec<DayBucket<'a>> {
    window
        .days()
        .into_iter()
        .map(|date| DayBucket {
            date,
            is_today: date == today,
            appointments: appointments_on(date, appointments),
        })
        .collect()
}
