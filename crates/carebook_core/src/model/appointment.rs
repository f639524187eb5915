//! Appointment record with embedded client/staff snapshots.
//!
//! # Invariants
//! - `client`/`staff` are denormalized copies taken when the appointment was
//!   booked; they are never reconciled against the directories.
//! - `date` carries a time component, but calendar logic only ever compares
//!   its calendar date.

use crate::model::client::{Client, ServiceType};
use crate::model::staff::Staff;
use crate::model::time_of_day::TimeOfDay;
use crate::model::EntityId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Booking lifecycle of an appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Display for AppointmentStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One booked visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: EntityId,
    pub client: Client,
    pub staff: Staff,
    /// Local date-time of the visit.
    pub date: NaiveDateTime,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub service_type: ServiceType,
    pub status: AppointmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Service line items, in booking order.
    #[serde(default)]
    pub services: Vec<String>,
}

impl Appointment {
    pub fn client_id(&self) -> &str {
        &self.client.id
    }

    pub fn staff_id(&self) -> &str {
        &self.staff.id
    }

    /// Calendar date of the visit, ignoring time of day.
    pub fn day(&self) -> NaiveDate {
        self.date.date()
    }

    /// Whether this appointment falls on `day`.
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.day() == day
    }
}
