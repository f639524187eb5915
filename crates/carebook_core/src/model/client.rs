//! Client directory record.

use crate::model::EntityId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Service line a client is enrolled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceType {
    /// Home care for seniors.
    VisitingAngels,
    /// Childcare.
    BabysittingAngels,
}

impl ServiceType {
    pub const ALL: [ServiceType; 2] = [Self::VisitingAngels, Self::BabysittingAngels];

    /// Wire/filter value, e.g. `visiting-angels`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::VisitingAngels => "visiting-angels",
            Self::BabysittingAngels => "babysitting-angels",
        }
    }

    /// Human-readable label shown on cards and filter chips.
    pub fn label(self) -> &'static str {
        match self {
            Self::VisitingAngels => "Visiting Angels",
            Self::BabysittingAngels => "Babysitting Angels",
        }
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Person to call when the client cannot be reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub name: String,
    pub phone: String,
    pub relationship: String,
}

/// One client household as listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub phone: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub address: String,
    /// Local wall-clock time of the most recent visit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_visit: Option<NaiveDateTime>,
    pub service_type: ServiceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emergency_contact: Option<EmergencyContact>,
}

impl Client {
    /// Creates a client with only the required fields set.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        phone: impl Into<String>,
        address: impl Into<String>,
        service_type: ServiceType,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            phone: phone.into(),
            email: None,
            address: address.into(),
            last_visit: None,
            service_type,
            notes: None,
            emergency_contact: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }
}
