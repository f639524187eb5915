//! Staff directory record.

use crate::model::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Professional role of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffRole {
    /// Personal support worker.
    #[serde(rename = "PSW")]
    Psw,
    /// Registered nurse.
    #[serde(rename = "RN")]
    Rn,
    /// Registered practical nurse.
    #[serde(rename = "RPN")]
    Rpn,
    Babysitter,
}

impl StaffRole {
    /// All roles in directory filter order.
    pub const ALL: [StaffRole; 4] = [Self::Psw, Self::Rn, Self::Rpn, Self::Babysitter];

    pub fn label(self) -> &'static str {
        match self {
            Self::Psw => "PSW",
            Self::Rn => "RN",
            Self::Rpn => "RPN",
            Self::Babysitter => "Babysitter",
        }
    }
}

impl Display for StaffRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Employment status of a staff member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StaffStatus {
    Active,
    Inactive,
    #[serde(rename = "On Leave")]
    OnLeave,
}

impl StaffStatus {
    /// All statuses in directory filter order.
    pub const ALL: [StaffStatus; 3] = [Self::Active, Self::Inactive, Self::OnLeave];

    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
            Self::OnLeave => "On Leave",
        }
    }
}

impl Display for StaffStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// One staff member as listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Staff {
    pub id: EntityId,
    pub name: String,
    pub role: StaffRole,
    pub phone: String,
    pub email: String,
    pub status: StaffStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_photo: Option<String>,
    /// Empty when the source record carries no specializations.
    #[serde(default)]
    pub specializations: Vec<String>,
}

impl Staff {
    /// Creates an active staff member with no specializations.
    pub fn new(
        id: impl Into<EntityId>,
        name: impl Into<String>,
        role: StaffRole,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
            phone: phone.into(),
            email: email.into(),
            status: StaffStatus::Active,
            profile_photo: None,
            specializations: Vec::new(),
        }
    }

    pub fn with_status(mut self, status: StaffStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_specializations<I, S>(mut self, specializations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specializations = specializations.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == StaffStatus::Active
    }
}
