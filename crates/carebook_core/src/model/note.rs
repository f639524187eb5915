//! Notes feed record.
//!
//! # Invariants
//! - A note refers to at most one subject; `NoteSubject` makes the
//!   client/staff/appointment association mutually exclusive by construction.

use crate::model::EntityId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Urgency attached to a note.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NotePriority {
    High,
    #[default]
    Medium,
    Low,
}

impl NotePriority {
    pub const ALL: [NotePriority; 3] = [Self::High, Self::Medium, Self::Low];

    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl Display for NotePriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Record a note is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum NoteSubject {
    Client(EntityId),
    Staff(EntityId),
    Appointment(EntityId),
}

/// Who wrote a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: EntityId,
    pub name: String,
}

impl Author {
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }

    /// Placeholder identity used for notes written in this session.
    pub fn current_user() -> Self {
        Self::new("current-user", "Current User")
    }
}

/// One entry of the notes feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: EntityId,
    pub content: String,
    pub priority: NotePriority,
    pub author: Author,
    pub timestamp: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<NoteSubject>,
}

impl Note {
    /// Creates an unattached note with a generated id.
    pub fn new(
        content: impl Into<String>,
        priority: NotePriority,
        author: Author,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            content: content.into(),
            priority,
            author,
            timestamp,
            subject: None,
        }
    }

    pub fn about(mut self, subject: NoteSubject) -> Self {
        self.subject = Some(subject);
        self
    }

    pub fn client_id(&self) -> Option<&str> {
        match &self.subject {
            Some(NoteSubject::Client(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn staff_id(&self) -> Option<&str> {
        match &self.subject {
            Some(NoteSubject::Staff(id)) => Some(id.as_str()),
            _ => None,
        }
    }

    pub fn appointment_id(&self) -> Option<&str> {
        match &self.subject {
            Some(NoteSubject::Appointment(id)) => Some(id.as_str()),
            _ => None,
        }
    }
}
