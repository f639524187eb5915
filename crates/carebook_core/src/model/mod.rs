//! Domain model for the scheduling, directory and messaging views.
//!
//! # Responsibility
//! - Define the canonical records rendered by every page.
//! - Keep categorical fields as closed enums so filters stay exhaustive.
//!
//! # Invariants
//! - Records are immutable values once constructed; there is no delete path.
//! - Appointment snapshots of client/staff are not kept in sync with the
//!   directories.

pub mod appointment;
pub mod client;
pub mod conversation;
pub mod note;
pub mod staff;
pub mod time_of_day;

/// Identifier shared by every record in the seed data.
///
/// Seed ids are short opaque strings (`"1"`, `"admin"`); notes created at
/// runtime use UUID text.
pub type EntityId = String;

/// Records addressable by their `EntityId`.
pub trait Identified {
    fn id(&self) -> &str;
}

impl Identified for staff::Staff {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for client::Client {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for appointment::Appointment {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for note::Note {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Identified for conversation::Conversation {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Finds the record with `id`, if any.
pub fn find_by_id<'a, T: Identified>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.id() == id)
}
