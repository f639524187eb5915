//! Data source contracts and the seed-data implementation.
//!
//! # Responsibility
//! - Define the read-only collections every page is initialized from.
//! - Load the bundled seed document (or a caller-provided one).
//!
//! # Invariants
//! - Collections are handed out in source order; no source re-sorts.
//! - Lookups by id never fail; a miss is `None`.

pub mod seed;

use crate::model::appointment::Appointment;
use crate::model::client::Client;
use crate::model::conversation::{Conversation, Message};
use crate::model::find_by_id;
use crate::model::note::Note;
use crate::model::staff::Staff;

/// Read-only provider of the entity collections.
pub trait DataSource {
    fn staff(&self) -> &[Staff];
    fn clients(&self) -> &[Client];
    fn appointments(&self) -> &[Appointment];
    fn notes(&self) -> &[Note];
    fn conversations(&self) -> &[Conversation];
    /// Messages of the currently open thread.
    fn messages(&self) -> &[Message];

    fn find_staff(&self, id: &str) -> Option<&Staff> {
        find_by_id(self.staff(), id)
    }

    fn find_client(&self, id: &str) -> Option<&Client> {
        find_by_id(self.clients(), id)
    }

    fn find_appointment(&self, id: &str) -> Option<&Appointment> {
        find_by_id(self.appointments(), id)
    }
}
