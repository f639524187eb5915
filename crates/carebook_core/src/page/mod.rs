//! Page state containers expressed as pure reducers.
//!
//! # Responsibility
//! - Own each page's UI state (filters, selection, drafts) explicitly.
//! - Turn user-input events into the next state without touching I/O.
//!
//! # Invariants
//! - Every page state is owned by exactly one controller.
//! - Events apply in dispatch order; the last write to a slot wins.
//! - Side-effecting intents (contact, save, send) are logged and recorded,
//!   never delivered.

pub mod calendar;
pub mod clients;
pub mod messages;
pub mod notes;
pub mod selection;
pub mod settings;
pub mod staff;

use crate::model::EntityId;
use log::info;

/// State that advances by consuming one event at a time.
pub trait Reducer: Sized {
    type Event;

    /// Returns the state after applying `event`.
    fn reduce(self, event: Self::Event) -> Self;
}

/// Applies `events` to `state` in order.
pub fn replay<R, I>(state: R, events: I) -> R
where
    R: Reducer,
    I: IntoIterator<Item = R::Event>,
{
    events.into_iter().fold(state, R::reduce)
}

/// User action that the product would forward to a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ContactStaff(EntityId),
    ContactClient(EntityId),
    ScheduleVisit(EntityId),
    ConfirmAppointment(EntityId),
    /// Keyed on the invited staff member.
    SendInvite(EntityId),
    NoteAdded(EntityId),
    MessageSent { conversation: EntityId },
    SettingsSaved(settings::SettingsSection),
}

impl Intent {
    fn name(&self) -> &'static str {
        match self {
            Self::ContactStaff(_) => "contact_staff",
            Self::ContactClient(_) => "contact_client",
            Self::ScheduleVisit(_) => "schedule_visit",
            Self::ConfirmAppointment(_) => "confirm_appointment",
            Self::SendInvite(_) => "send_invite",
            Self::NoteAdded(_) => "note_added",
            Self::MessageSent { .. } => "message_sent",
            Self::SettingsSaved(_) => "settings_saved",
        }
    }

    fn target(&self) -> &str {
        match self {
            Self::ContactStaff(id)
            | Self::ContactClient(id)
            | Self::ScheduleVisit(id)
            | Self::ConfirmAppointment(id)
            | Self::SendInvite(id)
            | Self::NoteAdded(id) => id,
            Self::MessageSent { conversation } => conversation,
            Self::SettingsSaved(section) => section.as_str(),
        }
    }

    /// Emits a metadata-only log line for this intent.
    pub(crate) fn record(self, module: &str) -> Self {
        info!(
            "event={} module={} status=ok target={}",
            self.name(),
            module,
            self.target()
        );
        self
    }
}
