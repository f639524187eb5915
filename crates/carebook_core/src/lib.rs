//! Core domain logic for the carebook staffing console.
//! Every page reads its data and derives its state through this crate.

pub mod calendar;
pub mod format;
pub mod logging;
pub mod model;
pub mod page;
pub mod repo;
pub mod search;

pub use calendar::bucket::{
    appointments_in, appointments_on, bucket_by_day, count_in_window, DayBucket, InWindow, OnDay,
};
pub use calendar::window::{CalendarWindow, Direction, WindowKind};
pub use format::{format_date, initials, long_date, relative_time, AgeStyle, DateFormat};
pub use logging::{
    default_log_level, init_from_config, init_logging, logging_status, LogConfig, LogLevel,
};
pub use model::appointment::{Appointment, AppointmentStatus};
pub use model::client::{Client, EmergencyContact, ServiceType};
pub use model::conversation::{Conversation, ConversationKind, Message};
pub use model::note::{Author, Note, NotePriority, NoteSubject};
pub use model::staff::{Staff, StaffRole, StaffStatus};
pub use model::time_of_day::{TimeFormat, TimeOfDay, TimeOfDayParseError};
pub use model::{find_by_id, EntityId, Identified};
pub use page::calendar::{CalendarEvent, CalendarPage, CalendarView};
pub use page::clients::{service_filter_label, ClientDirectoryPage, ClientEvent, ClientStats};
pub use page::messages::{MessagesEvent, MessagesPage};
pub use page::notes::{NotesEvent, NotesPage};
pub use page::selection::{Selection, SelectionEvent, SelectionPhase};
pub use page::settings::{Settings, SettingsEvent, SettingsPage, SettingsSection};
pub use page::staff::{StaffDirectoryPage, StaffEvent, StaffStats};
pub use page::{replay, Intent, Reducer};
pub use repo::seed::{SeedData, SeedError, SeedResult};
pub use repo::DataSource;
pub use search::filter::{
    filter_items, filter_slice, ClientFilter, Filtered, NoteFilter, Predicate, StaffFilter,
    TextSearchable,
};
pub use search::query::{Choice, TextQuery};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
