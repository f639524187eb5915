//! Calendar page: window navigation, appointment buckets and detail modal.

use crate::calendar::bucket::{appointments_in, bucket_by_day, count_in_window, DayBucket};
use crate::calendar::window::{CalendarWindow, Direction, WindowKind};
use crate::model::appointment::Appointment;
use crate::model::find_by_id;
use crate::page::selection::{Selection, SelectionEvent};
use crate::page::{Intent, Reducer};
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarEvent {
    SetView(WindowKind),
    Navigate(Direction),
    /// "Today" button; carries the caller's current date.
    Today(NaiveDate),
    OpenAppointment(Appointment),
    CloseAppointment,
    /// Edits the notes field of the open appointment.
    EditNotes(String),
    ConfirmAppointment,
    /// Invites the assigned staff member to the open appointment.
    SendInvite,
}

/// Everything the calendar needs to render one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView<'a> {
    pub period_label: String,
    /// Appointments anywhere in the visible window.
    pub total: usize,
    pub days: Vec<DayBucket<'a>>,
    /// Flat listing used by the month layout.
    pub listing: Vec<&'a Appointment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarPage {
    window: CalendarWindow,
    selection: Selection<Appointment>,
    notes_draft: String,
    last_intent: Option<Intent>,
}

impl CalendarPage {
    /// Week view anchored on `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            window: CalendarWindow::week(today),
            selection: Selection::default(),
            notes_draft: String::new(),
            last_intent: None,
        }
    }

    pub fn window(&self) -> &CalendarWindow {
        &self.window
    }

    pub fn selection(&self) -> &Selection<Appointment> {
        &self.selection
    }

    /// Notes text shown in the appointment modal.
    pub fn notes_draft(&self) -> &str {
        &self.notes_draft
    }

    pub fn last_intent(&self) -> Option<&Intent> {
        self.last_intent.as_ref()
    }

    /// Opens the appointment with `id`; unknown ids leave the page unchanged.
    pub fn open_by_id(self, appointments: &[Appointment], id: &str) -> Self {
        match find_by_id(appointments, id) {
            Some(appointment) => self.reduce(CalendarEvent::OpenAppointment(appointment.clone())),
            None => self,
        }
    }

    pub fn view<'a>(&self, appointments: &'a [Appointment], today: NaiveDate) -> CalendarView<'a> {
        CalendarView {
            period_label: self.window.period_label(),
            total: count_in_window(&self.window, appointments),
            days: bucket_by_day(&self.window, appointments, today),
            listing: appointments_in(&self.window, appointments),
        }
    }

    fn open_intent(&self, make: impl Fn(&Appointment) -> Intent) -> Option<Intent> {
        self.selection
            .detail()
            .map(|appointment| make(appointment).record("calendar"))
    }

    fn with_intent(self, intent: Option<Intent>) -> Self {
        match intent {
            Some(intent) => Self {
                last_intent: Some(intent),
                ..self
            },
            None => self,
        }
    }
}

impl Reducer for CalendarPage {
    type Event = CalendarEvent;

    fn reduce(self, event: Self::Event) -> Self {
        match event {
            CalendarEvent::SetView(kind) => Self {
                window: self.window.with_kind(kind),
                ..self
            },
            CalendarEvent::Navigate(direction) => Self {
                window: self.window.shift(direction),
                ..self
            },
            CalendarEvent::Today(today) => Self {
                window: self.window.reset_to(today),
                ..self
            },
            CalendarEvent::OpenAppointment(appointment) => {
                let notes_draft = appointment.notes.clone().unwrap_or_default();
                Self {
                    selection: self.selection.reduce(SelectionEvent::Select(appointment)),
                    notes_draft,
                    ..self
                }
            }
            CalendarEvent::CloseAppointment => Self {
                selection: self.selection.reduce(SelectionEvent::Close),
                ..self
            },
            CalendarEvent::EditNotes(text) => {
                if self.selection.detail().is_none() {
                    return self;
                }
                Self {
                    notes_draft: text,
                    ..self
                }
            }
            CalendarEvent::ConfirmAppointment => {
                let intent =
                    self.open_intent(|appointment| Intent::ConfirmAppointment(appointment.id.clone()));
                self.with_intent(intent)
            }
            CalendarEvent::SendInvite => {
                let intent = self.open_intent(|appointment| {
                    Intent::SendInvite(appointment.staff_id().to_string())
                });
                self.with_intent(intent)
            }
        }
    }
}
