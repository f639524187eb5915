//! Notes feed page: compose box, priority filter and the feed itself.
//!
//! # Invariants
//! - New notes are prepended; the feed is otherwise in source order.
//! - A blank draft never produces a note.
//! - Submitting resets the draft text and priority to their defaults.

use crate::model::note::{Author, Note, NotePriority};
use crate::page::{Intent, Reducer};
use crate::search::filter::{filter_items, NoteFilter};
use crate::search::query::Choice;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotesEvent {
    EditDraft(String),
    SetDraftPriority(NotePriority),
    FilterPriority(Choice<NotePriority>),
    /// "Add Note" pressed at the given local time.
    Submit { at: NaiveDateTime },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotesPage {
    notes: Vec<Note>,
    author: Author,
    draft: String,
    draft_priority: NotePriority,
    filter: NoteFilter,
    last_intent: Option<Intent>,
}

impl NotesPage {
    /// Feed seeded with `notes`; new notes are attributed to `author`.
    pub fn new(notes: Vec<Note>, author: Author) -> Self {
        Self {
            notes,
            author,
            draft: String::new(),
            draft_priority: NotePriority::default(),
            filter: NoteFilter::default(),
            last_intent: None,
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn draft_priority(&self) -> NotePriority {
        self.draft_priority
    }

    pub fn filter(&self) -> NoteFilter {
        self.filter
    }

    pub fn last_intent(&self) -> Option<&Intent> {
        self.last_intent.as_ref()
    }

    /// Whether "Add Note" is enabled.
    pub fn can_submit(&self) -> bool {
        !self.draft.trim().is_empty()
    }

    /// Feed entries passing the priority filter.
    pub fn visible(&self) -> Vec<&Note> {
        filter_items(&self.notes, &self.filter)
    }
}

impl Reducer for NotesPage {
    type Event = NotesEvent;

    fn reduce(mut self, event: Self::Event) -> Self {
        match event {
            NotesEvent::EditDraft(text) => self.draft = text,
            NotesEvent::SetDraftPriority(priority) => self.draft_priority = priority,
            NotesEvent::FilterPriority(priority) => self.filter = NoteFilter { priority },
            NotesEvent::Submit { at } => {
                if !self.can_submit() {
                    return self;
                }
                let content = std::mem::take(&mut self.draft);
                let note = Note::new(content, self.draft_priority, self.author.clone(), at);
                self.last_intent = Some(Intent::NoteAdded(note.id.clone()).record("notes"));
                self.notes.insert(0, note);
                self.draft_priority = NotePriority::default();
            }
        }
        self
    }
}
