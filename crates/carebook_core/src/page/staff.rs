//! Staff directory page.

use crate::model::staff::{Staff, StaffRole, StaffStatus};
use crate::page::selection::{Selection, SelectionEvent};
use crate::page::{Intent, Reducer};
use crate::search::filter::{filter_slice, Filtered, Predicate, StaffFilter};
use crate::search::query::{Choice, TextQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StaffEvent {
    Search(String),
    FilterRole(Choice<StaffRole>),
    FilterStatus(Choice<StaffStatus>),
    ClearFilters,
    Open(Staff),
    Close,
    Contact(Staff),
}

/// Header counters for the staff directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StaffStats {
    pub total: usize,
    pub active: usize,
    pub on_leave: usize,
}

impl StaffStats {
    pub fn collect(staff: &[Staff]) -> Self {
        Self {
            total: staff.len(),
            active: count_status(staff, StaffStatus::Active),
            on_leave: count_status(staff, StaffStatus::OnLeave),
        }
    }
}

fn count_status(staff: &[Staff], status: StaffStatus) -> usize {
    staff.iter().filter(|member| member.status == status).count()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffDirectoryPage {
    filter: StaffFilter,
    selection: Selection<Staff>,
    last_intent: Option<Intent>,
}

impl StaffDirectoryPage {
    pub fn filter(&self) -> &StaffFilter {
        &self.filter
    }

    pub fn selection(&self) -> &Selection<Staff> {
        &self.selection
    }

    pub fn last_intent(&self) -> Option<&Intent> {
        self.last_intent.as_ref()
    }

    /// Whether the "Clear Filters" control should be offered.
    pub fn has_active_filters(&self) -> bool {
        self.filter.is_active()
    }

    pub fn view<'a>(&self, staff: &'a [Staff]) -> Filtered<'a, Staff> {
        filter_slice(staff, &self.filter)
    }

    /// Opens the staff member with `id`; unknown ids are ignored.
    pub fn open_by_id(self, staff: &[Staff], id: &str) -> Self {
        Self {
            selection: self.selection.select_by_id(staff, id),
            ..self
        }
    }
}

impl Reducer for StaffDirectoryPage {
    type Event = StaffEvent;

    fn reduce(self, event: Self::Event) -> Self {
        let filter = self.filter.clone();
        match event {
            StaffEvent::Search(text) => Self {
                filter: StaffFilter {
                    query: TextQuery::new(text),
                    ..filter
                },
                ..self
            },
            StaffEvent::FilterRole(role) => Self {
                filter: StaffFilter { role, ..filter },
                ..self
            },
            StaffEvent::FilterStatus(status) => Self {
                filter: StaffFilter { status, ..filter },
                ..self
            },
            StaffEvent::ClearFilters => Self {
                filter: StaffFilter::default(),
                ..self
            },
            StaffEvent::Open(staff) => Self {
                selection: self.selection.reduce(SelectionEvent::Select(staff)),
                ..self
            },
            StaffEvent::Close => Self {
                selection: self.selection.reduce(SelectionEvent::Close),
                ..self
            },
            StaffEvent::Contact(staff) => Self {
                last_intent: Some(Intent::ContactStaff(staff.id).record("staff")),
                ..self
            },
        }
    }
}
