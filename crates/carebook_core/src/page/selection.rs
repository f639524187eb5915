//! Single-entity selection with a detail-view visibility flag.
//!
//! # Invariants
//! - At most one entity is selected per page.
//! - Closing hides the detail view but keeps the stale selection.
//! - A new selection replaces the old one directly, visible or not.

use crate::model::Identified;
use crate::page::Reducer;

/// Observable phase of a selectable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionPhase<'a, T> {
    Idle,
    Viewing(&'a T),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionEvent<T> {
    /// An entity card was clicked.
    Select(T),
    /// The detail view was dismissed.
    Close,
}

/// Selected entity plus detail-view visibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection<T> {
    selected: Option<T>,
    visible: bool,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            selected: None,
            visible: false,
        }
    }
}

impl<T> Selection<T> {
    /// Last selected entity, even when the detail view is hidden.
    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Entity to render in the detail view; `None` renders nothing.
    pub fn detail(&self) -> Option<&T> {
        if self.visible {
            self.selected.as_ref()
        } else {
            None
        }
    }

    pub fn phase(&self) -> SelectionPhase<'_, T> {
        match self.detail() {
            Some(entity) => SelectionPhase::Viewing(entity),
            None => SelectionPhase::Idle,
        }
    }

    pub fn select(self, entity: T) -> Self {
        self.reduce(SelectionEvent::Select(entity))
    }

    pub fn close(self) -> Self {
        self.reduce(SelectionEvent::Close)
    }
}

impl<T: Identified + Clone> Selection<T> {
    /// Selects the entity with `id` from `items`; unknown ids are ignored.
    pub fn select_by_id(self, items: &[T], id: &str) -> Self {
        match items.iter().find(|item| item.id() == id) {
            Some(entity) => self.select(entity.clone()),
            None => self,
        }
    }
}

impl<T> Reducer for Selection<T> {
    type Event = SelectionEvent<T>;

    fn reduce(self, event: Self::Event) -> Self {
        match event {
            SelectionEvent::Select(entity) => Self {
                selected: Some(entity),
                visible: true,
            },
            SelectionEvent::Close => Self {
                visible: false,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Selection, SelectionPhase};

    #[test]
    fn starts_idle_with_nothing_to_render() {
        let selection = Selection::<String>::default();
        assert_eq!(selection.phase(), SelectionPhase::Idle);
        assert!(selection.detail().is_none());
    }

    #[test]
    fn reselect_after_close_shows_detail_again() {
        let selection = Selection::default()
            .select("a".to_string())
            .close()
            .select("a".to_string());
        assert_eq!(selection.detail().map(String::as_str), Some("a"));
    }
}
