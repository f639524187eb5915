//! Client directory page.

use crate::model::client::{Client, ServiceType};
use crate::page::selection::{Selection, SelectionEvent};
use crate::page::{Intent, Reducer};
use crate::search::filter::{filter_slice, ClientFilter, Filtered, Predicate};
use crate::search::query::{Choice, TextQuery};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    Search(String),
    FilterService(Choice<ServiceType>),
    ClearFilters,
    Open(Client),
    Close,
    Contact(Client),
    Schedule(Client),
}

/// Header counters for the client directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClientStats {
    pub total: usize,
    pub visiting_angels: usize,
    pub babysitting_angels: usize,
}

impl ClientStats {
    pub fn collect(clients: &[Client]) -> Self {
        let count = |service: ServiceType| {
            clients
                .iter()
                .filter(|client| client.service_type == service)
                .count()
        };
        Self {
            total: clients.len(),
            visiting_angels: count(ServiceType::VisitingAngels),
            babysitting_angels: count(ServiceType::BabysittingAngels),
        }
    }
}

/// Label for a service filter chip; the sentinel reads "All Services".
pub fn service_filter_label(choice: Choice<ServiceType>) -> &'static str {
    match choice {
        Choice::All => "All Services",
        Choice::Only(service) => service.label(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientDirectoryPage {
    filter: ClientFilter,
    selection: Selection<Client>,
    last_intent: Option<Intent>,
}

impl ClientDirectoryPage {
    pub fn filter(&self) -> &ClientFilter {
        &self.filter
    }

    pub fn selection(&self) -> &Selection<Client> {
        &self.selection
    }

    pub fn last_intent(&self) -> Option<&Intent> {
        self.last_intent.as_ref()
    }

    pub fn has_active_filters(&self) -> bool {
        self.filter.is_active()
    }

    pub fn view<'a>(&self, clients: &'a [Client]) -> Filtered<'a, Client> {
        filter_slice(clients, &self.filter)
    }

    /// Opens the client with `id`; unknown ids are ignored.
    pub fn open_by_id(self, clients: &[Client], id: &str) -> Self {
        Self {
            selection: self.selection.select_by_id(clients, id),
            ..self
        }
    }
}

impl Reducer for ClientDirectoryPage {
    type Event = ClientEvent;

    fn reduce(self, event: Self::Event) -> Self {
        match event {
            ClientEvent::Search(text) => Self {
                filter: ClientFilter {
                    query: TextQuery::new(text),
                    service: self.filter.service,
                },
                ..self
            },
            ClientEvent::FilterService(service) => Self {
                filter: ClientFilter {
                    service,
                    query: self.filter.query.clone(),
                },
                ..self
            },
            ClientEvent::ClearFilters => Self {
                filter: ClientFilter::default(),
                ..self
            },
            ClientEvent::Open(client) => Self {
                selection: self.selection.reduce(SelectionEvent::Select(client)),
                ..self
            },
            ClientEvent::Close => Self {
                selection: self.selection.reduce(SelectionEvent::Close),
                ..self
            },
            ClientEvent::Contact(client) => Self {
                last_intent: Some(Intent::ContactClient(client.id).record("clients")),
                ..self
            },
            ClientEvent::Schedule(client) => Self {
                last_intent: Some(Intent::ScheduleVisit(client.id).record("clients")),
                ..self
            },
        }
    }
}
