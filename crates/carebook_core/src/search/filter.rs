//! Predicate trait, per-entity filter sets and the stable filter routine.

use crate::model::client::{Client, ServiceType};
use crate::model::conversation::Conversation;
use crate::model::note::{Note, NotePriority};
use crate::model::staff::{Staff, StaffRole, StaffStatus};
use crate::search::query::{Choice, TextQuery};

/// A single filter condition over `T`.
pub trait Predicate<T: ?Sized> {
    /// Whether `item` satisfies this condition.
    fn matches(&self, item: &T) -> bool;

    /// Whether this condition can exclude anything at all.
    ///
    /// Sentinel/blank predicates report `false`.
    fn is_active(&self) -> bool {
        true
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for &P {
    fn matches(&self, item: &T) -> bool {
        (**self).matches(item)
    }

    fn is_active(&self) -> bool {
        (**self).is_active()
    }
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for (A, B) {
    fn matches(&self, item: &T) -> bool {
        self.0.matches(item) && self.1.matches(item)
    }

    fn is_active(&self) -> bool {
        self.0.is_active() || self.1.is_active()
    }
}

/// Entity types that expose a fixed list of free-text searchable fields.
pub trait TextSearchable {
    /// Fields matched by [`TextQuery`], in no particular priority.
    fn search_fields(&self) -> Vec<&str>;
}

impl TextSearchable for Staff {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.phone.as_str()]
    }
}

impl TextSearchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.name.as_str(),
            self.phone.as_str(),
            self.address.as_str(),
        ];
        if let Some(email) = self.email.as_deref() {
            fields.push(email);
        }
        fields
    }
}

impl TextSearchable for Conversation {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl<T: TextSearchable> Predicate<T> for TextQuery {
    fn matches(&self, item: &T) -> bool {
        self.matches_any(item.search_fields())
    }

    fn is_active(&self) -> bool {
        !self.is_empty()
    }
}

/// Result of applying a predicate set to a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filtered<'a, T> {
    /// Matching items in input order.
    pub items: Vec<&'a T>,
    /// Size of the unfiltered collection.
    pub total: usize,
}

impl<T> Filtered<'_, T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `Showing N of M <noun>` summary line.
    pub fn summary(&self, noun: &str) -> String {
        format!("Showing {} of {} {noun}", self.items.len(), self.total)
    }
}

/// Returns the items that satisfy `predicate`, preserving input order.
pub fn filter_items<'a, T, I, P>(items: I, predicate: &P) -> Vec<&'a T>
where
    T: 'a + ?Sized,
    I: IntoIterator<Item = &'a T>,
    P: Predicate<T> + ?Sized,
{
    items
        .into_iter()
        .filter(|item| predicate.matches(item))
        .collect()
}

/// Like [`filter_items`], also reporting the unfiltered size.
pub fn filter_slice<'a, T, P>(items: &'a [T], predicate: &P) -> Filtered<'a, T>
where
    P: Predicate<T> + ?Sized,
{
    Filtered {
        items: filter_items(items, predicate),
        total: items.len(),
    }
}

/// Staff directory filter: text over name/email/phone, role and status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaffFilter {
    pub query: TextQuery,
    pub role: Choice<StaffRole>,
    pub status: Choice<StaffStatus>,
}

impl StaffFilter {
    /// Role chips, `All` first.
    pub fn role_options() -> Vec<Choice<StaffRole>> {
        Choice::options(&StaffRole::ALL)
    }

    /// Status chips, `All` first.
    pub fn status_options() -> Vec<Choice<StaffStatus>> {
        Choice::options(&StaffStatus::ALL)
    }
}

impl Predicate<Staff> for StaffFilter {
    fn matches(&self, item: &Staff) -> bool {
        Predicate::<Staff>::matches(&self.query, item)
            && self.role.admits(&item.role)
            && self.status.admits(&item.status)
    }

    fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.role.is_all() || !self.status.is_all()
    }
}

/// Client directory filter: text over name/phone/address/email and service.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientFilter {
    pub query: TextQuery,
    pub service: Choice<ServiceType>,
}

impl ClientFilter {
    pub fn service_options() -> Vec<Choice<ServiceType>> {
        Choice::options(&ServiceType::ALL)
    }
}

impl Predicate<Client> for ClientFilter {
    fn matches(&self, item: &Client) -> bool {
        Predicate::<Client>::matches(&self.query, item) && self.service.admits(&item.service_type)
    }

    fn is_active(&self) -> bool {
        !self.query.is_empty() || !self.service.is_all()
    }
}

/// Notes feed filter by priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoteFilter {
    pub priority: Choice<NotePriority>,
}

impl NoteFilter {
    pub fn priority_options() -> Vec<Choice<NotePriority>> {
        Choice::options(&NotePriority::ALL)
    }
}

impl Predicate<Note> for NoteFilter {
    fn matches(&self, item: &Note) -> bool {
        self.priority.admits(&item.priority)
    }

    fn is_active(&self) -> bool {
        !self.priority.is_all()
    }
}

#[cfg(test)]
mod tests {
    use super::{filter_items, filter_slice, ClientFilter, Predicate, StaffFilter};
    use crate::model::client::{Client, ServiceType};
    use crate::model::staff::{Staff, StaffRole, StaffStatus};
    use crate::search::query::{Choice, TextQuery};

    fn staff(id: &str, name: &str, role: StaffRole, status: StaffStatus) -> Staff {
        Staff::new(id, name, role, "(555) 000-0000", format!("{id}@example.com"))
            .with_status(status)
    }

    #[test]
    fn default_staff_filter_is_inactive_and_matches_all() {
        let filter = StaffFilter::default();
        let items = vec![
            staff("a", "Ann", StaffRole::Rn, StaffStatus::Active),
            staff("b", "Bob", StaffRole::Psw, StaffStatus::Inactive),
        ];
        assert!(!filter.is_active());
        assert_eq!(filter_items(&items, &filter).len(), 2);
    }

    #[test]
    fn tuple_predicates_are_and_composed() {
        let items = vec![
            staff("a", "Ann Lee", StaffRole::Rn, StaffStatus::Active),
            staff("b", "Ann Park", StaffRole::Psw, StaffStatus::Active),
        ];
        let by_role = StaffFilter {
            role: Choice::Only(StaffRole::Psw),
            ..StaffFilter::default()
        };
        let composed = (TextQuery::new("ann"), by_role);
        let hits = filter_items(&items, &composed);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "b");
    }

    #[test]
    fn filtered_summary_reports_shown_and_total() {
        let items = vec![
            staff("a", "Ann", StaffRole::Rn, StaffStatus::Active),
            staff("b", "Bob", StaffRole::Psw, StaffStatus::OnLeave),
        ];
        let filter = StaffFilter {
            status: Choice::Only(StaffStatus::OnLeave),
            ..StaffFilter::default()
        };
        let filtered = filter_slice(&items, &filter);
        assert_eq!(filtered.summary("staff members"), "Showing 1 of 2 staff members");
    }

    #[test]
    fn client_query_reaches_optional_email() {
        let items = vec![
            Client::new("a", "Ada", "(555) 111-2222", "1 Main St", ServiceType::VisitingAngels)
                .with_email("ada@family.example"),
            Client::new("b", "Ben", "(555) 333-4444", "2 Main St", ServiceType::VisitingAngels),
        ];
        let filter = ClientFilter {
            query: TextQuery::new("family.example"),
            ..ClientFilter::default()
        };
        let hits = filter_items(&items, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "a");
    }

    #[test]
    fn staff_chip_options_cover_every_category() {
        let roles: Vec<String> = StaffFilter::role_options()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(roles, vec!["All", "PSW", "RN", "RPN", "Babysitter"]);
        let statuses: Vec<String> = StaffFilter::status_options()
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(statuses, vec!["All", "Active", "Inactive", "On Leave"]);
    }
}
