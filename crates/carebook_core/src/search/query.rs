//! Predicate primitives: free-text query and categorical choice.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Case-insensitive substring query.
///
/// Matching is a plain substring test on the lowercased input, surrounding
/// whitespace included. Whitespace-only input behaves like an empty query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    raw: String,
    needle: String,
}

impl TextQuery {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let needle = raw.to_lowercase();
        Self { raw, needle }
    }

    /// Text as typed by the user.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Whether this query imposes no constraint.
    pub fn is_empty(&self) -> bool {
        self.needle.trim().is_empty()
    }

    /// Returns whether `field` contains the query, ignoring case.
    pub fn matches_field(&self, field: &str) -> bool {
        self.is_empty() || field.to_lowercase().contains(&self.needle)
    }

    /// Returns whether any of `fields` contains the query.
    pub fn matches_any<'a, I>(&self, fields: I) -> bool
    where
        I: IntoIterator<Item = &'a str>,
    {
        if self.is_empty() {
            return true;
        }
        fields.into_iter().any(|field| self.matches_field(field))
    }
}

impl From<&str> for TextQuery {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for TextQuery {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Categorical filter value with an `All` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Choice<T> {
    /// Sentinel that matches every value.
    All,
    /// Exact-equality constraint.
    Only(T),
}

impl<T: PartialEq> Choice<T> {
    /// Whether `value` passes this filter.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T: Copy> Choice<T> {
    /// Filter chip values: the sentinel first, then each of `values`.
    pub fn options(values: &[T]) -> Vec<Self> {
        std::iter::once(Self::All)
            .chain(values.iter().copied().map(Self::Only))
            .collect()
    }
}

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> From<Option<T>> for Choice<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => Self::Only(inner),
            None => Self::All,
        }
    }
}

impl<T: Display> Display for Choice<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Choice, TextQuery};

    #[test]
    fn text_query_ignores_case() {
        let query = TextQuery::new("CHEN");
        assert!(query.matches_field("Emily Chen"));
        assert!(!query.matches_field("Sarah Wilson"));
        assert_eq!(query.as_str(), "CHEN");
    }

    #[test]
    fn surrounding_whitespace_is_part_of_the_needle() {
        let query = TextQuery::new("y ");
        assert!(query.matches_field("Emily Chen"));
        assert!(!query.matches_field("Jessica Taylor"));
        assert!(!TextQuery::new(" chen").matches_field("Chen"));
    }

    #[test]
    fn blank_text_query_matches_everything() {
        assert!(TextQuery::new("").matches_any(std::iter::empty::<&str>()));
        assert!(TextQuery::new("   ").matches_field("anything"));
    }

    #[test]
    fn choice_all_admits_every_value() {
        let all: Choice<u8> = Choice::All;
        assert!(all.admits(&1));
        assert!(Choice::Only(2).admits(&2));
        assert!(!Choice::Only(2).admits(&3));
    }

    #[test]
    fn choice_options_lead_with_the_sentinel() {
        assert_eq!(
            Choice::options(&[3u8, 1]),
            vec![Choice::All, Choice::Only(3), Choice::Only(1)]
        );
    }

    #[test]
    fn choice_displays_sentinel_as_all() {
        assert_eq!(Choice::<u8>::All.to_string(), "All");
        assert_eq!(Choice::Only(7).to_string(), "7");
    }
}
