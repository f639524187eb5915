//! In-memory search and filtering shared by every list view.
//!
//! # Responsibility
//! - Express free-text and categorical filters as composable predicates.
//! - Apply a predicate set to a collection without reordering it.
//!
//! # Invariants
//! - Filtering is stable: matches keep their original relative order.
//! - A blank query or a `Choice::All` filter never excludes anything.
//! - Filtering an already-filtered result with the same predicates is a no-op.

pub mod filter;
pub mod query;
