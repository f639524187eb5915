//! Calendar windowing and appointment bucketing.
//!
//! # Responsibility
//! - Derive the visible week/month date range from an anchor date.
//! - Group appointments under the calendar day they fall on.
//!
//! # Invariants
//! - A week window always starts on Sunday and spans exactly 7 days.
//! - A month window spans every day of the anchor's month.
//! - Navigation never fails; month shifts clamp to the target month's last day.
//! - Bucketing compares calendar dates only, never time of day.

pub mod bucket;
pub mod window;
