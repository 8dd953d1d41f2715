//! Data access for the append-only content tables.
//!
//! Covers `analytics`, `resources`, `announcements` and `quiz_results`.
//! Every table follows the same two shapes: an insert of a fixed set of
//! nullable fields, and an unfiltered listing of all rows in insertion
//! order. Rows are never updated or deleted through this crate.
//!
//! All functions take a plain `&rusqlite::Connection`, so callers decide
//! whether it comes from a pool, a transaction, or an in-memory test
//! database.

mod analytics;
mod announcements;
mod error;
mod quiz_results;
mod resources;

pub use analytics::{list_analytics, record_page_view};
pub use announcements::{list_announcements, post_announcement};
pub use error::ContentError;
pub use quiz_results::{list_quiz_results, record_quiz_result};
pub use resources::{add_resource, list_resources};

#[cfg(test)]
mod tests;
