//! Shared entity types and constants for the Mansoothi backend.
//!
//! Every row type returned over the HTTP surface lives here so that the
//! data-access crates and the server agree on a single wire shape. Field
//! names match the underlying column names (`user_id`, `created_at`).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Role assigned to a newly registered user when none is supplied.
pub const DEFAULT_ROLE: &str = "user";

/// A single page-view event recorded by the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    /// Row ID.
    pub id: i64,
    /// Page path or label reported by the client.
    pub page: Option<String>,
    /// Insertion timestamp assigned by the store (UTC).
    pub created_at: NaiveDateTime,
}

/// A learning resource published from the admin panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Row ID.
    pub id: i64,
    /// Resource title.
    pub title: Option<String>,
    /// Resource body.
    pub content: Option<String>,
    /// Insertion timestamp assigned by the store (UTC).
    pub created_at: NaiveDateTime,
}

/// A broadcast announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    /// Row ID.
    pub id: i64,
    /// Announcement text.
    pub message: Option<String>,
    /// Insertion timestamp assigned by the store (UTC).
    pub created_at: NaiveDateTime,
}

/// A stored quiz score.
///
/// `user_id` is a soft reference: it is never checked against `users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// Row ID.
    pub id: i64,
    /// ID of the user the score belongs to.
    pub user_id: Option<i64>,
    /// Score achieved.
    pub score: Option<i64>,
    /// Insertion timestamp assigned by the store (UTC).
    pub created_at: NaiveDateTime,
}
