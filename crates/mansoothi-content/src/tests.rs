//! Unit tests for the content tables.

use chrono::NaiveDateTime;
use rusqlite::{types::Value, Connection};

use crate::error::ContentError;
use crate::{
    add_resource, list_analytics, list_announcements, list_quiz_results, list_resources,
    post_announcement, record_page_view, record_quiz_result,
};

/// Creates an in-memory SQLite database with migrations applied.
fn test_db() -> Connection {
    let conn = Connection::open_in_memory().expect("should open in-memory db");
    mansoothi_db::run_migrations(&conn).expect("migrations should succeed");
    conn
}

// ── analytics ────────────────────────────────────────────────────────

#[test]
fn page_view_round_trips_unchanged() {
    let conn = test_db();
    let id = record_page_view(&conn, Some("/home")).expect("insert should succeed");

    let events = list_analytics(&conn).expect("list should succeed");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, id);
    assert_eq!(events[0].page.as_deref(), Some("/home"));
}

#[test]
fn page_view_accepts_null_page() {
    let conn = test_db();
    record_page_view(&conn, None).expect("null page should be stored");

    let events = list_analytics(&conn).expect("list should succeed");
    assert_eq!(events[0].page, None);
}

#[test]
fn analytics_are_listed_in_insertion_order() {
    let conn = test_db();
    for page in ["/a", "/b", "/c"] {
        record_page_view(&conn, Some(page)).expect("insert should succeed");
    }

    let pages: Vec<_> = list_analytics(&conn)
        .expect("list should succeed")
        .into_iter()
        .map(|e| e.page.unwrap_or_default())
        .collect();
    assert_eq!(pages, ["/a", "/b", "/c"]);
}

// ── resources ────────────────────────────────────────────────────────

#[test]
fn resource_keeps_title_and_content() {
    let conn = test_db();
    add_resource(&conn, Some("Fractions"), Some("Halves and quarters"))
        .expect("insert should succeed");

    let resources = list_resources(&conn).expect("list should succeed");
    assert_eq!(resources.len(), 1);
    assert_eq!(resources[0].title.as_deref(), Some("Fractions"));
    assert_eq!(resources[0].content.as_deref(), Some("Halves and quarters"));
}

// ── announcements ────────────────────────────────────────────────────

#[test]
fn announcement_is_listed() {
    let conn = test_db();
    post_announcement(&conn, Some("Exams start Monday")).expect("insert should succeed");
    post_announcement(&conn, Some("Bring a pencil")).expect("insert should succeed");

    let announcements = list_announcements(&conn).expect("list should succeed");
    assert_eq!(announcements.len(), 2);
    assert_eq!(announcements[1].message.as_deref(), Some("Bring a pencil"));
}

// ── quiz results ─────────────────────────────────────────────────────

#[test]
fn quiz_result_preserves_user_and_score() {
    let conn = test_db();
    record_quiz_result(&conn, &Value::Integer(7), &Value::Integer(85))
        .expect("insert should succeed");

    let results = list_quiz_results(&conn).expect("list should succeed");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].user_id, Some(7));
    assert_eq!(results[0].score, Some(85));
}

#[test]
fn quiz_result_rejects_non_numeric_score() {
    let conn = test_db();
    let err = record_quiz_result(&conn, &Value::Integer(1), &Value::Text("lots".into()))
        .expect_err("text score should not be stored");
    assert!(matches!(err, ContentError::Database(_)));
    assert!(list_quiz_results(&conn).expect("list should succeed").is_empty());
}

#[test]
fn over_long_page_is_a_store_error() {
    let conn = test_db();
    let page = "/".repeat(101);
    let err = record_page_view(&conn, Some(&page)).expect_err("page too long");
    assert!(matches!(err, ContentError::Database(_)));
}

#[test]
fn created_at_is_assigned_by_the_store() {
    let conn = test_db();
    record_quiz_result(&conn, &Value::Integer(1), &Value::Integer(10))
        .expect("insert should succeed");

    let results = list_quiz_results(&conn).expect("list should succeed");
    let now: NaiveDateTime = conn
        .query_row("SELECT datetime('now')", [], |row| row.get(0))
        .expect("should read current time");
    assert!(results[0].created_at <= now);
}

// ── errors ───────────────────────────────────────────────────────────

#[test]
fn missing_schema_surfaces_database_error() {
    let conn = Connection::open_in_memory().expect("should open in-memory db");
    let err = list_resources(&conn).expect_err("no resources table");
    assert!(matches!(err, ContentError::Database(_)));
}
