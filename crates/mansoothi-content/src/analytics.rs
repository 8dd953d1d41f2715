//! Page-view events.

use mansoothi_types::AnalyticsEvent;
use rusqlite::Connection;

use crate::error::ContentError;

/// Records a page view and returns the new row ID.
///
/// # Errors
///
/// Returns `ContentError::Database` on SQL failure.
pub fn record_page_view(conn: &Connection, page: Option<&str>) -> Result<i64, ContentError> {
    conn.execute("INSERT INTO analytics (page) VALUES (?1)", [page])?;
    Ok(conn.last_insert_rowid())
}

/// Returns every recorded page view, oldest first.
///
/// # Errors
///
/// Returns `ContentError::Database` on SQL failure.
pub fn list_analytics(conn: &Connection) -> Result<Vec<AnalyticsEvent>, ContentError> {
    let mut stmt = conn.prepare("SELECT id, page, created_at FROM analytics ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(AnalyticsEvent {
            id: row.get(0)?,
            page: row.get(1)?,
            created_at: row.get(2)?,
        })
    })?;

    let mut events = Vec::new();
    for row in rows {
        events.push(row?);
    }
    Ok(events)
}
