use mansoothi_types::Announcement;
use rusqlite::Connection;

use crate::error::ContentError;

/// Stores an announcement and returns the new row ID.
///
/// # Errors
///
/// Returns `ContentError::Database` on SQL failure.
pub fn post_announcement(conn: &Connection, message: Option<&str>) -> Result<i64, ContentError> {
    conn.execute("INSERT INTO announcements (message) VALUES (?1)", [message])?;
    Ok(conn.last_insert_rowid())
}

/// Returns every announcement, oldest first.
///
/// # Errors
///
/// Returns `ContentError::Database` on SQL failure.
pub fn list_announcements(conn: &Connection) -> Result<Vec<Announcement>, ContentError> {
    let mut stmt =
        conn.prepare("SELECT id, message, created_at FROM announcements ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Announcement {
            id: row.get(0)?,
            message: row.get(1)?,
            created_at: row.get(2)?,
        })
    })?;

    let mut announcements = Vec::new();
    for row in rows {
        announcements.push(row?);
    }
    Ok(announcements)
}
