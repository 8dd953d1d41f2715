//! Learning resources published by admins.

use mansoothi_types::Resource;
use rusqlite::{params, Connection};

use crate::error::ContentError;

/// Inserts a resource and returns the new row ID.
///
/// # Errors
///
/// Returns `ContentError::Database` on SQL failure.
pub fn add_resource(
    conn: &Connection,
    title: Option<&str>,
    content: Option<&str>,
) -> Result<i64, ContentError> {
    conn.execute(
        "INSERT INTO resources (title, content) VALUES (?1, ?2)",
        params![title, content],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns every resource, oldest first.
///
/// # Errors
///
/// Returns `ContentError::Database` on SQL failure.
pub fn list_resources(conn: &Connection) -> Result<Vec<Resource>, ContentError> {
    let mut stmt =
        conn.prepare("SELECT id, title, content, created_at FROM resources ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(Resource {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    let mut resources = Vec::new();
    for row in rows {
        resources.push(row?);
    }
    Ok(resources)
}
