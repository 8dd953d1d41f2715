//! Quiz scores.
//!
//! `user_id` is stored as given. It is not checked against `users`, so a
//! score can reference a user that was never registered. Both columns only
//! hold integers or NULL; the schema rejects anything else.

use mansoothi_types::QuizResult;
use rusqlite::{params, types::Value, Connection};

use crate::error::ContentError;

/// Stores a quiz score and returns the new row ID.
///
/// Values are bound as given; coercing client input is the caller's job.
///
/// # Errors
///
/// Returns `ContentError::Database` on SQL failure, including a value the
/// column cannot hold as an integer.
pub fn record_quiz_result(
    conn: &Connection,
    user_id: &Value,
    score: &Value,
) -> Result<i64, ContentError> {
    conn.execute(
        "INSERT INTO quiz_results (user_id, score) VALUES (?1, ?2)",
        params![user_id, score],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Returns every stored quiz score, oldest first.
///
/// # Errors
///
/// Returns `ContentError::Database` on SQL failure.
pub fn list_quiz_results(conn: &Connection) -> Result<Vec<QuizResult>, ContentError> {
    let mut stmt = conn
        .prepare("SELECT id, user_id, score, created_at FROM quiz_results ORDER BY id ASC")?;
    let rows = stmt.query_map([], |row| {
        Ok(QuizResult {
            id: row.get(0)?,
            user_id: row.get(1)?,
            score: row.get(2)?,
            created_at: row.get(3)?,
        })
    })?;

    let mut results = Vec::new();
    for row in rows {
        results.push(row?);
    }
    Ok(results)
}
