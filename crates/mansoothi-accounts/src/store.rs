//! Persistence for the `users` table.

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use crate::error::AccountError;

/// A row from `users`.
///
/// Carries the password hash, so it must never be serialized into a
/// response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    /// Row ID, returned to clients as `userId` on login.
    pub id: i64,
    /// Unique email address.
    pub email: String,
    /// PHC-format password hash.
    pub password_hash: String,
    /// Free-form role label.
    pub role: String,
}

/// Inserts a new user and returns its row ID.
///
/// `password_hash` must already be hashed; see [`crate::hash_password`].
///
/// # Errors
///
/// Returns `AccountError::DuplicateEmail` if `email` is already registered,
/// or `AccountError::Database` for any other SQL failure.
pub fn register_user(
    conn: &Connection,
    email: &str,
    password_hash: &str,
    role: &str,
) -> Result<i64, AccountError> {
    match conn.execute(
        "INSERT INTO users (email, password, role) VALUES (?1, ?2, ?3)",
        params![email, password_hash, role],
    ) {
        Ok(_) => {
            let id = conn.last_insert_rowid();
            tracing::debug!(user_id = id, role, "registered user");
            Ok(id)
        }
        Err(e) if is_unique_violation(&e) => Err(AccountError::DuplicateEmail(email.to_string())),
        Err(e) => Err(AccountError::Database(e)),
    }
}

/// Looks up a user by exact email match.
///
/// # Errors
///
/// Returns `AccountError::Database` on SQL failure.
pub fn find_user_by_email(
    conn: &Connection,
    email: &str,
) -> Result<Option<UserRecord>, AccountError> {
    let user = conn
        .query_row(
            "SELECT id, email, password, role FROM users WHERE email = ?1",
            [email],
            |row| {
                Ok(UserRecord {
                    id: row.get(0)?,
                    email: row.get(1)?,
                    password_hash: row.get(2)?,
                    role: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(user)
}

fn is_unique_violation(err: &rusqlite::Error) -> bool {
    match err {
        rusqlite::Error::SqliteFailure(e, _) => {
            e.code == ErrorCode::ConstraintViolation
                && e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
        }
        _ => false,
    }
}
