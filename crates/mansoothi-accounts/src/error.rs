//! Error types for account operations.

/// Errors that can occur while registering or authenticating users.
#[derive(Debug, thiserror::Error)]
pub enum AccountError {
    /// The email is already registered.
    #[error("email already exists: {0}")]
    DuplicateEmail(String),

    /// Hashing or verifying a password failed.
    #[error("password hash error: {0}")]
    Hash(String),

    /// A database operation failed.
    #[error("account database error: {0}")]
    Database(#[from] rusqlite::Error),
}
