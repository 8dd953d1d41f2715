//! Error types for the content tables.

/// Errors that can occur while reading or writing content rows.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// A database operation failed.
    #[error("content database error: {0}")]
    Database(#[from] rusqlite::Error),
}
