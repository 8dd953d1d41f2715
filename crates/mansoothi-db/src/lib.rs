//! Connection manager for the Mansoothi backend.
//!
//! Owns the pooled SQLite store client (`r2d2`) and the embedded, ordered
//! migrations that create every table the HTTP surface reads and writes.
//! Migrations are an explicit startup step: the server runs them once,
//! before binding its listener, and refuses to start if any of them fails.

mod migrations;
mod pool;

pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool, DbConnection, DbPool, DbRuntimeSettings, PoolError};
