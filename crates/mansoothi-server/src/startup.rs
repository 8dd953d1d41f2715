//! Process lifecycle: logging setup, database preparation, serving and
//! graceful shutdown.
//!
//! Startup is ordered and fail-fast. The pool is built and every pending
//! migration applied before the listener is bound; if either step fails
//! the server never accepts a request.

use crate::config::{Config, DatabaseConfig, LoggingConfig};
use crate::{app, AppState};
use mansoothi_db::{DbPool, MigrationError, PoolError};
use std::net::SocketAddr;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    /// The connection pool could not be created.
    #[error(transparent)]
    Pool(#[from] PoolError),

    /// No connection could be checked out to run migrations.
    #[error("failed to get database connection for migrations: {0}")]
    Checkout(#[from] r2d2::Error),

    /// A migration failed.
    #[error(transparent)]
    Migration(#[from] MigrationError),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(std::io::Error),
}

/// Installs the global `tracing` subscriber.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.level).unwrap_or_else(|_| EnvFilter::new("info"));

    if logging.json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Opens the pool and brings the schema up to date.
///
/// # Errors
///
/// Returns `StartupError` if the pool cannot be built, a connection cannot
/// be checked out, or any migration fails.
pub fn prepare_database(database: &DatabaseConfig) -> Result<DbPool, StartupError> {
    let pool = mansoothi_db::create_pool(&database.path, database.runtime_settings())?;

    let conn = pool.get()?;
    let applied = mansoothi_db::run_migrations(&conn)?;
    if applied > 0 {
        tracing::info!(count = applied, "applied database migrations");
    } else {
        tracing::debug!("database schema is up to date");
    }

    Ok(pool)
}

/// Prepares the database, binds the listener and serves until SIGINT or
/// SIGTERM.
///
/// # Errors
///
/// Returns `StartupError` if any startup step fails or the server stops
/// with an I/O error.
pub async fn run(config: Config) -> Result<(), StartupError> {
    let pool = prepare_database(&config.database)?;

    let state = AppState {
        pool,
        static_dir: config.server.static_dir.clone(),
    };
    let app = app(state);
    let addr = SocketAddr::new(config.server.host, config.server.port);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;

    tracing::info!(%addr, "starting mansoothi server");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(StartupError::Serve)?;

    tracing::info!("mansoothi server shut down");
    Ok(())
}

/// Waits for a SIGINT (Ctrl+C) or SIGTERM signal for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => { tracing::info!("received SIGINT, initiating graceful shutdown"); }
        () = terminate => { tracing::info!("received SIGTERM, initiating graceful shutdown"); }
    }
}
