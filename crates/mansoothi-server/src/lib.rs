//! Mansoothi server library logic.

pub mod api;
pub mod api_analytics;
pub mod api_announcements;
pub mod api_auth;
pub mod api_quiz;
pub mod api_resources;
pub mod config;
pub mod middleware;
pub mod startup;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Extension, Json, Router,
};
use mansoothi_db::DbPool;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: DbPool,
    /// Directory holding the login/admin front-end.
    pub static_dir: PathBuf,
}

/// Maximum request body size (1 MiB).
const MAX_REQUEST_BODY_BYTES: usize = 1024 * 1024;

/// Health check handler.
async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Builds the application router with all routes.
///
/// Admin routes carry no authentication; anything that can reach the
/// listener can read and write them.
pub fn app(state: AppState) -> Router {
    let router = Router::new()
        .route("/health", get(health))
        .route("/register", post(api_auth::register_handler))
        .route("/login", post(api_auth::login_handler))
        .route("/analytics", post(api_analytics::record_page_view_handler))
        .route(
            "/admin/analytics",
            get(api_analytics::list_analytics_handler),
        )
        .route(
            "/admin/resources",
            post(api_resources::add_resource_handler),
        )
        .route("/resources", get(api_resources::list_resources_handler))
        .route(
            "/admin/announcements",
            post(api_announcements::post_announcement_handler),
        )
        .route(
            "/announcements",
            get(api_announcements::list_announcements_handler),
        )
        .route("/quiz-result", post(api_quiz::record_quiz_result_handler))
        .route(
            "/admin/quiz-results",
            get(api_quiz::list_quiz_results_handler),
        );

    let static_dir = state.static_dir.clone();
    let router = if static_dir.is_dir() {
        tracing::info!(path = %static_dir.display(), "serving static files");
        router
            .route_service("/", ServeFile::new(static_dir.join("index.html")))
            .fallback_service(ServeDir::new(&static_dir))
    } else {
        tracing::warn!(
            path = %static_dir.display(),
            "static directory not found, serving the API only"
        );
        router
    };

    router
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(Extension(Arc::new(state)))
}
