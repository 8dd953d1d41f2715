#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use mansoothi_db::{create_pool, run_migrations, DbPool, DbRuntimeSettings};
use mansoothi_server::{app, AppState};
use serde_json::Value;
use std::path::PathBuf;
use tempfile::TempDir;
use tower::ServiceExt;

/// A router backed by a file database inside a temporary directory.
///
/// The directory lives as long as this value, so keep it in scope for the
/// whole test.
pub struct TestApp {
    pub router: Router,
    pub pool: DbPool,
    pub dir: TempDir,
}

impl TestApp {
    pub fn static_dir(&self) -> PathBuf {
        self.dir.path().join("static")
    }
}

fn build(migrate: bool, with_static: bool) -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("test.db");
    let pool = create_pool(db_path.to_str().unwrap(), DbRuntimeSettings::default()).unwrap();

    if migrate {
        let conn = pool.get().unwrap();
        run_migrations(&conn).unwrap();
    }

    let static_dir = dir.path().join("static");
    if with_static {
        std::fs::create_dir_all(&static_dir).unwrap();
        std::fs::write(
            static_dir.join("index.html"),
            "<html><body>login page</body></html>",
        )
        .unwrap();
        std::fs::write(static_dir.join("style.css"), "body { margin: 0; }").unwrap();
    }

    let state = AppState {
        pool: pool.clone(),
        static_dir,
    };

    TestApp {
        router: app(state),
        pool,
        dir,
    }
}

/// Migrated database, no static directory.
pub fn setup_app() -> TestApp {
    build(true, false)
}

/// Migrated database plus a static directory with `index.html` and `style.css`.
pub fn setup_app_with_static() -> TestApp {
    build(true, true)
}

/// A database with no tables at all.
pub fn setup_app_without_schema() -> TestApp {
    build(false, false)
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// Sends `request` and returns the status plus the body parsed as JSON.
pub async fn send_json(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}
