use axum::{body::Body, http::Request, middleware::Next, response::Response};
use std::time::Instant;

/// Logs every request on arrival and its status on completion.
pub async fn log_requests(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let uri = req.uri().clone();
    tracing::info!(%method, %uri, "incoming request");

    let started = Instant::now();
    let response = next.run(req).await;

    tracing::debug!(
        %method,
        %uri,
        status = response.status().as_u16(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "request completed"
    );

    response
}
