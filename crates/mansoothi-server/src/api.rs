//! Shared plumbing for the HTTP handlers: the error type every route
//! returns, the `{message}` response body, and the helpers that move
//! blocking store work off the async runtime.

use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Json},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rusqlite::{types::Value as SqlValue, Connection};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;

/// API error type mapping to HTTP status codes.
///
/// The payload is the client-facing message; underlying causes are logged
/// where the error is created and never echoed back.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("internal error: {0}")]
    InternalError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        (status, Json(MessageResponse::new(message))).into_response()
    }
}

/// Body returned by every write route and by every error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Logs `err` and returns a 500 carrying only `message`.
pub(crate) fn internal_error(message: &str, err: impl Display) -> ApiError {
    tracing::error!(error = %err, "{}", message);
    ApiError::InternalError(message.to_string())
}

/// Unwraps a JSON body, turning extractor rejections into `BadRequest`.
pub(crate) fn json_body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    match payload {
        Ok(Json(body)) => Ok(body),
        Err(rejection) => {
            tracing::debug!(reason = %rejection.body_text(), "rejected request body");
            Err(ApiError::BadRequest("Invalid request body".to_string()))
        }
    }
}

/// Treats empty strings the same as absent fields.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Renders a loosely typed body field for a TEXT column.
///
/// Write routes accept whatever JSON the client sends; numbers and booleans
/// are stored as their text form, the way a TEXT column would store them.
pub(crate) fn text_field(value: Option<JsonValue>) -> Option<String> {
    match value? {
        JsonValue::Null => None,
        JsonValue::String(s) => Some(s),
        JsonValue::Bool(b) => Some(i64::from(b).to_string()),
        other => Some(other.to_string()),
    }
}

/// Coerces a loosely typed body field for an INTEGER column.
///
/// Numbers and numeric strings become integers, with fractions rounded half
/// away from zero. Anything else is bound as text and left for the column's
/// constraint to reject.
pub(crate) fn integer_field(value: Option<JsonValue>) -> SqlValue {
    match value {
        None | Some(JsonValue::Null) => SqlValue::Null,
        Some(JsonValue::Bool(b)) => SqlValue::Integer(i64::from(b)),
        Some(JsonValue::Number(n)) => match (n.as_i64(), n.as_f64()) {
            (Some(i), _) => SqlValue::Integer(i),
            (None, Some(f)) => SqlValue::Integer(f.round() as i64),
            (None, None) => SqlValue::Text(n.to_string()),
        },
        Some(JsonValue::String(s)) => match parse_integer(&s) {
            Some(i) => SqlValue::Integer(i),
            None => SqlValue::Text(s),
        },
        Some(other) => SqlValue::Text(other.to_string()),
    }
}

fn parse_integer(s: &str) -> Option<i64> {
    let trimmed = s.trim();
    if let Ok(i) = trimmed.parse::<i64>() {
        return Some(i);
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|f| f.is_finite())
        .map(|f| f.round() as i64)
}

/// Checks out a pooled connection on the blocking thread pool and runs `f`.
///
/// Pool and join failures become a 500 with `failure` as the message.
pub(crate) async fn with_connection<T, F>(
    state: &Arc<AppState>,
    failure: &'static str,
    f: F,
) -> Result<T, ApiError>
where
    F: FnOnce(&Connection) -> Result<T, ApiError> + Send + 'static,
    T: Send + 'static,
{
    let pool = state.pool.clone();
    tokio::task::spawn_blocking(move || {
        let conn = pool.get().map_err(|e| internal_error(failure, e))?;
        f(&conn)
    })
    .await
    .map_err(|e| internal_error(failure, e))?
}
