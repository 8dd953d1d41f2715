//! Quiz result handlers.

use crate::api::{
    integer_field, internal_error, json_body, with_connection, ApiError, MessageResponse,
};
use crate::AppState;
use axum::extract::{rejection::JsonRejection, Extension, Json};
use mansoothi_content::{list_quiz_results, record_quiz_result};
use mansoothi_types::QuizResult;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Request body for `POST /quiz-result`.
#[derive(Debug, Deserialize)]
pub struct RecordQuizResultRequest {
    /// Not checked against registered users.
    pub user_id: Option<Value>,
    pub score: Option<Value>,
}

/// Handler for `POST /quiz-result`.
pub async fn record_quiz_result_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<RecordQuizResultRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let payload = json_body(payload)?;
    let user_id = integer_field(payload.user_id);
    let score = integer_field(payload.score);

    with_connection(&state, "DB error", move |conn| {
        record_quiz_result(conn, &user_id, &score)
            .map_err(|e| internal_error("DB error", e))
    })
    .await?;

    Ok(Json(MessageResponse::new("Quiz result saved")))
}

/// Handler for `GET /admin/quiz-results`.
pub async fn list_quiz_results_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<QuizResult>>, ApiError> {
    let results = with_connection(&state, "DB error", |conn| {
        list_quiz_results(conn).map_err(|e| internal_error("DB error", e))
    })
    .await?;

    Ok(Json(results))
}
