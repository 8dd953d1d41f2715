use crate::api::{
    internal_error, json_body, text_field, with_connection, ApiError, MessageResponse,
};
use crate::AppState;
use axum::extract::{rejection::JsonRejection, Extension, Json};
use mansoothi_content::{list_announcements, post_announcement};
use mansoothi_types::Announcement;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Request body for `POST /admin/announcements`.
#[derive(Debug, Deserialize)]
pub struct PostAnnouncementRequest {
    pub message: Option<Value>,
}

/// Handler for `POST /admin/announcements`.
pub async fn post_announcement_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<PostAnnouncementRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = text_field(json_body(payload)?.message);

    let announcement_id = with_connection(&state, "DB error", move |conn| {
        post_announcement(conn, message.as_deref())
            .map_err(|e| internal_error("DB error", e))
    })
    .await?;

    tracing::info!(announcement_id, "announcement posted");
    Ok(Json(MessageResponse::new("Announcement sent")))
}

/// Handler for `GET /announcements`.
pub async fn list_announcements_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Announcement>>, ApiError> {
    let announcements = with_connection(&state, "DB error", |conn| {
        list_announcements(conn).map_err(|e| internal_error("DB error", e))
    })
    .await?;

    Ok(Json(announcements))
}
