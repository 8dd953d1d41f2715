//! Page-view analytics handlers.

use crate::api::{
    internal_error, json_body, text_field, with_connection, ApiError, MessageResponse,
};
use crate::AppState;
use axum::extract::{rejection::JsonRejection, Extension, Json};
use mansoothi_content::{list_analytics, record_page_view};
use mansoothi_types::AnalyticsEvent;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Request body for `POST /analytics`.
#[derive(Debug, Deserialize)]
pub struct RecordPageViewRequest {
    pub page: Option<Value>,
}

/// Handler for `POST /analytics`.
pub async fn record_page_view_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<RecordPageViewRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let page = text_field(json_body(payload)?.page);

    with_connection(&state, "Error saving analytics", move |conn| {
        record_page_view(conn, page.as_deref())
            .map_err(|e| internal_error("Error saving analytics", e))
    })
    .await?;

    Ok(Json(MessageResponse::new("Analytics saved")))
}

/// Handler for `GET /admin/analytics`.
pub async fn list_analytics_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<AnalyticsEvent>>, ApiError> {
    let events = with_connection(&state, "DB error", |conn| {
        list_analytics(conn).map_err(|e| internal_error("DB error", e))
    })
    .await?;

    Ok(Json(events))
}
