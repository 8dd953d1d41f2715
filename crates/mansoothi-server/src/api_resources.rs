//! Learning resource handlers.

use crate::api::{
    internal_error, json_body, text_field, with_connection, ApiError, MessageResponse,
};
use crate::AppState;
use axum::extract::{rejection::JsonRejection, Extension, Json};
use mansoothi_content::{add_resource, list_resources};
use mansoothi_types::Resource;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Request body for `POST /admin/resources`.
#[derive(Debug, Deserialize)]
pub struct AddResourceRequest {
    pub title: Option<Value>,
    pub content: Option<Value>,
}

/// Handler for `POST /admin/resources`.
pub async fn add_resource_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<AddResourceRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let payload = json_body(payload)?;
    let title = text_field(payload.title);
    let content = text_field(payload.content);

    let resource_id = with_connection(&state, "DB error", move |conn| {
        add_resource(conn, title.as_deref(), content.as_deref())
            .map_err(|e| internal_error("DB error", e))
    })
    .await?;

    tracing::info!(resource_id, "resource added");
    Ok(Json(MessageResponse::new("Resource added")))
}

/// Handler for `GET /resources`.
pub async fn list_resources_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Result<Json<Vec<Resource>>, ApiError> {
    let resources = with_connection(&state, "DB error", |conn| {
        list_resources(conn).map_err(|e| internal_error("DB error", e))
    })
    .await?;

    Ok(Json(resources))
}
