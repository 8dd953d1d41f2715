//! Registration and login handlers.
//!
//! Neither route issues a session or token: login only confirms the
//! credentials and reports the user's ID.

use crate::api::{internal_error, json_body, present, with_connection, ApiError, MessageResponse};
use crate::AppState;
use axum::extract::{rejection::JsonRejection, Extension, Json};
use mansoothi_accounts::{
    find_user_by_email, hash_password, register_user, verify_password, AccountError,
};
use mansoothi_types::DEFAULT_ROLE;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

const CREDENTIALS_REQUIRED: &str = "Email and password are required";

/// Request body for `POST /register`.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    /// Defaults to `"user"` when absent or empty.
    pub role: Option<String>,
}

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Response body for a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: i64,
}

fn require_credentials(
    email: Option<String>,
    password: Option<String>,
) -> Result<(String, String), ApiError> {
    match (present(email), present(password)) {
        (Some(email), Some(password)) => Ok((email, password)),
        _ => Err(ApiError::BadRequest(CREDENTIALS_REQUIRED.to_string())),
    }
}

/// Handler for `POST /register`.
pub async fn register_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let payload = json_body(payload)?;
    let (email, password) = require_credentials(payload.email, payload.password)?;
    let role = present(payload.role).unwrap_or_else(|| DEFAULT_ROLE.to_string());

    // Argon2 is CPU-bound; keep it off the async workers.
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| internal_error("Server error", e))?
        .map_err(|e| internal_error("Server error", e))?;

    let user_id = with_connection(&state, "Server error", move |conn| {
        register_user(conn, &email, &password_hash, &role).map_err(|e| match e {
            AccountError::DuplicateEmail(_) => {
                ApiError::BadRequest("Email already exists".to_string())
            }
            other => internal_error("Server error", other),
        })
    })
    .await?;

    tracing::info!(user_id, "user registered");
    Ok(Json(MessageResponse::new("Registration successful")))
}

/// Handler for `POST /login`.
pub async fn login_handler(
    Extension(state): Extension<Arc<AppState>>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<LoginResponse>, ApiError> {
    let payload = json_body(payload)?;
    let (email, password) = require_credentials(payload.email, payload.password)?;

    let user = with_connection(&state, "Internal server error", move |conn| {
        find_user_by_email(conn, &email).map_err(|e| internal_error("Internal server error", e))
    })
    .await?
    .ok_or_else(|| ApiError::Unauthorized("User not found".to_string()))?;

    let user_id = user.id;
    let matches =
        tokio::task::spawn_blocking(move || verify_password(&password, &user.password_hash))
            .await
            .map_err(|e| internal_error("Password comparison failed", e))?
            .map_err(|e| internal_error("Password comparison failed", e))?;

    if !matches {
        tracing::info!(user_id, "login rejected: invalid password");
        return Err(ApiError::Unauthorized("Invalid password".to_string()));
    }

    tracing::info!(user_id, "login succeeded");
    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user_id,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_require_both_fields() {
        assert!(require_credentials(Some("a@b.c".into()), Some("pw".into())).is_ok());
        assert!(require_credentials(None, Some("pw".into())).is_err());
        assert!(require_credentials(Some("a@b.c".into()), None).is_err());
        assert!(require_credentials(Some(String::new()), Some("pw".into())).is_err());
    }

    #[test]
    fn login_response_uses_camel_case_user_id() {
        let json = serde_json::to_value(LoginResponse {
            message: "Login successful".to_string(),
            user_id: 4,
        })
        .unwrap();
        assert_eq!(json["userId"], 4);
        assert!(json.get("user_id").is_none());
    }
}
