use axum::{http::StatusCode, response::Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::auth_service::AuthService;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// POST /api/auth/register - Create a new user account
///
/// Expected input:
/// ```json
/// { "username": "string", "email": "string", "password": "string" }
/// ```
///
/// Returns the public account shape; the password hash is never serialized.
pub async fn register(
    Json(payload): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let service = AuthService::new().await?;
    let user = service
        .register(&payload.username, &payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": user.id,
            "username": user.username,
            "email": user.email,
        })),
    ))
}
