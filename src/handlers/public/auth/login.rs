use axum::response::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::services::auth_service::AuthService;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - Authenticate and receive a JWT
///
/// Expected input:
/// ```json
/// { "email": "string", "password": "string" }
/// ```
///
/// The success message embeds the username ("Welcome back, <name>!"); the web
/// client parses it back out for display.
pub async fn login(Json(payload): Json<LoginRequest>) -> Result<Json<Value>, ApiError> {
    let service = AuthService::new().await?;
    let (token, user) = service.login(&payload.email, &payload.password).await?;

    Ok(Json(json!({
        "token": token,
        "message": format!("Welcome back, {}!", user.username),
    })))
}
