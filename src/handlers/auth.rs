use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::config::config;
use crate::error::ApiError;
use crate::gateway::{Credentials, UpstreamGateway};
use crate::middleware::response::{ApiResponse, ApiResult};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login - exchange credentials for an upstream bearer
/// token. The presentation layer stores the returned token in its own
/// session and forwards it on subsequent calls.
pub async fn login_post(Json(payload): Json<LoginRequest>) -> ApiResult<Value> {
    if payload.email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("Please enter both email and password."));
    }

    let mut gateway = UpstreamGateway::new(&config().upstream, Credentials::anonymous())?;
    let session = gateway.login(&payload.email, &payload.password).await?;

    tracing::info!("login succeeded for {}", payload.email);
    Ok(ApiResponse::success(json!({
        "token": session.token,
        "user": session.user,
    })))
}
