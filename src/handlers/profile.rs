use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::middleware::bearer::BearerToken;
use crate::middleware::response::{ApiResponse, ApiResult};

/// GET /api/profile - the authenticated caller's own record.
pub async fn profile_get(token: BearerToken) -> ApiResult<Value> {
    let gateway = super::gateway_for(&token)?;
    let profile = gateway
        .profile()
        .await?
        .ok_or_else(|| ApiError::not_found("Profile not found"))?;
    Ok(ApiResponse::success(profile))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ProfileUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// PUT /api/profile - update, then re-fetch so the caller gets the
/// record the upstream actually stored.
pub async fn profile_put(
    token: BearerToken,
    Json(payload): Json<ProfileUpdateRequest>,
) -> ApiResult<Value> {
    let gateway = super::gateway_for(&token)?;
    let outcome = gateway.update_profile(&payload).await?;

    if !outcome.succeeded() {
        return Err(ApiError::from_mutation(outcome, "Failed to update profile"));
    }

    let profile = gateway.profile().await?.unwrap_or(Value::Null);
    Ok(ApiResponse::success(profile))
}
