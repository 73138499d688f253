use axum::{extract::Path, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::middleware::bearer::BearerToken;
use crate::middleware::response::{ApiResponse, ApiResult};

/// GET /api/users - the user directory, normalized.
pub async fn users_get(token: BearerToken) -> ApiResult<Vec<Value>> {
    let gateway = super::gateway_for(&token)?;
    let users = gateway.list_users().await?;
    Ok(ApiResponse::success(users))
}

/// GET /api/users/{id}
pub async fn user_get(token: BearerToken, Path(id): Path<String>) -> ApiResult<Value> {
    let gateway = super::gateway_for(&token)?;
    let user = gateway
        .get_user(&id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {id} not found")))?;
    Ok(ApiResponse::success(user))
}

#[derive(Debug, Deserialize)]
pub struct RoleChangeRequest {
    pub role: String,
}

/// PUT /api/users/{id}/role - success phrasing is decided here from
/// the passed-through upstream status.
pub async fn user_role_put(
    token: BearerToken,
    Path(id): Path<String>,
    Json(payload): Json<RoleChangeRequest>,
) -> ApiResult<Value> {
    let gateway = super::gateway_for(&token)?;
    let outcome = gateway.change_role(&id, &payload.role).await?;

    if outcome.succeeded() {
        Ok(ApiResponse::success(json!({
            "id": id,
            "role": payload.role,
        })))
    } else {
        Err(ApiError::from_mutation(outcome, "Failed to update role"))
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusChangeRequest {
    pub active: bool,
}

/// PUT /api/users/{id}/status - activate or deactivate a user.
pub async fn user_status_put(
    token: BearerToken,
    Path(id): Path<String>,
    Json(payload): Json<StatusChangeRequest>,
) -> ApiResult<Value> {
    let gateway = super::gateway_for(&token)?;
    let outcome = gateway.set_active(&id, payload.active).await?;

    if outcome.succeeded() {
        Ok(ApiResponse::success(json!({
            "id": id,
            "active": payload.active,
        })))
    } else {
        Err(ApiError::from_mutation(
            outcome,
            "Failed to update user status",
        ))
    }
}
