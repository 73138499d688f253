use serde_json::Value;

use crate::middleware::bearer::BearerToken;
use crate::middleware::response::{ApiResponse, ApiResult};

/// GET /api/activities - the activity catalog, normalized.
pub async fn activities_get(token: BearerToken) -> ApiResult<Vec<Value>> {
    let gateway = super::gateway_for(&token)?;
    let activities = gateway.list_activities().await?;
    Ok(ApiResponse::success(activities))
}

/// GET /api/schedules - activity instances, normalized.
pub async fn schedules_get(token: BearerToken) -> ApiResult<Vec<Value>> {
    let gateway = super::gateway_for(&token)?;
    let instances = gateway.list_activity_instances().await?;
    Ok(ApiResponse::success(instances))
}
