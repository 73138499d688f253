use serde_json::Value;

use crate::gateway::GatewayResult;
use crate::middleware::bearer::BearerToken;
use crate::middleware::response::{ApiResponse, ApiResult};
use crate::views::DashboardStats;

/// GET /api/dashboard - user, activity and schedule counts composed
/// from three independent upstream reads. The reads have no ordering
/// dependency, so they are issued concurrently; a failed read degrades
/// that count to zero instead of failing the whole view.
pub async fn dashboard_get(token: BearerToken) -> ApiResult<DashboardStats> {
    let gateway = super::gateway_for(&token)?;

    let (users, activities, schedules) = tokio::join!(
        gateway.list_users(),
        gateway.list_activities(),
        gateway.list_activity_instances(),
    );

    let users = records_or_empty(users, "users");
    let activities = records_or_empty(activities, "activities");
    let schedules = records_or_empty(schedules, "activity instances");

    Ok(ApiResponse::success(DashboardStats::compose(
        &users,
        activities.len(),
        schedules.len(),
    )))
}

fn records_or_empty(result: GatewayResult<Vec<Value>>, resource: &str) -> Vec<Value> {
    result.unwrap_or_else(|err| {
        tracing::warn!("dashboard: failed to fetch {}: {}", resource, err);
        Vec::new()
    })
}
