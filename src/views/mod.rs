use serde::Serialize;
use serde_json::Value;

/// Dashboard statistics derived from upstream record sets.
///
/// Recomputed from fresh upstream calls on every request; never
/// cached or persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_users: usize,
    pub active_users: usize,
    pub admin_users: usize,
    pub total_activities: usize,
    pub total_schedules: usize,
}

impl DashboardStats {
    pub fn compose(users: &[Value], total_activities: usize, total_schedules: usize) -> Self {
        let active_users = users
            .iter()
            .filter(|user| {
                user.get("isActive")
                    .and_then(Value::as_bool)
                    .unwrap_or(false)
            })
            .count();
        let admin_users = users
            .iter()
            .filter(|user| user.get("role").and_then(Value::as_str) == Some("admin"))
            .count();

        Self {
            total_users: users.len(),
            active_users,
            admin_users,
            total_activities,
            total_schedules,
        }
    }
}
