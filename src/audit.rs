use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use crate::models::AuditLog;
use crate::state::AdminStore;

pub fn log_audit(
    store: &mut AdminStore,
    action: &str,
    resource: Option<&str>,
    metadata: Option<Value>,
) {
    let entry = AuditLog {
        id: Uuid::new_v4(),
        action: action.to_string(),
        resource: resource.map(str::to_string),
        metadata,
        created_at: Utc::now(),
    };
    tracing::debug!(action, resource, "audit");
    store.audit_logs.push(entry);
}
