use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum AuditAction {
    CreateEvent,
    AddTransaction,
    RejectTransaction,
    Reconcile,
}

#[derive(Clone, Debug)]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub event_id: Uuid,
    pub action: AuditAction,
    pub payload: String,
    pub created_at: DateTime<Utc>,
}

impl AuditLogEntry {
    // Create audit log entry with structured JSON payload
    pub fn new<T: Serialize>(event_id: Uuid, action: AuditAction, payload: &T) -> Self {
        AuditLogEntry {
            id: Uuid::new_v4(),
            event_id,
            action,
            payload: serde_json::to_string(payload).unwrap_or_default(),
            created_at: Utc::now(),
        }
    }

    pub fn payload_json(&self) -> serde_json::Value {
        serde_json::from_str(&self.payload).unwrap_or_default()
    }
}
