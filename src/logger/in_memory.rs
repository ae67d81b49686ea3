use crate::logger::AuditLogger;
use crate::models::{AuditAction, AuditLogEntry};
use log::debug;

#[derive(Debug, Default)]
pub struct InMemoryAuditLogger {
    logs: Vec<AuditLogEntry>,
}

impl InMemoryAuditLogger {
    pub fn new() -> Self {
        InMemoryAuditLogger { logs: Vec::new() }
    }

    pub fn get_logs(&self) -> &[AuditLogEntry] {
        &self.logs
    }

    pub fn count(&self, action: AuditAction) -> usize {
        self.logs.iter().filter(|e| e.action == action).count()
    }
}

impl AuditLogger for InMemoryAuditLogger {
    fn log(&mut self, entry: AuditLogEntry) {
        debug!("Audit {:?} for event {}", entry.action, entry.event_id);
        self.logs.push(entry);
    }
}
