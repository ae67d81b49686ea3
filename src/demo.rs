//! The concert scenario used by the binary.

use crate::error::LedgerError;
use crate::logger::AuditLogger;
use crate::models::Member;
use crate::service::{ExpenseEntry, ExpenseService};

/// Builds the concert event: Annie, Sally and Bill share tickets, dinner,
/// drinks and a taxi.
pub fn concert(audit_logger: &mut dyn AuditLogger) -> Result<ExpenseService<'_>, LedgerError> {
    let annie = Member::new("Annie");
    let sally = Member::new("Sally");
    let bill = Member::new("Bill");
    let (annie_id, sally_id, bill_id) = (annie.id(), sally.id(), bill.id());

    let mut service = ExpenseService::create_event("Concert", vec![annie, sally, bill], audit_logger)?;
    service.add_transactions([
        ExpenseEntry::new("tickets", 180, annie_id),
        ExpenseEntry::new("dinner", 75, sally_id),
        ExpenseEntry::new("drinks", 19, bill_id),
        ExpenseEntry::new("taxi", 16, bill_id),
    ]);
    Ok(service)
}
