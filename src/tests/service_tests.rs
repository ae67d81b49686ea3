use crate::error::LedgerError;
use crate::logger::in_memory::InMemoryAuditLogger;
use crate::models::{AuditAction, Member};
use crate::service::{ExpenseEntry, ExpenseService};
use crate::settlement::SettlementStrategy;
use crate::tests::concert_members;
use rust_decimal_macros::dec;

#[test]
fn test_create_event_is_audited() {
    let _ = env_logger::try_init();
    let mut audit_logger = InMemoryAuditLogger::new();
    let (members, ..) = concert_members();

    let service = ExpenseService::create_event("Concert", members, &mut audit_logger).unwrap();
    let event_id = service.ledger().id();
    drop(service);

    let logs = audit_logger.get_logs();
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].action, AuditAction::CreateEvent);
    assert_eq!(logs[0].event_id, event_id);
    assert_eq!(logs[0].payload_json()["members"][2], "Bill");
}

#[test]
fn test_duplicate_members_abort_setup() {
    let _ = env_logger::try_init();
    let mut audit_logger = InMemoryAuditLogger::new();

    let result = ExpenseService::create_event(
        "Concert",
        vec![Member::new("Annie"), Member::new("Annie")],
        &mut audit_logger,
    );

    assert!(matches!(result, Err(LedgerError::DuplicateParticipant(_))));
    assert!(audit_logger.get_logs().is_empty());
}

#[test]
fn test_batch_skips_failures_and_continues() {
    let _ = env_logger::try_init();
    let mut audit_logger = InMemoryAuditLogger::new();
    let (members, annie, sally, bill) = concert_members();
    let outsider = Member::new("Mallory");
    let mut service = ExpenseService::create_event("Concert", members, &mut audit_logger).unwrap();

    let outcome = service.add_transactions([
        ExpenseEntry::new("tickets", 180, annie),
        ExpenseEntry::new("refund", -5, sally),
        ExpenseEntry::new("dinner", 75, sally),
        ExpenseEntry::new("gatecrash", 10, outsider.id()),
        ExpenseEntry::new("drinks", 19, bill),
        ExpenseEntry::new("taxi", 16, bill),
    ]);

    assert_eq!(outcome.accepted.len(), 4);
    assert_eq!(outcome.rejected.len(), 2);
    assert_eq!(outcome.rejected[0].index, 1);
    assert_eq!(outcome.rejected[0].description, "refund");
    assert!(matches!(outcome.rejected[0].error, LedgerError::InvalidAmount(_)));
    assert_eq!(outcome.rejected[1].index, 3);
    assert_eq!(
        outcome.rejected[1].error,
        LedgerError::InvalidPayer(outsider.id())
    );
    assert!(outcome.rejected.iter().all(|r| r.error.is_recoverable()));
    assert_eq!(service.ledger().total_amount(), dec!(290));
    drop(service);

    assert_eq!(audit_logger.count(AuditAction::AddTransaction), 4);
    assert_eq!(audit_logger.count(AuditAction::RejectTransaction), 2);
    let rejected = audit_logger
        .get_logs()
        .iter()
        .find(|e| e.action == AuditAction::RejectTransaction)
        .unwrap();
    assert_eq!(rejected.payload_json()["description"], "refund");
}

#[test]
fn test_reconcile_reports_opening_balances_and_plan() {
    let _ = env_logger::try_init();
    let mut audit_logger = InMemoryAuditLogger::new();
    let mut service = crate::demo::concert(&mut audit_logger).unwrap();

    let outcome = service.reconcile();

    assert_eq!(outcome.transfers.len(), 2);
    assert_eq!(outcome.report.total, dec!(290.00));
    assert_eq!(outcome.report.balances[0].balance, dec!(83.33));
    assert_eq!(outcome.report.transfers[0].from, "Sally");
    assert_eq!(outcome.report.transfers[1].amount, dec!(61.67));
    assert!(service.ledger().is_settled());
    assert!(service.report().balances.iter().all(|b| b.balance.is_zero()));

    let second = service.reconcile_with(SettlementStrategy::Minimize);
    assert!(second.transfers.is_empty());
    drop(service);

    assert_eq!(audit_logger.count(AuditAction::Reconcile), 2);
    let logs = audit_logger.get_logs();
    assert_eq!(logs.len(), 7);
    assert_eq!(logs[5].payload_json()["strategy"], "greedy");
}

#[test]
fn test_single_rejection_surfaces_to_caller() {
    let mut audit_logger = InMemoryAuditLogger::new();
    let (members, annie, ..) = concert_members();
    let mut service = ExpenseService::create_event("Concert", members, &mut audit_logger).unwrap();

    let err = service.add_transaction("free", dec!(0.001), annie).unwrap_err();
    assert_eq!(err, LedgerError::InvalidAmount(dec!(0)));
    assert!(err.is_recoverable());

    let ok = service.add_transaction("paid", dec!(12.345), annie).unwrap();
    assert_eq!(ok.amount(), dec!(12.34));
}
