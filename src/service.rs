use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::logger::AuditLogger;
use crate::models::*;
use crate::report::LedgerReport;
use crate::settlement::SettlementStrategy;
use log::{error, info, warn};
use rust_decimal::Decimal;
use serde_json::json;

/// A contribution waiting to be recorded.
#[derive(Clone, Debug)]
pub struct ExpenseEntry {
    pub description: String,
    pub amount: Decimal,
    pub payer: MemberId,
}

impl ExpenseEntry {
    pub fn new(description: impl Into<String>, amount: impl Into<Decimal>, payer: MemberId) -> Self {
        ExpenseEntry {
            description: description.into(),
            amount: amount.into(),
            payer,
        }
    }
}

#[derive(Debug)]
pub struct RejectedTransaction {
    pub index: usize,
    pub description: String,
    pub error: LedgerError,
}

#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub accepted: Vec<Transaction>,
    pub rejected: Vec<RejectedTransaction>,
}

#[derive(Debug)]
pub struct SettlementOutcome {
    pub transfers: Vec<Transfer>,
    /// Balances as they stood before settling, plus the transfer plan.
    pub report: LedgerReport,
}

/// Drives one event and records every action in the audit log.
pub struct ExpenseService<'a> {
    ledger: Ledger,
    pub audit_logger: &'a mut dyn AuditLogger,
}

impl<'a> ExpenseService<'a> {
    pub fn create_event(
        name: impl Into<String>,
        members: Vec<Member>,
        audit_logger: &'a mut dyn AuditLogger,
    ) -> Result<Self, LedgerError> {
        let ledger = Ledger::new(name, members)
            .inspect_err(|e| error!("Event setup failed: {}", e))?;

        audit_logger.log(AuditLogEntry::new(
            ledger.id(),
            AuditAction::CreateEvent,
            &json!({
                "event": ledger.name(),
                "members": ledger.members().iter().map(|m| m.name()).collect::<Vec<_>>(),
            }),
        ));

        Ok(Self {
            ledger,
            audit_logger,
        })
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_ledger(self) -> Ledger {
        self.ledger
    }

    pub fn add_transaction(
        &mut self,
        description: impl Into<String>,
        amount: impl Into<Decimal>,
        payer: MemberId,
    ) -> Result<Transaction, LedgerError> {
        let description = description.into();
        let amount = amount.into();
        match self
            .ledger
            .add_transaction(description.clone(), amount, payer)
        {
            Ok(transaction) => {
                let transaction = transaction.clone();
                self.audit_logger.log(AuditLogEntry::new(
                    self.ledger.id(),
                    AuditAction::AddTransaction,
                    &json!({
                        "transaction_id": transaction.id(),
                        "description": transaction.description(),
                        "amount": transaction.amount(),
                        "payer_id": transaction.payer(),
                    }),
                ));
                Ok(transaction)
            }
            Err(e) => {
                warn!("Transaction error: {}. Skipping transaction '{}'", e, description);
                self.audit_logger.log(AuditLogEntry::new(
                    self.ledger.id(),
                    AuditAction::RejectTransaction,
                    &json!({
                        "description": description,
                        "amount": amount,
                        "payer_id": payer,
                        "reason": e.to_string(),
                    }),
                ));
                Err(e)
            }
        }
    }

    /// Records every entry in order. A rejected entry is reported and skipped,
    /// the rest of the batch is still applied.
    pub fn add_transactions<I>(&mut self, entries: I) -> BatchOutcome
    where
        I: IntoIterator<Item = ExpenseEntry>,
    {
        let mut outcome = BatchOutcome::default();
        for (index, entry) in entries.into_iter().enumerate() {
            match self.add_transaction(entry.description.clone(), entry.amount, entry.payer) {
                Ok(transaction) => outcome.accepted.push(transaction),
                Err(error) => outcome.rejected.push(RejectedTransaction {
                    index,
                    description: entry.description,
                    error,
                }),
            }
        }
        info!(
            "Batch for event '{}': {} accepted, {} rejected",
            self.ledger.name(),
            outcome.accepted.len(),
            outcome.rejected.len()
        );
        outcome
    }

    pub fn reconcile(&mut self) -> SettlementOutcome {
        self.reconcile_with(SettlementStrategy::Greedy)
    }

    pub fn reconcile_with(&mut self, strategy: SettlementStrategy) -> SettlementOutcome {
        let before = LedgerReport::from_ledger(&self.ledger);
        let transfers = self.ledger.reconcile_with(strategy);
        let report = before.with_transfers(&self.ledger, &transfers);

        self.audit_logger.log(AuditLogEntry::new(
            self.ledger.id(),
            AuditAction::Reconcile,
            &json!({
                "strategy": strategy,
                "transfers": transfers,
            }),
        ));

        SettlementOutcome { transfers, report }
    }

    pub fn report(&self) -> LedgerReport {
        LedgerReport::from_ledger(&self.ledger)
    }
}
