pub mod config;
pub mod constants;
pub mod demo;
pub mod error;
pub mod ledger;
pub mod logger;
pub mod models;
pub mod report;
pub mod service;
pub mod settlement;
pub mod visualization;

pub use config::Config;
pub use error::LedgerError;
pub use ledger::Ledger;
pub use logger::in_memory::InMemoryAuditLogger;
pub use models::{Member, MemberId, Transaction, Transfer};
pub use report::LedgerReport;
pub use service::ExpenseService;
pub use settlement::{SettlementState, SettlementStrategy};
pub use visualization::Visualization;

#[cfg(test)]
mod tests;
