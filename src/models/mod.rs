pub mod audit;
pub mod member;
pub mod settlement;
pub mod transaction;

pub use audit::{AuditAction, AuditLogEntry};
pub use member::{Member, MemberId};
pub use settlement::Transfer;
pub use transaction::Transaction;
