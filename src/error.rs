use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use crate::models::MemberId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub title: String,
    pub description: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LedgerError {
    /// Two participants of the same event share a name
    #[error("A member name is added more than once: {0}")]
    DuplicateParticipant(String),

    /// An event needs at least one participant to divide a share
    #[error("An event needs at least one participant")]
    NoParticipants,

    /// Generic input validation error with detailed field information
    #[error("Invalid input for field `{0}`: {1:?}")]
    InvalidInput(String, FieldError),

    /// Amount rounds to zero or below
    #[error("Non-positive amount: {0}")]
    InvalidAmount(Decimal),

    /// Payer is not a participant of the event
    #[error("Payer {0} is not an event participant")]
    InvalidPayer(MemberId),

    /// Amount would overflow the event total or a member balance
    #[error("Amount {0} overflows the event balances")]
    AmountOverflow(Decimal),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl LedgerError {
    /// Recoverable errors reject a single transaction and leave the event usable.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount(_)
                | LedgerError::InvalidPayer(_)
                | LedgerError::AmountOverflow(_)
        )
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Serialization(err.to_string())
    }
}
