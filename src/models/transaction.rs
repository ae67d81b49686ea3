use super::member::MemberId;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

/// One accepted contribution, split equally among every event participant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Transaction {
    id: Uuid,
    description: String,
    amount: Decimal,
    payer: MemberId,
    recorded_at: DateTime<Utc>,
}

impl Transaction {
    pub(crate) fn new(description: String, amount: Decimal, payer: MemberId) -> Self {
        Transaction {
            id: Uuid::new_v4(),
            description,
            amount,
            payer,
            recorded_at: Utc::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn payer(&self) -> MemberId {
        self.payer
    }

    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
