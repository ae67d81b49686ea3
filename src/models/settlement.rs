use super::member::MemberId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A single peer-to-peer payment produced by reconciliation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transfer {
    pub from: MemberId,
    pub to: MemberId,
    pub amount: Decimal,
}

impl Transfer {
    pub fn new(from: MemberId, to: MemberId, amount: Decimal) -> Self {
        Transfer { from, to, amount }
    }
}
