use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a participant, independent of its display name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemberId(Uuid);

impl MemberId {
    pub fn new() -> Self {
        MemberId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for MemberId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for MemberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// A participant of an event and their running net balance.
///
/// A positive balance means the group owes the member money, a negative one
/// means the member owes the group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Member {
    id: MemberId,
    name: String,
    balance: Decimal,
}

impl Member {
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_balance(name, Decimal::ZERO)
    }

    pub fn with_balance(name: impl Into<String>, balance: Decimal) -> Self {
        Member {
            id: MemberId::new(),
            name: name.into(),
            balance,
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub(crate) fn set_balance(&mut self, balance: Decimal) {
        self.balance = balance;
    }

    pub(crate) fn credit(&mut self, amount: Decimal) {
        self.balance += amount;
    }

    pub(crate) fn debit(&mut self, amount: Decimal) {
        self.balance -= amount;
    }
}
