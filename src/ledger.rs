use crate::constants::{AMOUNT_SCALE, MAX_MEMBER_NAME_LENGTH, SHARE_SCALE};
use crate::error::{FieldError, LedgerError};
use crate::models::{Member, MemberId, Transaction, Transfer};
use crate::settlement::{SettlementState, SettlementStrategy};
use log::{debug, info, warn};
use rust_decimal::{Decimal, RoundingStrategy};
use std::collections::HashSet;
use uuid::Uuid;

/// Rounds a contribution to cents, half to even.
pub fn round_amount(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// A single event: a fixed set of participants and the contributions they made.
///
/// Every accepted transaction is split equally among all members, so the sum
/// of member balances stays at zero between operations.
#[derive(Clone, Debug)]
pub struct Ledger {
    id: Uuid,
    name: String,
    members: Vec<Member>,
    transactions: Vec<Transaction>,
    total: Decimal,
    state: SettlementState,
}

impl Ledger {
    pub fn new(name: impl Into<String>, members: Vec<Member>) -> Result<Self, LedgerError> {
        let name = name.into();
        if members.is_empty() {
            return Err(LedgerError::NoParticipants);
        }

        let mut names = HashSet::with_capacity(members.len());
        for member in &members {
            validate_member_name(member.name())?;
            if !names.insert(member.name()) {
                warn!("Event '{}' lists member '{}' twice", name, member.name());
                return Err(LedgerError::DuplicateParticipant(member.name().to_string()));
            }
        }

        let opening: Decimal = members.iter().map(Member::balance).sum();
        if !opening.is_zero() {
            warn!(
                "Event '{}' opens with balances summing to {}; settlement cannot zero them all",
                name, opening
            );
        }

        info!("Creating event '{}' with {} members", name, members.len());
        Ok(Ledger {
            id: Uuid::new_v4(),
            name,
            members,
            transactions: Vec::new(),
            total: Decimal::ZERO,
            state: SettlementState::Unsettled,
        })
    }

    /// Records a contribution paid by `payer` and splits it across all members.
    ///
    /// The amount is rounded to cents first. A rejected transaction leaves the
    /// ledger untouched.
    pub fn add_transaction(
        &mut self,
        description: impl Into<String>,
        amount: impl Into<Decimal>,
        payer: MemberId,
    ) -> Result<&Transaction, LedgerError> {
        let description = description.into();
        let amount = round_amount(amount.into());
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount(amount));
        }
        if !self.is_member(payer) {
            return Err(LedgerError::InvalidPayer(payer));
        }

        let count = Decimal::from(self.members.len());
        let share = (amount / count)
            .round_dp_with_strategy(SHARE_SCALE, RoundingStrategy::MidpointNearestEven);
        let overflow = || LedgerError::AmountOverflow(amount);
        // Payer absorbs the sub-share remainder so the credits match the debits exactly.
        let payer_credit = share
            .checked_mul(count - Decimal::ONE)
            .ok_or_else(overflow)?;
        let total = self.total.checked_add(amount).ok_or_else(overflow)?;
        let balances = self
            .members
            .iter()
            .map(|member| {
                if member.id() == payer {
                    member.balance().checked_add(payer_credit)
                } else {
                    member.balance().checked_sub(share)
                }
            })
            .collect::<Option<Vec<_>>>()
            .ok_or_else(overflow)?;

        for (member, balance) in self.members.iter_mut().zip(balances) {
            member.set_balance(balance);
        }
        debug!(
            "Added '{}' of {} paid by {} ({} each)",
            description, amount, payer, share
        );
        self.total = total;
        self.state = SettlementState::Unsettled;
        let index = self.transactions.len();
        self.transactions
            .push(Transaction::new(description, amount, payer));
        Ok(&self.transactions[index])
    }

    /// Settles every balance with the list-order greedy sweep.
    pub fn reconcile(&mut self) -> Vec<Transfer> {
        self.reconcile_with(SettlementStrategy::Greedy)
    }

    pub fn reconcile_with(&mut self, strategy: SettlementStrategy) -> Vec<Transfer> {
        self.state = SettlementState::Settling;
        let transfers = strategy.settle(&mut self.members);
        // Unbalanced opening balances can leave residue the sweep cannot clear.
        self.state = if self.is_settled() {
            SettlementState::Settled
        } else {
            SettlementState::Unsettled
        };
        info!(
            "Reconciled event '{}' with {} transfers ({})",
            self.name,
            transfers.len(),
            strategy
        );
        transfers
    }

    /// Average contribution per member. Reporting only.
    pub fn current_total_share(&self) -> Decimal {
        self.total / Decimal::from(self.members.len())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.iter().find(|m| m.id() == id)
    }

    pub fn member_by_name(&self, name: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.name() == name)
    }

    pub fn is_member(&self, id: MemberId) -> bool {
        self.members.iter().any(|m| m.id() == id)
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn total_amount(&self) -> Decimal {
        self.total
    }

    pub fn balances(&self) -> Vec<(MemberId, Decimal)> {
        self.members.iter().map(|m| (m.id(), m.balance())).collect()
    }

    /// Sum of all member balances; zero for any ledger that opened balanced.
    pub fn net_balance(&self) -> Decimal {
        self.members.iter().map(Member::balance).sum()
    }

    pub fn state(&self) -> SettlementState {
        self.state
    }

    pub fn is_settled(&self) -> bool {
        self.members.iter().all(|m| m.balance().is_zero())
    }
}

fn validate_member_name(name: &str) -> Result<(), LedgerError> {
    let field = "member_name";
    if name.trim().is_empty() {
        return Err(LedgerError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: "Invalid member name".to_string(),
                description: "Member name cannot be empty".to_string(),
            },
        ));
    }
    if name.chars().count() > MAX_MEMBER_NAME_LENGTH {
        return Err(LedgerError::InvalidInput(
            field.to_string(),
            FieldError {
                field: field.to_string(),
                title: "Member name too long".to_string(),
                description: format!(
                    "Member name cannot exceed {} characters",
                    MAX_MEMBER_NAME_LENGTH
                ),
            },
        ));
    }
    Ok(())
}
