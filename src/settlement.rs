//! Reconciliation of member balances into peer-to-peer transfers.

use crate::models::{Member, Transfer};
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum SettlementState {
    #[default]
    Unsettled,
    Settling,
    Settled,
}

/// How debtors are matched against creditors.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementStrategy {
    /// Sweep creditors and debtors in member list order.
    #[default]
    Greedy,
    /// Always match the largest creditor with the largest debtor.
    Minimize,
}

impl SettlementStrategy {
    pub fn settle(self, members: &mut [Member]) -> Vec<Transfer> {
        match self {
            SettlementStrategy::Greedy => reconcile(members),
            SettlementStrategy::Minimize => minimize_transfers(members),
        }
    }
}

impl std::fmt::Display for SettlementStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SettlementStrategy::Greedy => "greedy",
            SettlementStrategy::Minimize => "minimize",
        };
        write!(f, "{}", s)
    }
}

impl std::str::FromStr for SettlementStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(SettlementStrategy::Greedy),
            "minimize" | "minimise" => Ok(SettlementStrategy::Minimize),
            other => Err(format!("Unknown settlement strategy: {}", other)),
        }
    }
}

/// Zeroes every balance with a list-order greedy sweep.
///
/// Each creditor, in member order, is paid off by the debtors in member order
/// until its balance reaches zero. The transfer count is not minimized and the
/// output order depends on the member order.
pub fn reconcile(members: &mut [Member]) -> Vec<Transfer> {
    let mut transfers = Vec::new();

    for x in 0..members.len() {
        if members[x].balance() <= Decimal::ZERO {
            continue;
        }

        for y in 0..members.len() {
            if members[y].balance() > Decimal::ZERO {
                continue;
            }

            let amount = (-members[y].balance()).min(members[x].balance());
            if amount.is_zero() {
                continue;
            }

            debug!(
                "{} pays {} {}",
                members[y].name(),
                members[x].name(),
                amount
            );
            transfers.push(Transfer::new(members[y].id(), members[x].id(), amount));
            members[y].credit(amount);
            members[x].debit(amount);
        }
    }

    transfers
}

/// Zeroes every balance by repeatedly matching the largest creditor with the
/// largest debtor. Ties go to the member listed first.
pub fn minimize_transfers(members: &mut [Member]) -> Vec<Transfer> {
    let mut transfers = Vec::new();

    loop {
        let creditor = members
            .iter()
            .enumerate()
            .filter(|(_, m)| m.balance() > Decimal::ZERO)
            .min_by_key(|(_, m)| Reverse(m.balance()))
            .map(|(idx, _)| idx);
        let debtor = members
            .iter()
            .enumerate()
            .filter(|(_, m)| m.balance() < Decimal::ZERO)
            .min_by_key(|(_, m)| m.balance())
            .map(|(idx, _)| idx);

        let (Some(c), Some(d)) = (creditor, debtor) else {
            break;
        };

        let amount = members[c].balance().min(-members[d].balance());
        debug!("{} pays {} {}", members[d].name(), members[c].name(), amount);
        transfers.push(Transfer::new(members[d].id(), members[c].id(), amount));
        members[d].credit(amount);
        members[c].debit(amount);
    }

    transfers
}
