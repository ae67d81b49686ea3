//! Text and JSON rendering of event balances and settlement plans.

use crate::error::LedgerError;
use crate::ledger::{Ledger, round_amount};
use crate::models::{Member, MemberId, Transfer};
use rust_decimal::Decimal;
use serde::Serialize;

/// Rounds to cents and pins the scale so `290` renders as `290.00`.
pub fn round_cents(amount: Decimal) -> Decimal {
    let mut rounded = round_amount(amount);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    rounded
}

pub fn format_money(symbol: &str, amount: Decimal) -> String {
    format!("{}{}", symbol, round_cents(amount))
}

pub fn balance_line(symbol: &str, name: &str, balance: Decimal) -> String {
    format!("{} has balance: {}", name, format_money(symbol, balance))
}

pub fn member_balance_line(symbol: &str, member: &Member) -> String {
    balance_line(symbol, member.name(), member.balance())
}

pub fn total_line(symbol: &str, total: Decimal, share: Decimal) -> String {
    format!(
        "Total: {}, that is {} each.",
        format_money(symbol, total),
        format_money(symbol, share)
    )
}

pub fn transfer_line(symbol: &str, from: &str, to: &str, amount: Decimal) -> String {
    format!("{} pays {} {}", from, to, format_money(symbol, amount))
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BalanceLine {
    pub member: String,
    pub balance: Decimal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TransferLine {
    pub from: String,
    pub to: String,
    pub amount: Decimal,
}

/// Snapshot of an event for presentation. Amounts are rounded to cents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedgerReport {
    pub event: String,
    pub total: Decimal,
    pub share_each: Decimal,
    pub balances: Vec<BalanceLine>,
    pub transfers: Vec<TransferLine>,
}

impl LedgerReport {
    pub fn from_ledger(ledger: &Ledger) -> Self {
        LedgerReport {
            event: ledger.name().to_string(),
            total: round_cents(ledger.total_amount()),
            share_each: round_cents(ledger.current_total_share()),
            balances: ledger
                .members()
                .iter()
                .map(|m| BalanceLine {
                    member: m.name().to_string(),
                    balance: round_cents(m.balance()),
                })
                .collect(),
            transfers: Vec::new(),
        }
    }

    /// Attaches a settlement plan, resolving member ids to names through `ledger`.
    pub fn with_transfers(mut self, ledger: &Ledger, transfers: &[Transfer]) -> Self {
        let name_of = |id: MemberId| {
            ledger
                .member(id)
                .map(|m| m.name().to_string())
                .unwrap_or_else(|| id.to_string())
        };
        self.transfers = transfers
            .iter()
            .map(|t| TransferLine {
                from: name_of(t.from),
                to: name_of(t.to),
                amount: round_cents(t.amount),
            })
            .collect();
        self
    }

    pub fn render_text(&self, symbol: &str) -> String {
        let mut lines = vec![total_line(symbol, self.total, self.share_each), String::new()];
        lines.extend(
            self.balances
                .iter()
                .map(|b| balance_line(symbol, &b.member, b.balance)),
        );
        if !self.transfers.is_empty() {
            lines.push(String::new());
            lines.extend(
                self.transfers
                    .iter()
                    .map(|t| transfer_line(symbol, &t.from, &t.to, t.amount)),
            );
        }
        lines.join("\n")
    }

    pub fn to_json(&self) -> Result<String, LedgerError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
