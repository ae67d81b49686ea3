use crate::error::LedgerError;
use crate::ledger::Ledger;
use crate::report::round_cents;
use log::debug;
use rust_decimal::prelude::ToPrimitive;
use serde_json::{Value, json};

// Generates Chart.js configuration for visualizing member balances of an event
pub struct Visualization;

impl Visualization {
    /// Generates a Chart.js bar chart configuration for member balances.
    ///
    /// Balances are rounded to cents before plotting.
    pub fn balance_chart(ledger: &Ledger, currency_symbol: &str) -> Result<Value, LedgerError> {
        debug!(
            "Generating balance chart for event {} with {} transactions",
            ledger.name(),
            ledger.transactions().len()
        );

        let mut labels: Vec<String> = Vec::new();
        let mut data: Vec<f64> = Vec::new();
        for member in ledger.members() {
            let balance = round_cents(member.balance()).to_f64().ok_or_else(|| {
                LedgerError::Serialization(format!(
                    "Balance of {} cannot be plotted",
                    member.name()
                ))
            })?;
            labels.push(member.name().to_string());
            data.push(balance);
        }

        // Creditors green, debtors red
        let (background_colors, border_colors): (Vec<String>, Vec<String>) = data
            .iter()
            .map(|balance| {
                let (r, g, b) = if *balance >= 0.0 {
                    (75, 192, 192)
                } else {
                    (255, 99, 132)
                };
                (
                    format!("rgba({}, {}, {}, 0.6)", r, g, b),
                    format!("rgba({}, {}, {}, 1)", r, g, b),
                )
            })
            .unzip();

        let chart_config = json!({
            "type": "bar",
            "data": {
                "labels": labels,
                "datasets": [{
                    "label": "Member Balances",
                    "data": data,
                    "backgroundColor": background_colors,
                    "borderColor": border_colors,
                    "borderWidth": 1
                }]
            },
            "options": {
                "scales": {
                    "y": {
                        "beginAtZero": true,
                        "title": {
                            "display": true,
                            "text": format!("Balance ({})", currency_symbol)
                        }
                    },
                    "x": {
                        "title": {
                            "display": true,
                            "text": "Members"
                        }
                    }
                },
                "plugins": {
                    "title": {
                        "display": true,
                        "text": format!("Balances for Event: {}", ledger.name())
                    }
                }
            }
        });

        debug!("Generated Chart.js configuration for event {}", ledger.id());
        Ok(chart_config)
    }
}
