use crate::constants::DEFAULT_CURRENCY_SYMBOL;
use crate::settlement::SettlementStrategy;
use dotenv::dotenv;
use std::env;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: String,
    pub currency_symbol: String,
    pub settlement_strategy: SettlementStrategy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            settlement_strategy: SettlementStrategy::Greedy,
        }
    }
}

impl Config {
    /// Reads `.env` and the process environment.
    pub fn from_env() -> Self {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            log_level: lookup("LOG_LEVEL").unwrap_or(defaults.log_level),
            currency_symbol: lookup("CURRENCY_SYMBOL").unwrap_or(defaults.currency_symbol),
            settlement_strategy: lookup("SETTLEMENT_STRATEGY")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.settlement_strategy),
        }
    }
}
