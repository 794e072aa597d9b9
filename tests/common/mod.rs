#![allow(dead_code)]

use std::collections::HashMap;

use tradelens::domain::error::JournalError;
use tradelens::domain::trade::{parse_timestamp, Trade, TradeIntent, TradeOutcome, ZoneValidity};
use tradelens::ports::trade_port::TradePort;

pub struct MockTradePort {
    pub data: HashMap<String, Vec<Trade>>,
    pub errors: HashMap<String, String>,
}

impl MockTradePort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_trades(mut self, account: &str, trades: Vec<Trade>) -> Self {
        self.data.insert(account.to_string(), trades);
        self
    }

    pub fn with_error(mut self, account: &str, reason: &str) -> Self {
        self.errors.insert(account.to_string(), reason.to_string());
        self
    }
}

impl TradePort for MockTradePort {
    fn fetch_trades(&self, account: &str) -> Result<Vec<Trade>, JournalError> {
        if let Some(reason) = self.errors.get(account) {
            return Err(JournalError::TradeSource {
                reason: reason.clone(),
            });
        }
        self.data
            .get(account)
            .cloned()
            .ok_or_else(|| JournalError::TradeSource {
                reason: format!("no trade log for account {account}"),
            })
    }
}

pub fn make_trade(id: &str, ts: &str, net_pl: f64, outcome: TradeOutcome) -> Trade {
    Trade {
        id: id.to_string(),
        timestamp: parse_timestamp(ts).unwrap(),
        net_pl,
        outcome,
        risk_reward: 0.0,
        setup: Some("Breakout".to_string()),
    }
}

pub fn passing_intent() -> TradeIntent {
    TradeIntent {
        htf_bias_clear: true,
        zone_valid: true,
        liquidity_taken: true,
        structure_confirmed: true,
        entry_confirmed: true,
        zone_validity: ZoneValidity::Valid,
    }
}
