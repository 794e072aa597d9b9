//! CSV trade-log adapter.
//!
//! Reads an exported journal with header row
//! `id,timestamp,net_pl,outcome,risk_reward,setup`. A malformed timestamp
//! or non-numeric P&L anywhere in the file fails the whole load with
//! `InvalidInput`; no partial history reaches the engine.

use crate::domain::error::JournalError;
use crate::domain::trade::{parse_timestamp, Trade, TradeOutcome};
use crate::ports::trade_port::TradePort;
use log::debug;
use std::fs;
use std::path::PathBuf;

pub struct CsvTradeAdapter {
    base_path: PathBuf,
}

impl CsvTradeAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, account: &str) -> PathBuf {
        if self.base_path.is_file() {
            self.base_path.clone()
        } else {
            self.base_path.join(format!("{account}.csv"))
        }
    }
}

fn field<'a>(record: &'a csv::StringRecord, index: usize, name: &str) -> Result<&'a str, JournalError> {
    record.get(index).ok_or_else(|| JournalError::TradeSource {
        reason: format!("missing {name} column"),
    })
}

fn parse_outcome(raw: &str) -> Result<TradeOutcome, JournalError> {
    match raw {
        "Win" => Ok(TradeOutcome::Win),
        "Loss" => Ok(TradeOutcome::Loss),
        "BreakEven" => Ok(TradeOutcome::BreakEven),
        "Pending" => Ok(TradeOutcome::Pending),
        other => Err(JournalError::InvalidInput {
            reason: format!("unknown outcome {other:?}"),
        }),
    }
}

impl TradePort for CsvTradeAdapter {
    fn fetch_trades(&self, account: &str) -> Result<Vec<Trade>, JournalError> {
        let path = self.csv_path(account);
        let content = fs::read_to_string(&path).map_err(|e| JournalError::TradeSource {
            reason: format!("failed to read {}: {e}", path.display()),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut trades = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| JournalError::TradeSource {
                reason: format!("CSV parse error: {e}"),
            })?;

            let id = field(&record, 0, "id")?.to_string();
            let timestamp = parse_timestamp(field(&record, 1, "timestamp")?)?;

            let net_pl: f64 = field(&record, 2, "net_pl")?.parse().map_err(|e| {
                JournalError::InvalidInput {
                    reason: format!("non-numeric net_pl: {e}"),
                }
            })?;

            let outcome = parse_outcome(field(&record, 3, "outcome")?)?;

            let rr_raw = field(&record, 4, "risk_reward")?;
            let risk_reward: f64 = if rr_raw.is_empty() {
                0.0
            } else {
                rr_raw.parse().map_err(|e| JournalError::InvalidInput {
                    reason: format!("non-numeric risk_reward: {e}"),
                })?
            };

            let setup_raw = field(&record, 5, "setup")?;
            let setup = if setup_raw.is_empty() {
                None
            } else {
                Some(setup_raw.to_string())
            };

            trades.push(Trade {
                id,
                timestamp,
                net_pl,
                outcome,
                risk_reward,
                setup,
            });
        }

        debug!("loaded {} trades from {}", trades.len(), path.display());
        Ok(trades)
    }
}
