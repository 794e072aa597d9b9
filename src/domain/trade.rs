//! Trade records and trade-intent checklists.
//!
//! A [`Trade`] is an already-closed (or pending) journal entry consumed by the
//! performance aggregator. A [`TradeIntent`] is the pre-entry checklist a
//! trader fills in before logging a trade; it is what the rule validator
//! gates on. Both are immutable inputs; the engine never mutates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::JournalError;

/// Setup label meaning "no declared strategy".
pub const UNKNOWN_SETUP: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TradeOutcome {
    Win,
    Loss,
    BreakEven,
    Pending,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    pub id: String,
    /// Creation instant, interpreted in UTC. Drives ordering and
    /// session/day attribution.
    pub timestamp: DateTime<Utc>,
    /// Signed realized profit/loss.
    pub net_pl: f64,
    pub outcome: TradeOutcome,
    /// Realized reward-to-risk ratio; `0.0` means "not computed" and is
    /// excluded from averaging.
    pub risk_reward: f64,
    /// Strategy label; `None` or [`UNKNOWN_SETUP`] marks the trade as
    /// having no declared strategy.
    pub setup: Option<String>,
}

impl Trade {
    pub fn has_declared_setup(&self) -> bool {
        match &self.setup {
            Some(s) => !s.is_empty() && s != UNKNOWN_SETUP,
            None => false,
        }
    }

    pub fn utc_hour(&self) -> u32 {
        use chrono::Timelike;
        self.timestamp.hour()
    }
}

/// Whether the entry zone has been validated, carried on the intent
/// independently of the `zone_valid` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneValidity {
    Valid,
    Invalid,
    Untested,
}

/// Pre-entry checklist evaluated by the rule validator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeIntent {
    pub htf_bias_clear: bool,
    pub zone_valid: bool,
    pub liquidity_taken: bool,
    pub structure_confirmed: bool,
    pub entry_confirmed: bool,
    pub zone_validity: ZoneValidity,
}

/// Parse an RFC 3339 timestamp into UTC.
///
/// Used at the adapter boundary so malformed timestamps fail the whole
/// load with [`JournalError::InvalidInput`] before the engine runs.
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, JournalError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| JournalError::InvalidInput {
            reason: format!("unparseable timestamp {raw:?}: {e}"),
        })
}
