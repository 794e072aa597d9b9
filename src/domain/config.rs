//! Engine configuration and validation.
//!
//! The `[engine]` section selects the profit-factor formula and the
//! in-session trading window used by the `outside_session` violation
//! counter. Values are validated before any aggregation runs.

use crate::ports::config_port::ConfigPort;

use super::error::JournalError;

/// Which profit-factor formula the aggregator reports.
///
/// `Legacy` reproduces the original journal's formula (|total P&L| over
/// |total P&L - final equity|), kept for output compatibility even though
/// it is degenerate. `Standard` is gross profit over gross loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfitFactorMode {
    #[default]
    Legacy,
    Standard,
}

impl ProfitFactorMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "legacy" => Some(ProfitFactorMode::Legacy),
            "standard" => Some(ProfitFactorMode::Standard),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EngineConfig {
    pub profit_factor: ProfitFactorMode,
    /// UTC hour at which the sanctioned trading window opens (inclusive).
    pub session_open_hour: u32,
    /// UTC hour at which the window closes (exclusive).
    pub session_close_hour: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            profit_factor: ProfitFactorMode::Legacy,
            session_open_hour: 8,
            session_close_hour: 21,
        }
    }
}

impl EngineConfig {
    /// Load and validate the `[engine]` section; absent keys keep defaults.
    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, JournalError> {
        let defaults = EngineConfig::default();

        let profit_factor = match config.get_string("engine", "profit_factor") {
            Some(raw) => ProfitFactorMode::parse(&raw).ok_or_else(|| {
                JournalError::ConfigInvalid {
                    section: "engine".to_string(),
                    key: "profit_factor".to_string(),
                    reason: format!("expected legacy or standard, got {raw:?}"),
                }
            })?,
            None => defaults.profit_factor,
        };

        let open = config.get_int(
            "engine",
            "session_open_hour",
            defaults.session_open_hour as i64,
        );
        let close = config.get_int(
            "engine",
            "session_close_hour",
            defaults.session_close_hour as i64,
        );

        if !(0..24).contains(&open) {
            return Err(JournalError::ConfigInvalid {
                section: "engine".to_string(),
                key: "session_open_hour".to_string(),
                reason: format!("must be in 0..24, got {open}"),
            });
        }
        if !(1..=24).contains(&close) {
            return Err(JournalError::ConfigInvalid {
                section: "engine".to_string(),
                key: "session_close_hour".to_string(),
                reason: format!("must be in 1..=24, got {close}"),
            });
        }
        if open >= close {
            return Err(JournalError::ConfigInvalid {
                section: "engine".to_string(),
                key: "session_open_hour".to_string(),
                reason: format!("open hour {open} must precede close hour {close}"),
            });
        }

        Ok(EngineConfig {
            profit_factor,
            session_open_hour: open as u32,
            session_close_hour: close as u32,
        })
    }

    pub fn in_session(&self, hour: u32) -> bool {
        (self.session_open_hour..self.session_close_hour).contains(&hour)
    }
}
