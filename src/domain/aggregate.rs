//! Performance aggregation over a user's trade history.
//!
//! Sorts the supplied trades chronologically and makes a single forward
//! pass, accumulating per-session and per-weekday P&L buckets, win/loss
//! tallies, a running equity curve, and rule-violation counters, then
//! derives the summary ratios. All accumulators are created fresh per
//! call; concurrent aggregations for different users cannot interfere.
//!
//! Ratio outputs are formatted as fixed-decimal strings (win rate to one
//! decimal, everything else to two) so display output is free of
//! floating-point noise; internal computation stays `f64`. An empty trade
//! collection never errors; every ratio degrades to its documented
//! zero/placeholder value.

use chrono::Datelike;
use serde::Serialize;
use std::collections::BTreeMap;

use super::config::{EngineConfig, ProfitFactorMode};
use super::session::{AttributionSession, ATTRIBUTION_SESSIONS};
use super::trade::{Trade, TradeOutcome};

/// Weekday bucket keys in declaration order; ties resolve to the earlier
/// entry.
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Procedural-rule violation counters.
///
/// `over_risk` is declared for output compatibility but never incremented:
/// the trade record carries no planned-risk field to compare against, so
/// the counter is always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Violations {
    pub over_risk: u32,
    pub outside_session: u32,
    pub no_strategy: u32,
}

/// Aggregated performance statistics for one user's trade history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub best_session: String,
    pub best_day: String,
    pub best_setup: String,
    pub win_rate: String,
    #[serde(rename = "avgRR")]
    pub avg_rr: String,
    pub expectancy: String,
    pub profit_factor: String,
    pub max_drawdown: String,
    pub max_drawdown_percent: String,
    pub recovery_factor: String,
    pub violations: Violations,
}

/// Running equity state, updated once per trade in chronological order.
///
/// Invariants: `peak` is monotonically non-decreasing and `max_drawdown`
/// is always >= 0.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EquityCurve {
    pub equity: f64,
    pub peak: f64,
    pub max_drawdown: f64,
}

impl EquityCurve {
    pub fn record(&mut self, net_pl: f64) {
        self.equity += net_pl;
        if self.equity > self.peak {
            self.peak = self.equity;
        }
        let drawdown = self.peak - self.equity;
        if drawdown > self.max_drawdown {
            self.max_drawdown = drawdown;
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    pl: f64,
    trades: u32,
}

#[derive(Debug, Clone, Copy, Default)]
struct SetupTally {
    wins: u32,
    total: u32,
}

/// Aggregate a user's full trade collection into a [`PerformanceSummary`].
///
/// The input need not be ordered; trades are sorted ascending by timestamp
/// with the trade id as a deterministic tiebreak. Pending trades count
/// toward P&L sums but not toward the win/loss tallies.
pub fn aggregate_performance(trades: &[Trade], config: &EngineConfig) -> PerformanceSummary {
    let mut ordered: Vec<&Trade> = trades.iter().collect();
    ordered.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.id.cmp(&b.id))
    });

    let mut total_pl = 0.0_f64;
    let mut wins = 0u32;
    let mut rr_sum = 0.0_f64;
    let mut rr_count = 0u32;
    let mut gross_profit = 0.0_f64;
    let mut gross_loss = 0.0_f64;
    let mut sessions = [Bucket::default(); 3];
    let mut days = [Bucket::default(); 7];
    let mut setups: BTreeMap<String, SetupTally> = BTreeMap::new();
    let mut curve = EquityCurve::default();
    let mut violations = Violations::default();

    for trade in &ordered {
        total_pl += trade.net_pl;
        if trade.net_pl > 0.0 {
            gross_profit += trade.net_pl;
        } else if trade.net_pl < 0.0 {
            gross_loss += trade.net_pl.abs();
        }

        // Only decided outcomes feed the win rate; break-even and pending
        // trades count toward the total but not as wins.
        if trade.outcome == TradeOutcome::Win {
            wins += 1;
        }

        // riskReward of 0 means "not computed"; keep it out of the average.
        if trade.risk_reward > 0.0 {
            rr_sum += trade.risk_reward;
            rr_count += 1;
        }

        let hour = trade.utc_hour();
        let session = &mut sessions[AttributionSession::classify(hour).index()];
        session.pl += trade.net_pl;
        session.trades += 1;

        let day = &mut days[trade.timestamp.weekday().num_days_from_monday() as usize];
        day.pl += trade.net_pl;
        day.trades += 1;

        curve.record(trade.net_pl);

        if !config.in_session(hour) {
            violations.outside_session += 1;
        }
        if trade.has_declared_setup() {
            let setup = trade.setup.as_deref().unwrap_or_default();
            let tally = setups.entry(setup.to_string()).or_default();
            tally.total += 1;
            if trade.outcome == TradeOutcome::Win {
                tally.wins += 1;
            }
        } else {
            violations.no_strategy += 1;
        }
    }

    let total = ordered.len() as u32;

    let best_session = best_bucket(
        sessions
            .iter()
            .enumerate()
            .map(|(i, b)| (ATTRIBUTION_SESSIONS[i].label(), b)),
    );
    let best_day = best_bucket(days.iter().enumerate().map(|(i, b)| (WEEKDAYS[i], b)));
    let best_setup = best_setup(&setups);

    let win_rate = if total > 0 {
        wins as f64 / total as f64 * 100.0
    } else {
        0.0
    };
    let avg_rr = if rr_count > 0 {
        rr_sum / rr_count as f64
    } else {
        0.0
    };
    let expectancy = if total > 0 {
        total_pl / total as f64
    } else {
        0.0
    };
    let profit_factor = match config.profit_factor {
        ProfitFactorMode::Legacy => legacy_profit_factor(total_pl, curve.equity),
        ProfitFactorMode::Standard => standard_profit_factor(gross_profit, gross_loss),
    };
    let max_drawdown_percent = if curve.peak > 0.0 {
        curve.max_drawdown / curve.peak * 100.0
    } else {
        0.0
    };
    let recovery_factor = if curve.max_drawdown > 0.0 {
        total_pl / curve.max_drawdown
    } else if total_pl > 0.0 {
        100.0
    } else {
        0.0
    };

    PerformanceSummary {
        best_session,
        best_day,
        best_setup,
        win_rate: fmt1(win_rate),
        avg_rr: fmt2(avg_rr),
        expectancy: fmt2(expectancy),
        profit_factor: fmt2(profit_factor),
        max_drawdown: fmt2(curve.max_drawdown),
        max_drawdown_percent: fmt2(max_drawdown_percent),
        recovery_factor: fmt2(recovery_factor),
        violations,
    }
}

/// Bucket key with the maximum summed P&L among buckets that saw at least
/// one trade; strict comparison so the first-declared key wins ties.
fn best_bucket<'a>(buckets: impl Iterator<Item = (&'a str, &'a Bucket)>) -> String {
    let mut best: Option<(&str, f64)> = None;
    for (label, bucket) in buckets {
        if bucket.trades == 0 {
            continue;
        }
        match best {
            Some((_, pl)) if bucket.pl <= pl => {}
            _ => best = Some((label, bucket.pl)),
        }
    }
    best.map(|(label, _)| label.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// Setup with the highest win rate among setups with at least one trade;
/// strict comparison over alphabetical map order for a deterministic tie
/// policy.
fn best_setup(setups: &BTreeMap<String, SetupTally>) -> String {
    let mut best: Option<(&str, f64)> = None;
    for (name, tally) in setups {
        if tally.total == 0 {
            continue;
        }
        let rate = tally.wins as f64 / tally.total as f64;
        match best {
            Some((_, r)) if rate <= r => {}
            _ => best = Some((name, rate)),
        }
    }
    best.map(|(name, _)| name.to_string())
        .unwrap_or_else(|| "N/A".to_string())
}

/// The original journal's formula: |total P&L| over |total P&L - final
/// equity|. With equity starting at zero the denominator is always zero,
/// so this reports 0.00; kept behind [`ProfitFactorMode::Legacy`] for
/// output compatibility.
fn legacy_profit_factor(total_pl: f64, final_equity: f64) -> f64 {
    let denom = (total_pl - final_equity).abs();
    if denom > 0.0 {
        total_pl.abs() / denom
    } else {
        0.0
    }
}

/// Gross profit over gross loss, capped at 100 when there are no losing
/// trades (mirrors the recovery-factor cap).
fn standard_profit_factor(gross_profit: f64, gross_loss: f64) -> f64 {
    if gross_loss > 0.0 {
        gross_profit / gross_loss
    } else if gross_profit > 0.0 {
        100.0
    } else {
        0.0
    }
}

fn fmt1(value: f64) -> String {
    format!("{value:.1}")
}

fn fmt2(value: f64) -> String {
    format!("{value:.2}")
}
