//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use log::debug;
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_trade_adapter::CsvTradeAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::intent_json;
use crate::domain::aggregate::{aggregate_performance, PerformanceSummary};
use crate::domain::config::EngineConfig;
use crate::domain::error::JournalError;
use crate::domain::session::MarketSession;
use crate::domain::trade::parse_timestamp;
use crate::domain::validator::validate_intent;
use crate::ports::trade_port::TradePort;

#[derive(Parser, Debug)]
#[command(name = "tradelens", about = "Trade journal validation and performance engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Aggregate a trade log into a performance summary
    Report {
        /// CSV trade log (or directory of per-account logs)
        #[arg(short, long)]
        trades: PathBuf,
        /// Account name, used to locate the log inside a directory
        #[arg(short, long, default_value = "default")]
        account: String,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Emit the summary as JSON instead of a text report
        #[arg(long)]
        json: bool,
    },
    /// Validate a trade intent against the entry checklist
    Validate {
        /// JSON file holding the trade intent
        #[arg(short, long)]
        intent: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Classify a timestamp or UTC hour into a market session
    Session {
        #[arg(long, conflicts_with = "hour")]
        timestamp: Option<String>,
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..24))]
        hour: Option<u32>,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    let result = match cli.command {
        Command::Report {
            trades,
            account,
            config,
            json,
        } => run_report(&trades, &account, config.as_deref(), json),
        Command::Validate { intent, json } => run_validate(&intent, json),
        Command::Session { timestamp, hour } => run_session(timestamp.as_deref(), hour),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(&err)
        }
    }
}

pub fn run_report(
    trades_path: &std::path::Path,
    account: &str,
    config_path: Option<&std::path::Path>,
    json: bool,
) -> Result<(), JournalError> {
    let engine_config = match config_path {
        Some(path) => {
            let adapter = FileConfigAdapter::from_file(path)?;
            EngineConfig::from_config(&adapter)?
        }
        None => EngineConfig::default(),
    };
    debug!("engine config: {engine_config:?}");

    let adapter = CsvTradeAdapter::new(trades_path.to_path_buf());
    let trades = adapter.fetch_trades(account)?;
    let summary = aggregate_performance(&trades, &engine_config);

    if json {
        println!("{}", to_json(&summary)?);
    } else {
        print_report(&summary, trades.len());
    }
    Ok(())
}

pub fn run_validate(intent_path: &std::path::Path, json: bool) -> Result<(), JournalError> {
    let intent = intent_json::load_intent(intent_path)?;
    let result = validate_intent(&intent);

    if json {
        println!("{}", to_json(&result)?);
    } else if result.valid {
        println!("valid");
    } else {
        println!("invalid: {}", result.reason);
    }
    // A structurally valid intent is a success regardless of the verdict,
    // mirroring the HTTP layer's 200-with-body contract.
    Ok(())
}

pub fn run_session(timestamp: Option<&str>, hour: Option<u32>) -> Result<(), JournalError> {
    let session = match (timestamp, hour) {
        (Some(raw), _) => MarketSession::classify_timestamp(parse_timestamp(raw)?),
        (None, Some(h)) => MarketSession::classify(h),
        (None, None) => {
            return Err(JournalError::InvalidInput {
                reason: "provide --timestamp or --hour".to_string(),
            })
        }
    };
    println!(
        "{} ({}) color {}",
        session.label(),
        session.display_name(),
        session.color()
    );
    Ok(())
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JournalError> {
    serde_json::to_string_pretty(value).map_err(|e| JournalError::InvalidInput {
        reason: format!("serialization failure: {e}"),
    })
}

fn print_report(summary: &PerformanceSummary, trade_count: usize) {
    println!("Trades analysed:    {trade_count}");
    println!("Best session:       {}", summary.best_session);
    println!("Best day:           {}", summary.best_day);
    println!("Best setup:         {}", summary.best_setup);
    println!("Win rate:           {}%", summary.win_rate);
    println!("Avg R:R:            {}", summary.avg_rr);
    println!("Expectancy:         {}", summary.expectancy);
    println!("Profit factor:      {}", summary.profit_factor);
    println!("Max drawdown:       {}", summary.max_drawdown);
    println!("Max drawdown %:     {}", summary.max_drawdown_percent);
    println!("Recovery factor:    {}", summary.recovery_factor);
    println!(
        "Violations:         over-risk {}, outside session {}, no strategy {}",
        summary.violations.over_risk,
        summary.violations.outside_session,
        summary.violations.no_strategy
    );
}
