//! CLI integration tests with real files on disk.
//!
//! Tests cover:
//! - Report command over a temp CSV log, with and without an INI config
//! - Validate command over a temp intent JSON (verdict is not an error)
//! - Session command input handling
//! - Error propagation for missing/malformed files

use std::io::Write;
use std::path::PathBuf;
use tradelens::cli;
use tradelens::domain::error::JournalError;

const VALID_CSV: &str = "\
id,timestamp,net_pl,outcome,risk_reward,setup
t1,2024-03-04T09:00:00Z,100.0,Win,2.5,Breakout
t2,2024-03-04T14:00:00Z,-40.0,Loss,1.0,Scalp
t3,2024-03-04T23:00:00Z,20.0,Win,,
";

const VALID_INI: &str = "\
[engine]
profit_factor = standard
session_open_hour = 8
session_close_hour = 21
";

const VALID_INTENT: &str = r#"{
    "htfBiasClear": true,
    "zoneValid": false,
    "liquidityTaken": true,
    "structureConfirmed": true,
    "entryConfirmed": true,
    "zoneValidity": "Valid"
}"#;

fn write_temp(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn report_over_csv_log() {
    let csv = write_temp(VALID_CSV, ".csv");
    let result = cli::run_report(csv.path(), "default", None, false);
    assert!(result.is_ok());
}

#[test]
fn report_with_config_file() {
    let csv = write_temp(VALID_CSV, ".csv");
    let ini = write_temp(VALID_INI, ".ini");
    let result = cli::run_report(csv.path(), "default", Some(ini.path()), true);
    assert!(result.is_ok());
}

#[test]
fn report_rejects_bad_config_value() {
    let csv = write_temp(VALID_CSV, ".csv");
    let ini = write_temp("[engine]\nprofit_factor = bogus\n", ".ini");
    let err = cli::run_report(csv.path(), "default", Some(ini.path()), false).unwrap_err();
    assert!(matches!(err, JournalError::ConfigInvalid { .. }));
}

#[test]
fn report_missing_log_fails() {
    let err =
        cli::run_report(&PathBuf::from("/nonexistent/log.csv"), "default", None, false)
            .unwrap_err();
    assert!(matches!(err, JournalError::TradeSource { .. }));
}

#[test]
fn report_bad_timestamp_fails_whole_run() {
    let csv = write_temp(
        "id,timestamp,net_pl,outcome,risk_reward,setup\n\
         t1,tomorrow,1.0,Win,,\n",
        ".csv",
    );
    let err = cli::run_report(csv.path(), "default", None, false).unwrap_err();
    assert!(matches!(err, JournalError::InvalidInput { .. }));
}

#[test]
fn validate_failing_intent_is_still_success() {
    // The verdict is payload, not an error condition.
    let intent = write_temp(VALID_INTENT, ".json");
    assert!(cli::run_validate(intent.path(), false).is_ok());
    assert!(cli::run_validate(intent.path(), true).is_ok());
}

#[test]
fn validate_malformed_intent_fails() {
    let intent = write_temp(r#"{"htfBiasClear": true}"#, ".json");
    let err = cli::run_validate(intent.path(), false).unwrap_err();
    assert!(matches!(err, JournalError::InvalidInput { .. }));
}

#[test]
fn session_by_hour_and_timestamp() {
    assert!(cli::run_session(None, Some(9)).is_ok());
    assert!(cli::run_session(Some("2024-03-04T22:15:00Z"), None).is_ok());
}

#[test]
fn session_requires_an_input() {
    let err = cli::run_session(None, None).unwrap_err();
    assert!(matches!(err, JournalError::InvalidInput { .. }));
}

#[test]
fn session_bad_timestamp_fails() {
    let err = cli::run_session(Some("high noon"), None).unwrap_err();
    assert!(matches!(err, JournalError::InvalidInput { .. }));
}
