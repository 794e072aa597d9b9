//! JSON trade-intent reader.
//!
//! The surrounding system forwards intents as JSON request bodies; the CLI
//! accepts the same shape from a file. Schema failures are `InvalidInput`,
//! mirroring the HTTP layer's 400 on a malformed body.

use crate::domain::error::JournalError;
use crate::domain::trade::TradeIntent;
use std::fs;
use std::path::Path;

pub fn load_intent<P: AsRef<Path>>(path: P) -> Result<TradeIntent, JournalError> {
    let content = fs::read_to_string(path.as_ref())?;
    parse_intent(&content)
}

pub fn parse_intent(json: &str) -> Result<TradeIntent, JournalError> {
    serde_json::from_str(json).map_err(|e| JournalError::InvalidInput {
        reason: format!("malformed trade intent: {e}"),
    })
}
