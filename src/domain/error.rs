//! Domain error types.
//!
//! `InvalidInput` fails the whole operation it occurs in; there are no
//! partial results. A failed validation rule is not an error; it is the
//! normal `valid=false` outcome of the validator.

/// Top-level error type for tradelens.
#[derive(Debug, thiserror::Error)]
pub enum JournalError {
    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("trade source error: {reason}")]
    TradeSource { reason: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&JournalError> for std::process::ExitCode {
    fn from(err: &JournalError) -> Self {
        let code: u8 = match err {
            JournalError::Io(_) => 1,
            JournalError::ConfigParse { .. } | JournalError::ConfigInvalid { .. } => 2,
            JournalError::TradeSource { .. } => 3,
            JournalError::InvalidInput { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display() {
        let err = JournalError::InvalidInput {
            reason: "unparseable timestamp".into(),
        };
        assert_eq!(err.to_string(), "invalid input: unparseable timestamp");
    }

    #[test]
    fn config_invalid_display() {
        let err = JournalError::ConfigInvalid {
            section: "engine".into(),
            key: "profit_factor".into(),
            reason: "expected legacy or standard".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid config value [engine] profit_factor: expected legacy or standard"
        );
    }
}
