//! Trade-intent rule validation.
//!
//! Evaluates a fixed, ordered checklist against a [`TradeIntent`] and
//! short-circuits on the first failing rule. The ordering is part of the
//! observable contract: when several rules fail, callers always see the
//! earliest one, so failure reasons are stable and reproducible.

use serde::Serialize;

use super::trade::{TradeIntent, ZoneValidity};

/// Outcome of validating a trade intent. `reason` is empty exactly when
/// `valid` is true; otherwise it names the single violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub valid: bool,
    pub reason: String,
}

impl ValidationResult {
    fn pass() -> Self {
        ValidationResult {
            valid: true,
            reason: String::new(),
        }
    }

    fn fail(reason: &str) -> Self {
        ValidationResult {
            valid: false,
            reason: reason.to_string(),
        }
    }
}

/// The checklist, in contract order. The zone-validity enum check is a
/// redundant, independent check against a different field and runs last.
const RULES: [(&str, fn(&TradeIntent) -> bool); 6] = [
    ("HTF bias not clear", |i| i.htf_bias_clear),
    ("Zone not valid", |i| i.zone_valid),
    ("Liquidity not taken", |i| i.liquidity_taken),
    ("Structure not confirmed", |i| i.structure_confirmed),
    ("Entry not confirmed", |i| i.entry_confirmed),
    ("Zone invalidated", |i| i.zone_validity != ZoneValidity::Invalid),
];

/// Validate a trade intent against the ordered rule list.
pub fn validate_intent(intent: &TradeIntent) -> ValidationResult {
    for (reason, check) in RULES {
        if !check(intent) {
            return ValidationResult::fail(reason);
        }
    }
    ValidationResult::pass()
}
