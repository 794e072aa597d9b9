//! Trade history access port trait.
//!
//! Storage is a collaborator responsibility: the engine only ever sees the
//! trade collection an implementation of this trait hands it.

use crate::domain::error::JournalError;
use crate::domain::trade::Trade;

pub trait TradePort {
    /// Load the full trade history for one account. Order is not
    /// guaranteed; the aggregator sorts.
    fn fetch_trades(&self, account: &str) -> Result<Vec<Trade>, JournalError>;
}
