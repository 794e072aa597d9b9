//! Market session classification from the UTC hour of day.
//!
//! Two schemes coexist deliberately and must stay separate:
//!
//! - [`MarketSession`]: the 5-band display scheme. A true partition of the
//!   24-hour day; every hour maps to exactly one band. Used for
//!   session-display labeling and exposed standalone.
//! - [`AttributionSession`]: the 3-band scheme used by the aggregator for
//!   session-level P&L attribution. Its London and New York bands overlap
//!   between 13:00 and 16:00; bands are checked in declaration order and the
//!   first match wins, so the overlap is attributed to London.
//!
//! Merging the two would silently change attributed P&L.

use chrono::{DateTime, Timelike, Utc};

/// 5-band display scheme. Partition of hours 0-23:
/// `[0,8)` Asian, `[8,13)` London, `[13,16)` overlap, `[16,21)` New York,
/// `[21,24)` off hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarketSession {
    Asian,
    London,
    OverlapLondonNy,
    NewYork,
    OffHours,
}

impl MarketSession {
    pub fn classify(hour: u32) -> Self {
        debug_assert!(hour < 24);
        match hour {
            0..=7 => MarketSession::Asian,
            8..=12 => MarketSession::London,
            13..=15 => MarketSession::OverlapLondonNy,
            16..=20 => MarketSession::NewYork,
            _ => MarketSession::OffHours,
        }
    }

    pub fn classify_timestamp(timestamp: DateTime<Utc>) -> Self {
        Self::classify(timestamp.hour())
    }

    /// Stable wire label.
    pub fn label(&self) -> &'static str {
        match self {
            MarketSession::Asian => "asian",
            MarketSession::London => "london",
            MarketSession::OverlapLondonNy => "overlap_london_ny",
            MarketSession::NewYork => "new_york",
            MarketSession::OffHours => "off_hours",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MarketSession::Asian => "Asian Session",
            MarketSession::London => "London Session",
            MarketSession::OverlapLondonNy => "London/New York Overlap",
            MarketSession::NewYork => "New York Session",
            MarketSession::OffHours => "Off Hours",
        }
    }

    /// UI color hint. Presentation metadata, not a computational contract.
    pub fn color(&self) -> &'static str {
        match self {
            MarketSession::Asian => "#e6b800",
            MarketSession::London => "#2e86de",
            MarketSession::OverlapLondonNy => "#8e44ad",
            MarketSession::NewYork => "#27ae60",
            MarketSession::OffHours => "#7f8c8d",
        }
    }
}

/// 3-band P&L-attribution scheme. Not a partition: London `[8,16)` is
/// checked before New York `[13,21)`, so hours 13-15 attribute to London.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributionSession {
    London,
    NewYork,
    Asian,
}

/// Declaration order of the attribution bands. Bucket ties resolve to the
/// earlier entry of this array.
pub const ATTRIBUTION_SESSIONS: [AttributionSession; 3] = [
    AttributionSession::London,
    AttributionSession::NewYork,
    AttributionSession::Asian,
];

impl AttributionSession {
    pub fn classify(hour: u32) -> Self {
        debug_assert!(hour < 24);
        if (8..16).contains(&hour) {
            AttributionSession::London
        } else if (13..21).contains(&hour) {
            AttributionSession::NewYork
        } else {
            AttributionSession::Asian
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AttributionSession::London => "London",
            AttributionSession::NewYork => "New York",
            AttributionSession::Asian => "Asian",
        }
    }

    /// Index into [`ATTRIBUTION_SESSIONS`] order, for array-backed buckets.
    pub fn index(&self) -> usize {
        match self {
            AttributionSession::London => 0,
            AttributionSession::NewYork => 1,
            AttributionSession::Asian => 2,
        }
    }
}
