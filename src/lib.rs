//! tradelens — trade validation and performance intelligence engine.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in [`ports`],
//! concrete implementations in [`adapters`]. The domain is pure computation over
//! caller-supplied trade data; all I/O lives behind the ports.

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
