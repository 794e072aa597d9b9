//! Core domain types and logic.

pub mod trade;
pub mod session;
pub mod validator;
pub mod aggregate;
pub mod config;
pub mod error;
