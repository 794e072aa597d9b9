pub mod trade_port;
pub mod config_port;
