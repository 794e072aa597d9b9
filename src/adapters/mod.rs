pub mod csv_trade_adapter;
pub mod intent_json;
pub mod file_config_adapter;
