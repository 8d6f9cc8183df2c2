//! Infrastructure - ports and the adapters behind them.

pub mod mdns;
pub mod player_client;
pub mod ports;
