//! Infrastructure - ports and the adapters behind them.

pub mod clock;
pub mod launcher;
pub mod library;
pub mod mdns;
pub mod ports;

#[cfg(any(test, feature = "testing"))]
pub mod testing;
