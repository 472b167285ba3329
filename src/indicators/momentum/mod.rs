//! Momentum indicators (RSI, MACD).

pub mod macd;
pub mod rsi;

pub use macd::macd_series;
pub use rsi::rsi_series;
