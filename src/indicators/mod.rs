//! Technical indicator calculations over OHLCV series.

pub mod engine;
pub mod momentum;
pub mod trend;

pub use engine::calculate_indicators;
