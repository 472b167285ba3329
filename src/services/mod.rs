//! Data-fetch collaborators supplying OHLCV series to the pipeline.

pub mod binance;
pub mod market_data;

pub use binance::BinanceProvider;
pub use market_data::{InMemoryProvider, MarketDataProvider};
