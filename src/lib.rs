//! coinsight - crypto market analysis engine
//!
//! Fetches historical OHLCV data for a symbol, enriches it with technical
//! indicators (MA20/MA50, RSI, MACD) and candlestick pattern flags, fits a
//! windowed sequence regressor over the enriched series and produces a
//! short-horizon close forecast plus a plain-text report.

pub mod common;
pub mod config;
pub mod error;
pub mod forecast;
pub mod indicators;
pub mod logging;
pub mod models;
pub mod patterns;
pub mod pipeline;
pub mod services;

pub use error::AnalysisError;
