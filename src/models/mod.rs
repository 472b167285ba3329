//! Shared data models spanning the analysis layers.

pub mod candle;
pub mod enriched;
pub mod report;

pub use candle::{Candle, CandleSeries};
pub use enriched::{ChartColumns, EnrichedCandle, EnrichedSeries};
pub use report::Report;
