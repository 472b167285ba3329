//! Market data provider interface for data source integration.

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::CandleSeries;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Supplies historical OHLCV data for one symbol/timeframe starting at a
/// given date. Invoked once per analysis run, before the core begins; all
/// network concerns live behind this trait.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch_ohlcv(
        &self,
        symbol: &str,
        timeframe: &str,
        start: DateTime<Utc>,
    ) -> AnalysisResult<CandleSeries>;
}

/// Serves a preloaded series; used in tests and offline runs.
pub struct InMemoryProvider {
    series: CandleSeries,
}

impl InMemoryProvider {
    pub fn new(series: CandleSeries) -> Self {
        Self { series }
    }
}

#[async_trait]
impl MarketDataProvider for InMemoryProvider {
    async fn fetch_ohlcv(
        &self,
        symbol: &str,
        _timeframe: &str,
        start: DateTime<Utc>,
    ) -> AnalysisResult<CandleSeries> {
        if symbol != self.series.symbol() {
            return Err(AnalysisError::UpstreamFetch(format!(
                "no preloaded data for {symbol}"
            )));
        }
        let candles = self
            .series
            .candles()
            .iter()
            .copied()
            .filter(|c| c.timestamp >= start)
            .collect();
        CandleSeries::new(self.series.symbol(), self.series.timeframe(), candles)
    }
}
