//! The enriched series: raw candles plus derived indicator and pattern columns.

use crate::models::candle::Candle;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One candle with its derived columns.
///
/// Indicator values are `None` over the warm-up stretch where the lookback
/// window has not filled yet; a missing value is never replaced with zero.
/// `pattern_flags` holds one signed flag per cataloged candlestick pattern,
/// in catalogue order: +1 bullish, -1 bearish, 0 absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedCandle {
    #[serde(flatten)]
    pub candle: Candle,
    pub ma20: Option<f64>,
    pub ma50: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub macd_hist: Option<f64>,
    #[serde(default)]
    pub pattern_flags: Vec<i8>,
}

impl EnrichedCandle {
    pub fn from_candle(candle: Candle) -> Self {
        Self {
            candle,
            ma20: None,
            ma50: None,
            rsi: None,
            macd: None,
            macd_signal: None,
            macd_hist: None,
            pattern_flags: Vec::new(),
        }
    }
}

/// The OHLCV series plus derived columns, same row count and order as the
/// input it was computed from. Never mutated after pattern detection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedSeries {
    symbol: String,
    timeframe: String,
    rows: Vec<EnrichedCandle>,
}

impl EnrichedSeries {
    pub fn new(
        symbol: impl Into<String>,
        timeframe: impl Into<String>,
        rows: Vec<EnrichedCandle>,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            timeframe: timeframe.into(),
            rows,
        }
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn timeframe(&self) -> &str {
        &self.timeframe
    }

    pub fn rows(&self) -> &[EnrichedCandle] {
        &self.rows
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [EnrichedCandle] {
        &mut self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn last(&self) -> Option<&EnrichedCandle> {
        self.rows.last()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.candle.close).collect()
    }

    /// First and last timestamps of the series.
    pub fn date_range(&self) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        match (self.rows.first(), self.rows.last()) {
            (Some(first), Some(last)) => Some((first.candle.timestamp, last.candle.timestamp)),
            _ => None,
        }
    }

    /// Indexed columns handed to an external chart renderer.
    pub fn chart_columns(&self) -> ChartColumns {
        ChartColumns {
            timestamp: self.rows.iter().map(|r| r.candle.timestamp).collect(),
            close: self.rows.iter().map(|r| r.candle.close).collect(),
            ma20: self.rows.iter().map(|r| r.ma20).collect(),
            ma50: self.rows.iter().map(|r| r.ma50).collect(),
            rsi: self.rows.iter().map(|r| r.rsi).collect(),
            macd: self.rows.iter().map(|r| r.macd).collect(),
            macd_signal: self.rows.iter().map(|r| r.macd_signal).collect(),
            macd_hist: self.rows.iter().map(|r| r.macd_hist).collect(),
        }
    }
}

/// Parallel column vectors for chart rendering by the presentation layer.
/// The core never renders charts itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartColumns {
    pub timestamp: Vec<DateTime<Utc>>,
    pub close: Vec<f64>,
    pub ma20: Vec<Option<f64>>,
    pub ma50: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
    pub macd_hist: Vec<Option<f64>>,
}
