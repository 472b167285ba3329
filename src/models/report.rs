//! Plain-text analysis report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read-only snapshot of the last row's indicators, the date range of the
/// analyzed series and any patterns detected in the most recent candle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub symbol: String,
    pub first_timestamp: DateTime<Utc>,
    pub last_timestamp: DateTime<Utc>,
    pub price: f64,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    /// Pattern names with a nonzero flag in the last row, in catalogue order.
    pub recent_patterns: Vec<String>,
    /// Model forecast for the close one step past the series end.
    pub forecast: Option<f64>,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Crypto Analysis Report for {}", self.symbol)?;
        writeln!(
            f,
            "Date Range: {} to {}",
            self.first_timestamp, self.last_timestamp
        )?;
        writeln!(f)?;
        writeln!(f, "Current Indicators:")?;
        writeln!(f, "Price: {:.2}", self.price)?;
        match self.rsi {
            Some(rsi) => writeln!(f, "RSI: {rsi:.2}")?,
            None => writeln!(f, "RSI: n/a")?,
        }
        match self.macd {
            Some(macd) => writeln!(f, "MACD: {macd:.2}")?,
            None => writeln!(f, "MACD: n/a")?,
        }
        match self.macd_signal {
            Some(signal) => writeln!(f, "Signal: {signal:.2}")?,
            None => writeln!(f, "Signal: n/a")?,
        }
        if let Some(forecast) = self.forecast {
            writeln!(f, "Next close forecast: {forecast:.2}")?;
        }
        writeln!(f)?;
        writeln!(f, "Recent Patterns:")?;
        if self.recent_patterns.is_empty() {
            writeln!(f, "None")?;
        } else {
            for pattern in &self.recent_patterns {
                writeln!(f, "{pattern} detected")?;
            }
        }
        Ok(())
    }
}
