//! MACD (Moving Average Convergence Divergence) indicator.

use crate::common::math;

/// MACD line, signal line and histogram as parallel series.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<Option<f64>>,
    pub signal: Vec<Option<f64>>,
    pub histogram: Vec<Option<f64>>,
}

/// Calculate the MACD series over close prices.
///
/// MACD = EMA(fast) - EMA(slow)
/// Signal = EMA(signal_period) of the MACD line
/// Histogram = MACD - Signal
///
/// Each EMA is seeded with the simple mean of its first window, so the MACD
/// line is defined from index `slow_period - 1` and the signal line
/// `signal_period - 1` rows later.
pub fn macd_series(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> MacdSeries {
    let len = closes.len();
    let fast_ema = math::ema_series(closes, fast_period);
    let slow_ema = math::ema_series(closes, slow_period);

    let mut macd = vec![None; len];
    for i in 0..len {
        if let (Some(fast), Some(slow)) = (fast_ema[i], slow_ema[i]) {
            macd[i] = Some(fast - slow);
        }
    }

    // Signal line: EMA over the defined stretch of the MACD line.
    let mut signal = vec![None; len];
    let first_defined = macd.iter().position(Option::is_some);
    if let Some(offset) = first_defined {
        let macd_values: Vec<f64> = macd[offset..].iter().map(|v| v.unwrap_or(0.0)).collect();
        let signal_values = math::ema_series(&macd_values, signal_period);
        for (i, value) in signal_values.into_iter().enumerate() {
            signal[offset + i] = value;
        }
    }

    let mut histogram = vec![None; len];
    for i in 0..len {
        if let (Some(m), Some(s)) = (macd[i], signal[i]) {
            histogram[i] = Some(m - s);
        }
    }

    MacdSeries {
        macd,
        signal,
        histogram,
    }
}

/// Calculate MACD with the standard periods (12, 26, 9).
pub fn macd_series_default(closes: &[f64]) -> MacdSeries {
    macd_series(closes, 12, 26, 9)
}
