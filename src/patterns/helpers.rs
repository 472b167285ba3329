//! Shared geometry helpers for pattern rules.

use crate::models::Candle;

/// Trailing window used for trend detection.
pub const TREND_LOOKBACK: usize = 5;

/// Trailing window for the average body reference.
pub const AVG_BODY_LOOKBACK: usize = 10;

/// Average real body over up to `lookback` candles ending at `index`
/// (exclusive of the candle at `index` itself).
pub fn trailing_avg_body(candles: &[Candle], index: usize, lookback: usize) -> f64 {
    let start = index.saturating_sub(lookback);
    if start == index {
        return 0.0;
    }
    let sum: f64 = candles[start..index].iter().map(Candle::body).sum();
    sum / (index - start) as f64
}

/// A body at least as large as the trailing average counts as "long".
pub fn is_long_body(candles: &[Candle], index: usize) -> bool {
    let avg = trailing_avg_body(candles, index, AVG_BODY_LOOKBACK);
    avg > 0.0 && candles[index].body() >= avg
}

/// Price trend over the trailing lookback: 1 up, -1 down, 0 flat or not
/// enough history. A move of more than 2% either way counts as a trend.
pub fn trend(candles: &[Candle], index: usize) -> i8 {
    if index < TREND_LOOKBACK {
        return 0;
    }
    let current = candles[index].close;
    let past = candles[index - TREND_LOOKBACK].close;
    if current > past * 1.02 {
        1
    } else if current < past * 0.98 {
        -1
    } else {
        0
    }
}

/// True when the candle's real body gaps above the previous candle's body.
pub fn body_gap_up(current: &Candle, previous: &Candle) -> bool {
    current.open.min(current.close) > previous.open.max(previous.close)
}

/// True when the candle's real body gaps below the previous candle's body.
pub fn body_gap_down(current: &Candle, previous: &Candle) -> bool {
    current.open.max(current.close) < previous.open.min(previous.close)
}
