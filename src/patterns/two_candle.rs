//! Two-candle pattern rules.

use crate::models::Candle;

/// Engulfing: the current body completely engulfs the previous body in the
/// opposite direction. +1 for bullish engulfing, -1 for bearish.
pub fn engulfing(candles: &[Candle], index: usize) -> i8 {
    if index < 1 {
        return 0;
    }
    let prev = &candles[index - 1];
    let current = &candles[index];

    if !current.body().is_finite() || !prev.body().is_finite() {
        return 0;
    }

    if prev.is_bearish()
        && current.is_bullish()
        && current.open < prev.close
        && current.close > prev.open
    {
        return 1;
    }

    if prev.is_bullish()
        && current.is_bearish()
        && current.open > prev.close
        && current.close < prev.open
    {
        return -1;
    }

    0
}
