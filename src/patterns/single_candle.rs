//! Single-candle pattern rules.

use crate::models::Candle;
use crate::patterns::helpers;

/// Hammer: a small body near the top of the range with a lower shadow at
/// least twice the body, appearing in a downtrend. Bullish reversal.
pub fn hammer(candles: &[Candle], index: usize) -> i8 {
    let candle = &candles[index];
    let body = candle.body();

    if body <= 0.0 || !body.is_finite() {
        return 0;
    }
    if helpers::trend(candles, index) >= 0 {
        return 0;
    }

    let long_lower_shadow = candle.lower_shadow() >= body * 2.0;
    let short_upper_shadow = candle.upper_shadow() < body * 0.5;

    if long_lower_shadow && short_upper_shadow {
        1
    } else {
        0
    }
}
