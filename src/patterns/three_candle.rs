//! Three-candle pattern rules.

use crate::models::Candle;
use crate::patterns::helpers;

/// Two Crows: in an uptrend, a long bullish candle followed by two bearish
/// candles, the first gapping above the bullish body and the second opening
/// inside the first crow's body and closing inside the bullish body.
/// Bearish reversal.
pub fn two_crows(candles: &[Candle], index: usize) -> i8 {
    if index < 2 {
        return 0;
    }
    let first = &candles[index - 2];
    let second = &candles[index - 1];
    let third = &candles[index];

    if helpers::trend(candles, index - 2) <= 0 {
        return 0;
    }
    if !first.is_bullish() || !helpers::is_long_body(candles, index - 2) {
        return 0;
    }
    if !second.is_bearish() || !helpers::body_gap_up(second, first) {
        return 0;
    }

    let opens_inside_second = third.open < second.open && third.open > second.close;
    let closes_inside_first = third.close < first.close && third.close > first.open;

    if third.is_bearish() && opens_inside_second && closes_inside_first {
        -1
    } else {
        0
    }
}

/// Three Black Crows: three consecutive long bearish candles with
/// progressively lower closes, each opening within the previous body and
/// closing near its low. Bearish reversal.
pub fn three_black_crows(candles: &[Candle], index: usize) -> i8 {
    if index < 2 {
        return 0;
    }
    let first = &candles[index - 2];
    let second = &candles[index - 1];
    let third = &candles[index];

    if !first.is_bearish() || !second.is_bearish() || !third.is_bearish() {
        return 0;
    }
    if second.close >= first.close || third.close >= second.close {
        return 0;
    }

    // Each crow opens within the previous real body.
    if second.open >= first.open || second.open <= first.close {
        return 0;
    }
    if third.open >= second.open || third.open <= second.close {
        return 0;
    }

    // Closes near the low: short lower shadows.
    let near_low = |c: &Candle| c.body() > 0.0 && c.lower_shadow() < c.body() * 0.3;
    if near_low(first) && near_low(second) && near_low(third) {
        -1
    } else {
        0
    }
}

/// Morning Star: a long bearish candle, a small-bodied candle gapping below
/// it, then a bullish candle closing above the midpoint of the first body.
/// Bullish reversal.
pub fn morning_star(candles: &[Candle], index: usize) -> i8 {
    if index < 2 {
        return 0;
    }
    let first = &candles[index - 2];
    let star = &candles[index - 1];
    let third = &candles[index];

    if !first.is_bearish() || !helpers::is_long_body(candles, index - 2) {
        return 0;
    }
    if star.body() >= first.body() * 0.3 || !helpers::body_gap_down(star, first) {
        return 0;
    }

    let first_midpoint = (first.open + first.close) / 2.0;
    if third.is_bullish() && third.close > first_midpoint {
        1
    } else {
        0
    }
}
