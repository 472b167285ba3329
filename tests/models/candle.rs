//! Unit tests for the validated candle series

use chrono::{TimeZone, Utc};
use coinsight::error::AnalysisError;
use coinsight::models::{Candle, CandleSeries};

fn candle_at(hour: i64, close: f64) -> Candle {
    Candle::new(
        Utc.timestamp_opt(1_700_000_000 + hour * 3600, 0).unwrap(),
        close,
        close + 0.5,
        close - 0.5,
        close,
        1000.0,
    )
}

#[test]
fn test_accepts_strictly_increasing_timestamps() {
    let candles = vec![candle_at(0, 100.0), candle_at(1, 101.0), candle_at(2, 102.0)];
    let series = CandleSeries::new("BTC/USDT", "1h", candles).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.closes(), vec![100.0, 101.0, 102.0]);
}

#[test]
fn test_rejects_duplicate_timestamps() {
    let candles = vec![candle_at(0, 100.0), candle_at(0, 101.0)];
    let result = CandleSeries::new("BTC/USDT", "1h", candles);
    assert!(matches!(result, Err(AnalysisError::InvalidSeries(_))));
}

#[test]
fn test_rejects_out_of_order_timestamps() {
    let candles = vec![candle_at(2, 100.0), candle_at(1, 101.0)];
    let result = CandleSeries::new("BTC/USDT", "1h", candles);
    assert!(matches!(result, Err(AnalysisError::InvalidSeries(_))));
}

#[test]
fn test_rejects_non_positive_close() {
    let candles = vec![candle_at(0, 100.0), candle_at(1, 0.0)];
    let result = CandleSeries::new("BTC/USDT", "1h", candles);
    assert!(matches!(result, Err(AnalysisError::InvalidSeries(_))));
}

#[test]
fn test_candle_geometry_helpers() {
    let candle = Candle::new(
        Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
        100.0,
        103.0,
        98.0,
        102.0,
        1000.0,
    );
    assert_eq!(candle.body(), 2.0);
    assert_eq!(candle.range(), 5.0);
    assert_eq!(candle.upper_shadow(), 1.0);
    assert_eq!(candle.lower_shadow(), 2.0);
    assert!(candle.is_bullish());
    assert!(!candle.is_bearish());
}
