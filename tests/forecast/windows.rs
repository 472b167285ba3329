//! Unit tests for sliding-window construction

use chrono::{TimeZone, Utc};
use coinsight::error::AnalysisError;
use coinsight::forecast::{prepare_data, windows::latest_window};
use coinsight::models::{Candle, EnrichedCandle, EnrichedSeries};

fn enriched_series(count: usize) -> EnrichedSeries {
    let rows = (0..count)
        .map(|i| {
            let close = 100.0 + i as f64 * 0.5;
            EnrichedCandle::from_candle(Candle::new(
                Utc.timestamp_opt(1_700_000_000 + i as i64 * 3600, 0).unwrap(),
                close - 0.1,
                close + 0.3,
                close - 0.4,
                close,
                1000.0,
            ))
        })
        .collect();
    EnrichedSeries::new("BTC/USDT", "1h", rows)
}

#[test]
fn test_200_rows_window_60_yields_140_examples() {
    let series = enriched_series(200);
    let data = prepare_data(&series, 60).unwrap();
    assert_eq!(data.features.len(), 140);
    assert_eq!(data.targets.len(), 140);
}

#[test]
fn test_target_is_close_after_window() {
    let series = enriched_series(70);
    let data = prepare_data(&series, 60).unwrap();
    let closes = series.closes();

    assert_eq!(data.features[0], closes[0..60].to_vec());
    assert_eq!(data.targets[0], closes[60]);
    assert_eq!(data.targets.last(), closes.last());
}

#[test]
fn test_series_no_longer_than_window_fails() {
    let series = enriched_series(60);
    let result = prepare_data(&series, 60);
    assert!(matches!(
        result,
        Err(AnalysisError::InsufficientData { required: 61, provided: 60 })
    ));
}

#[test]
fn test_latest_window_covers_series_tail() {
    let series = enriched_series(80);
    let window = latest_window(&series, 60).unwrap();
    let closes = series.closes();
    assert_eq!(window, closes[20..].to_vec());
}
