//! Unit tests for the RSI series

use coinsight::indicators::momentum::rsi_series;

#[test]
fn test_warmup_rows_undefined() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 + i as f64 * 0.3).collect();
    let rsi = rsi_series(&closes, 14);
    for value in rsi.iter().take(14) {
        assert_eq!(*value, None);
    }
    assert!(rsi[14].is_some());
}

#[test]
fn test_monotonic_gains_yield_100() {
    let closes: Vec<f64> = (0..40).map(|i| 100.0 + i as f64).collect();
    let rsi = rsi_series(&closes, 14);
    for value in rsi.iter().skip(14) {
        assert_eq!(*value, Some(100.0));
    }
}

#[test]
fn test_flat_market_yields_50() {
    let closes = vec![100.0; 40];
    let rsi = rsi_series(&closes, 14);
    for value in rsi.iter().skip(14) {
        assert_eq!(*value, Some(50.0));
    }
}

#[test]
fn test_bounded_between_0_and_100() {
    let closes: Vec<f64> = (0..120)
        .map(|i| 100.0 + (i as f64 * 0.9).sin() * 8.0)
        .collect();
    let rsi = rsi_series(&closes, 14);
    for value in rsi.iter().skip(14) {
        let v = value.expect("defined after warm-up");
        assert!((0.0..=100.0).contains(&v), "RSI out of bounds: {v}");
    }
}

#[test]
fn test_too_short_series() {
    let closes = vec![100.0; 10];
    let rsi = rsi_series(&closes, 14);
    assert!(rsi.iter().all(Option::is_none));
}
