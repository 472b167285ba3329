//! Unit tests for the moving average series

use coinsight::indicators::trend::moving_average_series;

#[test]
fn test_warmup_rows_undefined() {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
    let ma = moving_average_series(&closes, 50);
    for value in ma.iter().take(49) {
        assert_eq!(*value, None);
    }
    assert!(ma[49].is_some());
}

#[test]
fn test_trailing_mean_values() {
    let closes = vec![1.0, 2.0, 3.0, 4.0, 5.0];
    let ma = moving_average_series(&closes, 3);
    assert_eq!(ma, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
}

#[test]
fn test_constant_series() {
    let closes = vec![100.0; 60];
    let ma = moving_average_series(&closes, 20);
    for value in ma.iter().skip(19) {
        assert_eq!(*value, Some(100.0));
    }
}
