//! Simple moving average over close prices.

use crate::common::math;

/// Trailing simple moving average series with the given window.
///
/// Rows without a full trailing window carry no value rather than zero.
pub fn moving_average_series(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    math::rolling_mean_series(closes, window)
}
