//! Rolling mean and exponential smoothing primitives.

/// Simple mean of a slice. Returns `None` on empty input.
pub fn sma(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// One step of the exponential smoothing recurrence.
///
/// k = 2 / (period + 1)
pub fn ema_from_previous(value: f64, previous: f64, period: usize) -> f64 {
    let k = 2.0 / (period as f64 + 1.0);
    previous + k * (value - previous)
}

/// Full EMA series over `values`.
///
/// The EMA is seeded with the simple mean of the first `period` values, so
/// entries before index `period - 1` are `None`.
pub fn ema_series(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if period == 0 || values.len() < period {
        return out;
    }

    let mut ema = values[..period].iter().sum::<f64>() / period as f64;
    out[period - 1] = Some(ema);
    for i in period..values.len() {
        ema = ema_from_previous(values[i], ema, period);
        out[i] = Some(ema);
    }
    out
}

/// Trailing rolling mean over `values` with the given window.
///
/// Entries before the window fills are `None`.
pub fn rolling_mean_series(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; values.len()];
    if window == 0 || values.len() < window {
        return out;
    }

    let mut sum: f64 = values[..window].iter().sum();
    out[window - 1] = Some(sum / window as f64);
    for i in window..values.len() {
        sum += values[i] - values[i - window];
        out[i] = Some(sum / window as f64);
    }
    out
}
