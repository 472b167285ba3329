//! Indicator engine: turns a raw OHLCV series into an enriched series.

use crate::config::Config;
use crate::error::{AnalysisError, AnalysisResult};
use crate::indicators::momentum::{macd_series, rsi_series};
use crate::indicators::trend::moving_average_series;
use crate::models::{CandleSeries, EnrichedCandle, EnrichedSeries};
use tracing::debug;

/// Append MA20/MA50, RSI and MACD columns to the series.
///
/// Pure function: same row count and order out as in, the input is not
/// modified. Fails with [`AnalysisError::InsufficientData`] when the series
/// is shorter than the largest lookback window (MA50 by default), i.e. when
/// no indicator row would be fully defined.
pub fn calculate_indicators(
    series: &CandleSeries,
    config: &Config,
) -> AnalysisResult<EnrichedSeries> {
    let required = config.min_rows();
    if series.len() < required {
        return Err(AnalysisError::InsufficientData {
            required,
            provided: series.len(),
        });
    }

    let closes = series.closes();
    let ma_short = moving_average_series(&closes, config.ma_short_period);
    let ma_long = moving_average_series(&closes, config.ma_long_period);
    let rsi = rsi_series(&closes, config.rsi_period);
    let macd = macd_series(
        &closes,
        config.macd_fast_period,
        config.macd_slow_period,
        config.macd_signal_period,
    );

    let rows = series
        .candles()
        .iter()
        .enumerate()
        .map(|(i, candle)| {
            let mut row = EnrichedCandle::from_candle(*candle);
            row.ma20 = ma_short[i];
            row.ma50 = ma_long[i];
            row.rsi = rsi[i];
            row.macd = macd.macd[i];
            row.macd_signal = macd.signal[i];
            row.macd_hist = macd.histogram[i];
            row
        })
        .collect();

    debug!(
        symbol = series.symbol(),
        rows = series.len(),
        "calculated indicator columns"
    );

    Ok(EnrichedSeries::new(
        series.symbol(),
        series.timeframe(),
        rows,
    ))
}
