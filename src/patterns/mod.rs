//! Candlestick pattern detection over an enriched series.
//!
//! Each cataloged pattern evaluates a geometric rule against the trailing
//! 1-3 candles and assigns a signed flag to the current row: +1 bullish,
//! -1 bearish, 0 absent. Rows with fewer trailing candles than a pattern
//! needs always get 0.

pub mod helpers;
pub mod single_candle;
pub mod three_candle;
pub mod two_candle;

use crate::models::{Candle, EnrichedSeries};
use tracing::debug;

/// The fixed pattern catalogue, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternKind {
    TwoCrows,
    ThreeBlackCrows,
    Engulfing,
    Hammer,
    MorningStar,
}

impl PatternKind {
    pub const CATALOGUE: [PatternKind; 5] = [
        PatternKind::TwoCrows,
        PatternKind::ThreeBlackCrows,
        PatternKind::Engulfing,
        PatternKind::Hammer,
        PatternKind::MorningStar,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PatternKind::TwoCrows => "Two Crows",
            PatternKind::ThreeBlackCrows => "Three Black Crows",
            PatternKind::Engulfing => "Engulfing",
            PatternKind::Hammer => "Hammer",
            PatternKind::MorningStar => "Morning Star",
        }
    }

    /// Number of trailing candles the rule inspects.
    pub fn min_candles(&self) -> usize {
        match self {
            PatternKind::Hammer => 1,
            PatternKind::Engulfing => 2,
            PatternKind::TwoCrows | PatternKind::ThreeBlackCrows | PatternKind::MorningStar => 3,
        }
    }

    fn detect(&self, candles: &[Candle], index: usize) -> i8 {
        match self {
            PatternKind::TwoCrows => three_candle::two_crows(candles, index),
            PatternKind::ThreeBlackCrows => three_candle::three_black_crows(candles, index),
            PatternKind::Engulfing => two_candle::engulfing(candles, index),
            PatternKind::Hammer => single_candle::hammer(candles, index),
            PatternKind::MorningStar => three_candle::morning_star(candles, index),
        }
    }
}

/// Append one signed flag column per cataloged pattern.
///
/// Pure and deterministic: same shape out as in, the indicator columns are
/// left untouched. Degenerate OHLC rows simply produce flag 0.
pub fn identify_patterns(mut series: EnrichedSeries) -> EnrichedSeries {
    let candles: Vec<Candle> = series.rows().iter().map(|r| r.candle).collect();

    let mut detected = 0usize;
    for (i, row) in series.rows_mut().iter_mut().enumerate() {
        row.pattern_flags = PatternKind::CATALOGUE
            .iter()
            .map(|kind| kind.detect(&candles, i))
            .collect();
        detected += row.pattern_flags.iter().filter(|&&f| f != 0).count();
    }

    debug!(rows = candles.len(), flags = detected, "identified candlestick patterns");
    series
}
