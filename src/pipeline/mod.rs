//! Analysis pipeline: fetch -> indicators -> patterns -> forecast -> report.

use crate::config::Config;
use crate::error::AnalysisResult;
use crate::forecast::{self, SequenceRegressor, WindowRegressor};
use crate::indicators::calculate_indicators;
use crate::models::{EnrichedSeries, Report};
use crate::patterns::{identify_patterns, PatternKind};
use crate::services::MarketDataProvider;
use chrono::{DateTime, Utc};
use tracing::info;

/// Everything one analysis run produces: the enriched series, the model's
/// in-sample predictions (one per training window) and the forecast for the
/// close one step past the series end.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub enriched: EnrichedSeries,
    pub predictions: Vec<f64>,
    pub forecast: f64,
}

/// Orchestrates one full analysis run for a single symbol.
///
/// Phases run in strict sequence and each phase takes the previous phase's
/// output and returns a new value; no shared frame is mutated in place. Any
/// phase failure aborts the run and surfaces its error kind unchanged - no
/// partial outcome is produced. The model is retrained from scratch on
/// every run; nothing is persisted across runs.
pub struct MarketAnalyzer {
    config: Config,
}

impl MarketAnalyzer {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub async fn analyze(
        &self,
        provider: &dyn MarketDataProvider,
        symbol: &str,
        start: DateTime<Utc>,
    ) -> AnalysisResult<AnalysisOutcome> {
        info!(symbol, %start, "starting analysis run");

        let series = provider
            .fetch_ohlcv(symbol, &self.config.default_timeframe, start)
            .await?;
        let enriched = calculate_indicators(&series, &self.config)?;
        let enriched = identify_patterns(enriched);

        let training = forecast::prepare_data(&enriched, self.config.model_window)?;
        let mut model = WindowRegressor::new(
            self.config.model_epochs,
            self.config.model_learning_rate,
            self.config.model_seed,
        );
        model.build((self.config.model_window, 1));
        model.train(&training.features, &training.targets)?;

        let predictions = model.predict(&training.features)?;
        let latest = forecast::windows::latest_window(&enriched, self.config.model_window)?;
        let forecast = model.predict(std::slice::from_ref(&latest))?[0];

        info!(
            symbol,
            rows = enriched.len(),
            windows = training.len(),
            forecast,
            "analysis run complete"
        );

        Ok(AnalysisOutcome {
            enriched,
            predictions,
            forecast,
        })
    }

    /// Extract the report snapshot from a finished run.
    pub fn generate_report(&self, outcome: &AnalysisOutcome) -> Report {
        let enriched = &outcome.enriched;
        let (first_timestamp, last_timestamp) = enriched
            .date_range()
            .expect("analyze never yields an empty series");
        let last = enriched.last().expect("analyze never yields an empty series");

        let recent_patterns = PatternKind::CATALOGUE
            .iter()
            .zip(&last.pattern_flags)
            .filter(|(_, &flag)| flag != 0)
            .map(|(kind, _)| kind.name().to_string())
            .collect();

        Report {
            symbol: enriched.symbol().to_string(),
            first_timestamp,
            last_timestamp,
            price: last.candle.close,
            rsi: last.rsi,
            macd: last.macd,
            macd_signal: last.macd_signal,
            recent_patterns,
            forecast: Some(outcome.forecast),
        }
    }
}
