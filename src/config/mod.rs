//! Analyzer configuration with environment-based overrides.

use std::env;

/// Get the current environment ("production", "sandbox", ...).
pub fn get_environment() -> String {
    env::var("COINSIGHT_ENV").unwrap_or_else(|_| "sandbox".to_string())
}

/// Runtime configuration for one analysis run.
///
/// Every field has a sensible default and can be overridden either by the
/// caller or through `COINSIGHT_*` environment variables (see [`Config::from_env`]).
#[derive(Debug, Clone)]
pub struct Config {
    pub default_symbol: String,
    pub default_exchange: String,
    pub default_timeframe: String,
    pub default_start_date: String,

    /// Short/long moving average windows.
    pub ma_short_period: usize,
    pub ma_long_period: usize,
    /// RSI lookback.
    pub rsi_period: usize,
    /// MACD fast/slow/signal EMA periods.
    pub macd_fast_period: usize,
    pub macd_slow_period: usize,
    pub macd_signal_period: usize,

    /// Sliding window width for the sequence model.
    pub model_window: usize,
    /// Gradient descent passes over the training set.
    pub model_epochs: usize,
    pub model_learning_rate: f64,
    /// RNG seed for weight initialization; fixed for deterministic runs.
    pub model_seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_symbol: "BTC/USDT".to_string(),
            default_exchange: "binance".to_string(),
            default_timeframe: "1h".to_string(),
            default_start_date: "2023-01-01".to_string(),
            ma_short_period: 20,
            ma_long_period: 50,
            rsi_period: 14,
            macd_fast_period: 12,
            macd_slow_period: 26,
            macd_signal_period: 9,
            model_window: 60,
            model_epochs: 200,
            model_learning_rate: 0.01,
            model_seed: 42,
        }
    }
}

impl Config {
    /// Build a config from defaults, applying any `COINSIGHT_*` env overrides.
    pub fn from_env() -> Self {
        // Load .env if present; missing file is not an error.
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        if let Ok(symbol) = env::var("COINSIGHT_SYMBOL") {
            config.default_symbol = symbol;
        }
        if let Ok(exchange) = env::var("COINSIGHT_EXCHANGE") {
            config.default_exchange = exchange;
        }
        if let Ok(timeframe) = env::var("COINSIGHT_TIMEFRAME") {
            config.default_timeframe = timeframe;
        }
        if let Ok(start_date) = env::var("COINSIGHT_START_DATE") {
            config.default_start_date = start_date;
        }
        if let Ok(window) = env::var("COINSIGHT_MODEL_WINDOW") {
            if let Ok(window) = window.parse() {
                config.model_window = window;
            }
        }
        if let Ok(epochs) = env::var("COINSIGHT_MODEL_EPOCHS") {
            if let Ok(epochs) = epochs.parse() {
                config.model_epochs = epochs;
            }
        }
        config
    }

    /// Largest indicator lookback; the minimum series length the
    /// indicator engine accepts.
    pub fn min_rows(&self) -> usize {
        self.ma_long_period
            .max(self.macd_slow_period + self.macd_signal_period)
            .max(self.rsi_period + 1)
    }
}
