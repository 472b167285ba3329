//! Binance klines REST provider.

use crate::error::{AnalysisError, AnalysisResult};
use crate::models::{Candle, CandleSeries};
use crate::services::market_data::MarketDataProvider;
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

const DEFAULT_BASE_URL: &str = "https://api.binance.com";
const MAX_LIMIT: usize = 1000;

pub struct BinanceProvider {
    client: Client,
    base_url: String,
}

impl BinanceProvider {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Binance spells "BTC/USDT" as "BTCUSDT".
    fn api_symbol(symbol: &str) -> String {
        symbol.replace('/', "")
    }

    async fn fetch_page(
        &self,
        symbol: &str,
        interval: &str,
        start_ms: i64,
    ) -> AnalysisResult<Vec<Candle>> {
        let url = format!("{}/api/v3/klines", self.base_url);
        let start_param = start_ms.to_string();
        let limit_param = MAX_LIMIT.to_string();
        let response = self
            .client
            .get(&url)
            .query(&[
                ("symbol", symbol),
                ("interval", interval),
                ("startTime", start_param.as_str()),
                ("limit", limit_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AnalysisError::UpstreamFetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnalysisError::UpstreamFetch(format!(
                "klines request returned {status}"
            )));
        }

        let rows: Vec<Vec<Value>> = response
            .json()
            .await
            .map_err(|e| AnalysisError::UpstreamFetch(e.to_string()))?;

        rows.iter().map(parse_kline).collect()
    }
}

impl Default for BinanceProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// One kline row is a JSON array:
/// [openTime, open, high, low, close, volume, closeTime, ...]
/// with prices and volume as strings.
fn parse_kline(row: &Vec<Value>) -> AnalysisResult<Candle> {
    let field = |i: usize| -> AnalysisResult<f64> {
        row.get(i)
            .and_then(Value::as_str)
            .and_then(|s| s.parse::<f64>().ok())
            .ok_or_else(|| {
                AnalysisError::UpstreamFetch(format!("malformed kline field at index {i}"))
            })
    };
    let open_time = row
        .first()
        .and_then(Value::as_i64)
        .ok_or_else(|| AnalysisError::UpstreamFetch("malformed kline open time".to_string()))?;
    let timestamp = Utc
        .timestamp_millis_opt(open_time)
        .single()
        .ok_or_else(|| AnalysisError::UpstreamFetch("kline open time out of range".to_string()))?;

    Ok(Candle::new(
        timestamp,
        field(1)?,
        field(2)?,
        field(3)?,
        field(4)?,
        field(5)?,
    ))
}

#[async_trait]
impl MarketDataProvider for BinanceProvider {
    async fn fetch_ohlcv(
        &self,
        symbol: &str,
        timeframe: &str,
        start: DateTime<Utc>,
    ) -> AnalysisResult<CandleSeries> {
        let api_symbol = Self::api_symbol(symbol);
        let mut candles: Vec<Candle> = Vec::new();
        let mut cursor = start.timestamp_millis();

        loop {
            let page = self.fetch_page(&api_symbol, timeframe, cursor).await?;
            let page_len = page.len();
            debug!(symbol, cursor, rows = page_len, "fetched klines page");

            if let Some(last) = page.last() {
                cursor = last.timestamp.timestamp_millis() + 1;
            }
            candles.extend(page);

            if page_len < MAX_LIMIT {
                break;
            }
        }

        info!(symbol, timeframe, rows = candles.len(), "fetched OHLCV history");
        CandleSeries::new(symbol, timeframe, candles)
    }
}
