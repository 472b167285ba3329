//! Integration tests for the Binance klines provider

use chrono::{TimeZone, Utc};
use coinsight::error::AnalysisError;
use coinsight::services::{BinanceProvider, MarketDataProvider};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn kline_row(hour: i64, close: f64) -> Value {
    let open_ms = (1_700_000_000 + hour * 3600) * 1000;
    json!([
        open_ms,
        format!("{:.2}", close - 0.2),
        format!("{:.2}", close + 0.5),
        format!("{:.2}", close - 0.6),
        format!("{:.2}", close),
        "1200.00",
        open_ms + 3_599_999,
        "0",
        0,
        "0",
        "0",
        "0"
    ])
}

#[tokio::test]
async fn test_fetch_decodes_kline_wire_format() {
    let server = MockServer::start().await;
    let rows: Vec<Value> = (0..60).map(|i| kline_row(i, 100.0 + i as f64)).collect();

    Mock::given(method("GET"))
        .and(path("/api/v3/klines"))
        .and(query_param("symbol", "BTCUSDT"))
        .and(query_param("interval", "1h"))
        .respond_with(ResponseTemplate::new(200).set_body_json(rows))
        .mount(&server)
        .await;

    let provider = BinanceProvider::with_base_url(server.uri());
    let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let series = provider.fetch_ohlcv("BTC/USDT", "1h", start).await.unwrap();

    assert_eq!(series.len(), 60);
    assert_eq!(series.symbol(), "BTC/USDT");
    assert_eq!(series.candles()[0].close, 100.0);
    assert_eq!(series.candles()[59].close, 159.0);
    assert_eq!(series.candles()[0].timestamp, start);
}

#[tokio::test]
async fn test_http_error_surfaces_as_upstream_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/klines"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let provider = BinanceProvider::with_base_url(server.uri());
    let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let result = provider.fetch_ohlcv("BTC/USDT", "1h", start).await;

    assert!(matches!(result, Err(AnalysisError::UpstreamFetch(_))));
}

#[tokio::test]
async fn test_malformed_payload_surfaces_as_upstream_fetch() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/klines"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([["not-a-kline"]])))
        .mount(&server)
        .await;

    let provider = BinanceProvider::with_base_url(server.uri());
    let start = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    let result = provider.fetch_ohlcv("BTC/USDT", "1h", start).await;

    assert!(matches!(result, Err(AnalysisError::UpstreamFetch(_))));
}
