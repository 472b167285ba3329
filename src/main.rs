use chrono::{NaiveDate, TimeZone, Utc};
use coinsight::config::Config;
use coinsight::logging::init_logging;
use coinsight::pipeline::MarketAnalyzer;
use coinsight::services::BinanceProvider;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let config = Config::from_env();
    let symbol = config.default_symbol.clone();
    let start_date = NaiveDate::parse_from_str(&config.default_start_date, "%Y-%m-%d")?;
    let start = Utc.from_utc_datetime(&start_date.and_hms_opt(0, 0, 0).unwrap());

    let provider = BinanceProvider::new();
    let analyzer = MarketAnalyzer::new(config);

    let outcome = analyzer.analyze(&provider, &symbol, start).await?;
    let report = analyzer.generate_report(&outcome);

    println!("{report}");
    Ok(())
}
