//! Demo: Fetching public market data from Huobi.
//!
//! Market data paths are not signed, but the client still needs a key pair
//! to be constructed. Placeholder values work for these endpoints.
//!
//! Run with: cargo run --example public_data

use huobi_api_client::rest::HuobiRestClient;
use huobi_api_client::rest::endpoints::public;
use serde_json::json;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("huobi_api_client=debug".parse()?),
        )
        .init();

    let client = HuobiRestClient::new("public-only", "public-only")?;

    println!("=== Merged Ticker ===");
    let ticker = client
        .get(public::DETAIL_MERGED, &json!({ "symbol": "btcusdt" }))
        .await?;
    println!("Close: {}", ticker["tick"]["close"]);
    println!("Bid: {}", ticker["tick"]["bid"][0]);
    println!("Ask: {}", ticker["tick"]["ask"][0]);

    println!("\n=== Daily Candles ===");
    let klines = client
        .get(
            public::KLINE,
            &json!({ "symbol": "ethusdt", "period": "1day", "size": 3 }),
        )
        .await?;
    if let Some(candles) = klines["data"].as_array() {
        for candle in candles {
            println!(
                "id={} open={} close={}",
                candle["id"], candle["open"], candle["close"]
            );
        }
    }

    Ok(())
}
