//! Demo: Querying private account data.
//!
//! Reads `HUOBI_ACCESS_KEY` and `HUOBI_SECRET_KEY` from the environment (a
//! `.env` file works too).
//!
//! Run with: cargo run --example private_account

use huobi_api_client::HuobiError;
use huobi_api_client::auth::Credentials;
use huobi_api_client::rest::HuobiRestClient;
use huobi_api_client::rest::endpoints::private;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = HuobiRestClient::builder()
        .with_credentials(Credentials::from_env()?)
        .build()?;

    println!("=== Accounts ===");
    let accounts = client.get(private::ACCOUNTS, &()).await?;
    let Some(accounts) = accounts["data"].as_array() else {
        return Ok(());
    };
    for account in accounts {
        println!(
            "id={} type={} state={}",
            account["id"], account["type"], account["state"]
        );
    }

    if let Some(account) = accounts.first() {
        println!("\n=== Balance of {} ===", account["id"]);
        let path = private::account_balance(&account["id"].to_string());
        match client.get(&path, &()).await {
            Ok(balance) => {
                if let Some(list) = balance["data"]["list"].as_array() {
                    for entry in list.iter().filter(|e| e["balance"] != "0") {
                        println!("{} {}: {}", entry["currency"], entry["type"], entry["balance"]);
                    }
                }
            }
            Err(HuobiError::Api(api_error)) => {
                println!("Exchange rejected the request: {api_error}");
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("\n=== Account Valuation (v2) ===");
    let valuation = client
        .get(private::ACCOUNT_VALUATION, &serde_json::json!({ "accountType": "spot" }))
        .await?;
    println!("Total balance: {}", valuation["data"]["totalBalance"]);

    Ok(())
}
