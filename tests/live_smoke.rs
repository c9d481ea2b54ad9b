use huobi_api_client::auth::Credentials;
use huobi_api_client::rest::HuobiRestClient;
use huobi_api_client::rest::endpoints::{private, public};

fn live_tests_enabled() -> bool {
    std::env::var("HUOBI_LIVE_TESTS").ok().as_deref() == Some("1")
}

#[tokio::test]
#[ignore]
async fn live_public_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let client = HuobiRestClient::builder()
        .credentials("public-only", "public-only")
        .build()?;
    let tickers = client.get(public::TICKERS, &()).await?;
    assert!(tickers["data"].is_array());

    Ok(())
}

#[tokio::test]
#[ignore]
async fn live_private_smoke() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();
    if !live_tests_enabled() {
        return Ok(());
    }

    let credentials = match Credentials::from_env() {
        Ok(creds) => creds,
        Err(_) => return Ok(()),
    };
    let client = HuobiRestClient::builder()
        .with_credentials(credentials)
        .build()?;

    let accounts = client.get(private::ACCOUNTS, &()).await?;
    assert_eq!(accounts["status"], "ok");

    Ok(())
}
