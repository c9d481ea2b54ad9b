use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use huobi_api_client::error::HuobiError;
use huobi_api_client::rest::HuobiRestClient;
use huobi_api_client::rest::endpoints::public;

fn build_client(server: &MockServer) -> HuobiRestClient {
    HuobiRestClient::builder()
        .base_url(server.uri())
        .credentials("test_key", "test_secret")
        .user_agent("huobi-tests/1.0")
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_market_tickers_are_unsigned() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "ok",
        "ts": 1_704_067_200_000u64,
        "data": [{
            "symbol": "btcusdt",
            "open": 42000.1,
            "close": 42250.5,
            "vol": 123456.78
        }]
    });

    Mock::given(method("GET"))
        .and(path(public::TICKERS))
        .and(header("user-agent", "huobi-tests/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let body = client.get(public::TICKERS, &()).await.unwrap();
    assert_eq!(body["data"][0]["symbol"], "btcusdt");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn test_market_params_are_sorted_and_unsigned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(public::KLINE))
        .and(query_param("symbol", "ethusdt"))
        .and(query_param("period", "1day"))
        .and(query_param("size", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "ok",
            "ch": "market.ethusdt.kline.1day",
            "data": [{ "id": 1_704_067_200u64, "open": 2300.0 }, { "id": 1_703_980_800u64, "open": 2280.0 }]
        })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = serde_json::json!({ "symbol": "ethusdt", "period": "1day", "size": 2 });
    let body = client.get(public::KLINE, &params).await.unwrap();
    assert_eq!(body["ch"], "market.ethusdt.kline.1day");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].url.query(),
        Some("period=1day&size=2&symbol=ethusdt")
    );
}

#[tokio::test]
async fn test_market_error_envelope() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "error",
        "err-code": "invalid-parameter",
        "err-msg": "invalid symbol"
    });

    Mock::given(method("GET"))
        .and(path(public::DETAIL_MERGED))
        .respond_with(ResponseTemplate::new(200).set_body_json(&response))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = serde_json::json!({ "symbol": "nope" });
    let err = client.get(public::DETAIL_MERGED, &params).await.unwrap_err();

    match err {
        HuobiError::Api(api_error) => {
            assert_eq!(api_error.body, response);
            assert_eq!(api_error.code().as_deref(), Some("invalid-parameter"));
        }
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_nested_params_rejected_before_dispatch() {
    let server = MockServer::start().await;

    let client = build_client(&server);
    let params = serde_json::json!({ "filter": { "symbol": "btcusdt" } });
    let err = client.get(public::TICKERS, &params).await.unwrap_err();

    assert!(matches!(err, HuobiError::InvalidParams(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
