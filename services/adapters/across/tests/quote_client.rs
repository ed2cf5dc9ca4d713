//! Across quote client against a mocked `suggested-fees` endpoint

use across_adapter::{
    get_quote_cancellable, AcrossQuoteClient, BridgeQuoteClient, QuoteError,
};
use mockito::Matcher;
use refuel_types::{Address, QuoteParams, U256};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

fn params() -> QuoteParams {
    QuoteParams {
        amount: U256::from(10_000_000u64),
        input_token: Address::repeat_byte(0xaa),
        output_token: Address::repeat_byte(0xbb),
        source_chain_id: 84532,
        target_chain_id: 11155420,
    }
}

fn client_for(server: &mockito::ServerGuard) -> AcrossQuoteClient {
    AcrossQuoteClient::with_base_url(&server.url(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_quote_query_and_normalisation() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/suggested-fees")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded(
                "inputToken".into(),
                "0xaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa".into(),
            ),
            Matcher::UrlEncoded(
                "outputToken".into(),
                "0xbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb".into(),
            ),
            Matcher::UrlEncoded("originChainId".into(), "84532".into()),
            Matcher::UrlEncoded("destinationChainId".into(), "11155420".into()),
            Matcher::UrlEncoded("amount".into(), "10000000".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{
                "totalRelayFee": {"pct": "5000000000000000", "total": "50000"},
                "timestamp": "1700000000",
                "isAmountTooLow": false,
                "exclusiveRelayer": "0x0000000000000000000000000000000000000000",
                "exclusivityDeadline": 0,
                "fillDeadline": "1700014400",
                "outputAmount": "9950000"
            }"#,
        )
        .create_async()
        .await;

    let quote = client_for(&server).get_quote(params()).await.unwrap();

    mock.assert_async().await;
    assert_eq!(quote.output_amount, U256::from(9_950_000u64));
    assert_eq!(quote.quote_timestamp, 1_700_000_000);
    assert_eq!(quote.fill_deadline, 1_700_014_400);
    assert_eq!(quote.exclusivity_deadline, 0);
    assert!(!quote.is_exclusive());
}

#[tokio::test]
async fn test_partial_quote_uses_fallbacks() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/suggested-fees")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"totalRelayFee": {"total": "50000"}}"#)
        .create_async()
        .await;

    let before = chrono::Utc::now().timestamp() as u32;
    let quote = client_for(&server).get_quote(params()).await.unwrap();

    assert_eq!(quote.output_amount, U256::from(9_950_000u64));
    assert!(quote.quote_timestamp >= before);
    assert_eq!(quote.fill_deadline - quote.quote_timestamp, 4 * 60 * 60);
    assert_eq!(quote.exclusivity_deadline, 0);
    assert!(quote.exclusive_relayer.is_zero());
}

#[tokio::test]
async fn test_amount_too_low_rejected() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/suggested-fees")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"outputAmount": "1", "isAmountTooLow": true}"#)
        .create_async()
        .await;

    let result = client_for(&server).get_quote(params()).await;
    assert!(matches!(result, Err(QuoteError::AmountTooLow)));
}

#[tokio::test]
async fn test_error_status_surfaces_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/suggested-fees")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"message": "Unsupported route"}"#)
        .create_async()
        .await;

    match client_for(&server).get_quote(params()).await {
        Err(QuoteError::Status { status, body }) => {
            assert_eq!(status, 400);
            assert!(body.contains("Unsupported route"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/suggested-fees")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>maintenance</html>")
        .create_async()
        .await;

    let result = client_for(&server).get_quote(params()).await;
    assert!(matches!(result, Err(QuoteError::Decode(_))));
}

#[tokio::test]
async fn test_cancelled_before_response() {
    let server = mockito::Server::new_async().await;
    let client = client_for(&server);

    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = get_quote_cancellable(&client, params(), &cancel).await;
    assert!(matches!(result, Err(QuoteError::Cancelled)));
}
