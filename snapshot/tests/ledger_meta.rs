use riptide_core::errors::RpcError;
use riptide_snapshot::ledger_meta::{fetch_fee, fetch_server_info, fetch_xrp_price};
use riptide_test_tools::responses::{book_offers_result, fee_result};
use riptide_test_tools::rpc_provider_stub::RpcProviderStub;
use serde_json::json;

#[tokio::test]
async fn test_fetch_fee_reads_drops() {
    let mut stub = RpcProviderStub::new();
    stub.add("fee", Ok(fee_result()));

    let fee = fetch_fee(&stub).await.unwrap();

    assert_eq!(fee.base_fee, "10");
    assert_eq!(fee.open_ledger_fee, "12");
    assert_eq!(fee.ledger_current_index, 80_000_000);
}

#[tokio::test]
async fn test_fetch_fee_defaults_missing_drops() {
    let mut stub = RpcProviderStub::new();
    stub.add("fee", Ok(json!({ "ledger_current_index": 1 })));

    let fee = fetch_fee(&stub).await.unwrap();

    assert_eq!(fee.base_fee, "10");
    assert_eq!(fee.open_ledger_fee, "10");
}

#[tokio::test]
async fn test_fetch_xrp_price_scales_quality_to_whole_xrp() {
    let mut stub = RpcProviderStub::new();
    stub.add("book_offers", Ok(book_offers_result("0.000002")));

    let price = fetch_xrp_price(&stub).await.unwrap();

    assert!((price.usd - 2.0).abs() < 1e-9);
}

#[tokio::test]
async fn test_fetch_xrp_price_with_empty_book_is_an_error() {
    let mut stub = RpcProviderStub::new();
    stub.add("book_offers", Ok(json!({ "offers": [] })));

    let err = fetch_xrp_price(&stub).await.unwrap_err();

    assert!(matches!(err, RpcError::Transport(_)));
}

#[tokio::test]
async fn test_fetch_server_info_passes_the_result_through() {
    let mut stub = RpcProviderStub::new();
    stub.add(
        "server_info",
        Ok(json!({ "info": { "server_state": "full" } })),
    );

    let info = fetch_server_info(&stub).await.unwrap();

    assert_eq!(info["info"]["server_state"], "full");
}
