//! Integration tests for the order and stop lifecycle against a mock API.
//!
//! Each test drives the high-level client through a realistic sequence:
//! create → list → cancel, checking both the request wire format and the
//! decoded response state.

use httpmock::prelude::*;
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;

use finam_sdk::prelude::*;

const CLIENT_ID: &str = "D12345";

async fn connected_client(server: &MockServer) -> FinamClient {
    let client = FinamClient::builder("test-token")
        .base_url(&server.base_url())
        .build()
        .expect("client should build");
    client.start_session().await.expect("session should open");
    client
}

fn order_json(transaction_id: i64, status: &str) -> serde_json::Value {
    json!({
        "clientId": CLIENT_ID,
        "securityBoard": "TQBR",
        "securityCode": "SBER",
        "buySell": "Buy",
        "status": status,
        "orderNo": 1000001,
        "transactionId": transaction_id,
        "market": "Stock",
        "price": "250.65",
        "quantity": 2,
        "balance": 2,
        "createdAt": "2024-03-15T10:30:00Z"
    })
}

// ─── Orders ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn limit_order_create_list_cancel() {
    let server = MockServer::start_async().await;
    let client = connected_client(&server).await;

    let create = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/public/api/v1/orders")
                .header("x-api-key", "test-token")
                .json_body_partial(
                    json!({
                        "clientId": CLIENT_ID,
                        "securityCode": "SBER",
                        "buySell": "Buy",
                        "useCredit": false,
                        "price": "250.65"
                    })
                    .to_string(),
                );
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"data": {"clientId": CLIENT_ID, "transactionId": 42, "securityCode": "SBER"}}));
        })
        .await;

    let list = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/public/api/v1/orders")
                .query_param("ClientId", CLIENT_ID)
                .query_param("IncludeActive", "true");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"data": {"clientId": CLIENT_ID, "orders": [order_json(42, "Active")]}}));
        })
        .await;

    let cancel = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/public/api/v1/orders")
                .query_param("ClientId", CLIENT_ID)
                .query_param("TransactionId", "42");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"data": {"clientId": CLIENT_ID, "transactionId": 42}}));
        })
        .await;

    let request = OrderBuilder::new(CLIENT_ID, "TQBR", "SBER", BuySell::Buy, 2)
        .price(Decimal::from_str("250.65").unwrap())
        .use_credit(false)
        .build()
        .expect("valid order");
    let placed = client.create_order(&request).await.expect("create");
    assert!(placed.is_ok());
    let transaction_id = placed.data.expect("data").transaction_id;
    assert_eq!(transaction_id, 42);

    let orders = client.get_orders(CLIENT_ID).await.expect("list");
    let orders = orders.data.expect("data").orders;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].transaction_id, transaction_id);
    assert_eq!(orders[0].status, OrderStatus::Active);

    let cancelled = client
        .cancel_order(CLIENT_ID, transaction_id)
        .await
        .expect("cancel");
    assert_eq!(cancelled.data.expect("data").transaction_id, transaction_id);

    create.assert_async().await;
    list.assert_async().await;
    cancel.assert_async().await;
}

#[tokio::test]
async fn rejected_order_surfaces_envelope_error_and_keeps_session() {
    let server = MockServer::start_async().await;
    let client = connected_client(&server).await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/public/api/v1/orders");
            then.status(400)
                .header("content-type", "application/json")
                .json_body(json!({
                    "error": {"code": "VALIDATION_ERROR", "message": "Неверный инструмент", "data": null}
                }));
        })
        .await;

    let request = OrderBuilder::new(CLIENT_ID, "TQBR", "NOPE", BuySell::Buy, 1)
        .build()
        .unwrap();
    let response = client.create_order(&request).await.expect("domain error is a value");
    assert!(!response.is_ok());
    assert_eq!(response.error.unwrap().code.as_deref(), Some("VALIDATION_ERROR"));

    // An API-level rejection is not a transport failure: the session stays
    // open for the next request.
    assert_eq!(client.session_status().await, SessionStatus::Open);
}

// ─── Stops ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn stop_outlives_cancellation_of_linked_order() {
    let server = MockServer::start_async().await;
    let client = connected_client(&server).await;

    server
        .mock_async(|when, then| {
            when.method(POST).path("/public/api/v1/stops");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"data": {"clientId": CLIENT_ID, "stopId": 77, "securityCode": "SBER", "securityBoard": "TQBR"}}));
        })
        .await;

    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/public/api/v1/orders");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"data": {"clientId": CLIENT_ID, "transactionId": 42}}));
        })
        .await;

    // The linked order is gone but the stop is still listed as active.
    let list = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/public/api/v1/stops")
                .query_param("ClientId", CLIENT_ID)
                .query_param("IncludeExecuted", "true");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"data": {"clientId": CLIENT_ID, "stops": [{
                    "clientId": CLIENT_ID,
                    "securityBoard": "TQBR",
                    "securityCode": "SBER",
                    "buySell": "Sell",
                    "status": "Active",
                    "stopId": 77,
                    "market": "Stock",
                    "linkOrder": 1000001,
                    "tradeNo": 0,
                    "takeProfitExtremum": 0,
                    "takeProfitLevel": 0,
                    "stopLoss": {
                        "activationPrice": "240",
                        "price": "0",
                        "marketPrice": true,
                        "quantity": {"value": "2", "units": "Lots"},
                        "time": 0,
                        "useCredit": false
                    }
                }]}}));
        })
        .await;

    let stop = StopBuilder::new(CLIENT_ID, "TQBR", "SBER", BuySell::Sell, 1000001)
        .stop_loss(StopLoss::market(
            Decimal::from_str("240").unwrap(),
            StopQuantity::lots(Decimal::from(2)),
        ))
        .build()
        .expect("valid stop");
    let placed = client.create_stop(&stop).await.expect("create stop");
    let stop_id = placed.data.expect("data").stop_id;
    assert_eq!(stop_id, 77);

    client.cancel_order(CLIENT_ID, 42).await.expect("cancel linked order");

    let stops = client.get_stops(CLIENT_ID).await.expect("list stops");
    let stops = stops.data.expect("data").stops;
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].stop_id, stop_id);
    assert_eq!(stops[0].status, StopStatus::Active);
    list.assert_async().await;
}

#[tokio::test]
async fn stop_cancel_sends_stop_id_in_query() {
    let server = MockServer::start_async().await;
    let client = connected_client(&server).await;

    let cancel = server
        .mock_async(|when, then| {
            when.method(DELETE)
                .path("/public/api/v1/stops")
                .query_param("ClientId", CLIENT_ID)
                .query_param("StopId", "77");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"data": {"clientId": CLIENT_ID, "stopId": 77}}));
        })
        .await;

    let cancelled = client.cancel_stop(CLIENT_ID, 77).await.expect("cancel stop");
    assert_eq!(cancelled.data.expect("data").stop_id, 77);
    cancel.assert_async().await;
}
