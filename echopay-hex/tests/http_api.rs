//! Integration tests for the HTTP layer.
//!
//! These tests drive the fully layered routers of both services with
//! in-memory stores, checking status codes, bodies and CORS headers.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use echopay_hex::{
    ChannelService, PaymentService, TransactionService,
    inbound::{ALLOW_METHODS, HttpServer},
};
use echopay_store::{InMemoryLedgerStore, InMemoryPaymentStore, InMemoryTransactionStore};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Helper to create the payments router over seeded stores.
fn payments_app() -> Router {
    let service = PaymentService::new(InMemoryPaymentStore::seeded().unwrap());
    HttpServer::payments(service).router()
}

/// Helper to create the transactions router over seeded stores.
fn transactions_app() -> Router {
    let transactions = TransactionService::new(InMemoryTransactionStore::seeded().unwrap());
    let channels = ChannelService::new(InMemoryLedgerStore::seeded().unwrap());
    HttpServer::transactions(transactions, channels).router()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends one request and returns the status with the decoded JSON body.
async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, json)
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_payments_returns_seeded_records() {
    let app = payments_app();

    let response = app.clone().oneshot(get("/api/payments")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let (_, json) = call(&app, get("/api/payments")).await;
    let payments = json.as_array().unwrap();
    assert_eq!(payments.len(), 3);
    assert_eq!(payments[0]["id"], "3");
    assert_eq!(payments[0]["payerName"], "Meera");
    assert!(payments[0]["paidAt"].is_string());
}

#[tokio::test]
async fn test_create_payment_returns_201() {
    let app = payments_app();

    let (status, payment) = call(
        &app,
        post_json("/api/payments", r#"{"amount":321.99,"payerName":"Ishita"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(payment["payerName"], "Ishita");
    assert_eq!(payment["amount"], 321.99);
    let id = payment["id"].as_str().unwrap();
    assert!(!["1", "2", "3"].contains(&id));

    let (_, list) = call(&app, get("/api/payments")).await;
    assert_eq!(list.as_array().unwrap().len(), 4);
    assert_eq!(list[0]["id"], id);
}

#[tokio::test]
async fn test_create_payment_validation_errors() {
    let app = payments_app();

    for body in [
        r#"{"amount":0,"payerName":"Ishita"}"#,
        r#"{"amount":-5,"payerName":"Ishita"}"#,
        r#"{"amount":10,"payerName":""}"#,
        r#"{"amount":10}"#,
        r#"{"payerName":"Ishita"}"#,
    ] {
        let (status, json) = call(&app, post_json("/api/payments", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
        assert_eq!(json["code"], 400);
        assert!(json["error"].is_string());
    }
}

#[tokio::test]
async fn test_create_payment_malformed_body() {
    let app = payments_app();

    let (status, json) = call(&app, post_json("/api/payments", "{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .starts_with("invalid request body")
    );
}

#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let app = payments_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/payments")
        .body(Body::from(r#"{"amount":5,"payerName":"Asha"}"#))
        .unwrap();
    let (status, _) = call(&app, request).await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn test_payments_wrong_method_is_405() {
    let app = payments_app();

    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/payments")
        .body(Body::empty())
        .unwrap();
    let (status, json) = call(&app, request).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(json["code"], 405);
}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_transactions_returns_seeded_records() {
    let app = transactions_app();

    let (status, json) = call(&app, get("/api/transactions")).await;

    assert_eq!(status, StatusCode::OK);
    let transactions = json.as_array().unwrap();
    assert_eq!(transactions.len(), 3);
    let ids: Vec<_> = transactions.iter().map(|t| t["id"].clone()).collect();
    assert_eq!(ids, vec!["3", "2", "1"]);
}

#[tokio::test]
async fn test_send_returns_sent_transaction() {
    let app = transactions_app();

    let (status, tx) = call(
        &app,
        post_json(
            "/api/transactions/send",
            r#"{"amount":99.5,"counterparty":"Kabir"}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(tx["type"], "sent");
    assert_eq!(tx["counterparty"], "Kabir");
    assert_eq!(tx["amount"], 99.5);
}

#[tokio::test]
async fn test_receive_returns_received_transaction() {
    let app = transactions_app();

    let (status, tx) = call(
        &app,
        post_json(
            "/api/transactions/receive",
            r#"{"amount":501,"counterparty":"Divya"}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(tx["type"], "received");
}

#[tokio::test]
async fn test_send_validation_errors() {
    let app = transactions_app();

    for body in [
        r#"{"amount":0,"counterparty":"Kabir"}"#,
        r#"{"amount":10,"counterparty":""}"#,
        r#"[1,2,3]"#,
    ] {
        let (status, _) = call(&app, post_json("/api/transactions/send", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
    }
}

#[tokio::test]
async fn test_send_with_get_is_405() {
    let app = transactions_app();

    let (status, _) = call(&app, get("/api/transactions/send")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ─────────────────────────────────────────────────────────────────────────────
// Channels
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_channel_ledgers_start_with_one_entry_each() {
    let app = transactions_app();

    let (status, a) = call(&app, get("/api/channels/user-a/transactions")).await;
    assert_eq!(status, StatusCode::OK);
    let (_, b) = call(&app, get("/api/channels/user-b/transactions")).await;

    assert_eq!(a.as_array().unwrap().len(), 1);
    assert_eq!(b.as_array().unwrap().len(), 1);
    assert_eq!(a[0]["direction"], "sent");
    assert_eq!(b[0]["direction"], "received");
    assert_eq!(a[0]["channel"], "user-a<->user-b");
}

#[tokio::test]
async fn test_channel_unknown_user_is_400() {
    let app = transactions_app();

    let (status, json) = call(&app, get("/api/channels/user-c/transactions")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);
}

#[tokio::test]
async fn test_channel_malformed_path_is_400() {
    let app = transactions_app();

    for uri in [
        "/api/channels/user-a",
        "/api/channels/user-a/history",
        "/api/channels/user-a/transactions/extra",
    ] {
        let (status, _) = call(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "uri {uri}");
    }
}

#[tokio::test]
async fn test_channel_undecodable_user_is_json_400() {
    let app = transactions_app();

    let response = app
        .clone()
        .oneshot(get("/api/channels/%FF/transactions"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");

    let (status, json) = call(&app, get("/api/channels/%FF/transactions")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);
    assert!(json["error"].as_str().unwrap().starts_with("invalid path"));
}

#[tokio::test]
async fn test_transfer_returns_both_logs() {
    let app = transactions_app();

    let (status, json) = call(
        &app,
        post_json(
            "/api/channels/transfer",
            r#"{"fromUser":"user-a","toUser":"user-b","amount":99.5}"#,
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let from = &json["fromUserLog"];
    let to = &json["toUserLog"];
    assert_eq!(from["user"], "user-a");
    assert_eq!(from["direction"], "sent");
    assert_eq!(from["amount"], 99.5);
    assert_eq!(to["user"], "user-b");
    assert_eq!(to["direction"], "received");
    assert_eq!(to["amount"], 99.5);
    assert_eq!(from["createdAt"], to["createdAt"]);
    assert_eq!(from["channel"], to["channel"]);

    let (_, a) = call(&app, get("/api/channels/user-a/transactions")).await;
    let (_, b) = call(&app, get("/api/channels/user-b/transactions")).await;
    assert_eq!(a[0], *from);
    assert_eq!(b[0], *to);
}

#[tokio::test]
async fn test_transfer_rejections() {
    let app = transactions_app();

    for body in [
        r#"{"fromUser":"user-a","toUser":"user-a","amount":10}"#,
        r#"{"fromUser":"user-a","toUser":"user-x","amount":10}"#,
        r#"{"fromUser":"user-a","toUser":"user-b","amount":0}"#,
        r#"{"fromUser":"user-a","toUser":"user-b","amount":-3}"#,
        r#"{"fromUser":"user-a""#,
    ] {
        let (status, _) = call(&app, post_json("/api/channels/transfer", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {body}");
    }

    let (_, a) = call(&app, get("/api/channels/user-a/transactions")).await;
    assert_eq!(a.as_array().unwrap().len(), 1);
}

// ─────────────────────────────────────────────────────────────────────────────
// Shared plumbing
// ─────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_options_is_204_with_cors_headers() {
    for (app, uri) in [
        (payments_app(), "/api/payments"),
        (transactions_app(), "/api/transactions/send"),
        (transactions_app(), "/api/channels/transfer"),
    ] {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT, "uri {uri}");
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
            "Content-Type"
        );
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], ALLOW_METHODS);
    }
}

#[tokio::test]
async fn test_regular_responses_carry_cors_headers() {
    let app = transactions_app();

    let response = app.oneshot(get("/api/transactions")).await.unwrap();

    assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
}

#[tokio::test]
async fn test_health_and_openapi() {
    let app = payments_app();

    let (status, json) = call(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "payments");

    let (status, doc) = call(&app, get("/api-docs/openapi.json")).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/payments"].is_object());
}

#[tokio::test]
async fn test_unknown_path_is_404() {
    let app = payments_app();

    let (status, json) = call(&app, get("/api/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 404);
}
