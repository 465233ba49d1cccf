//! OpenAPI specification and documentation.

#![allow(dead_code)] // Path functions are only used by utoipa for documentation generation

use echopay_types::domain::{
    Amount, Channel, Direction, LedgerEntry, Payment, RecordId, Transaction, TransactionType,
    UserId,
};
use echopay_types::dto::{
    CreatePaymentRequest, RecordTransactionRequest, TransferRequest, TransferResponse,
};
use serde::Serialize;
use utoipa::{OpenApi, ToSchema};

/// Error body returned by every failing request.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    #[schema(example = "amount must be greater than 0, got 0")]
    pub error: String,
    #[schema(example = 400)]
    pub code: u16,
}

// Dummy functions to generate path documentation
// These are not the actual handlers, just for OpenAPI path generation

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = inline(serde_json::Value), example = json!({"status": "healthy", "service": "payments"}))
    )
)]
async fn health() {}

/// List payments, newest first
#[utoipa::path(
    get,
    path = "/api/payments",
    tag = "payments",
    responses(
        (status = 200, description = "All payments", body = Vec<Payment>)
    )
)]
async fn list_payments() {}

/// Record a payment
#[utoipa::path(
    post,
    path = "/api/payments",
    tag = "payments",
    request_body = CreatePaymentRequest,
    responses(
        (status = 201, description = "Payment recorded", body = Payment),
        (status = 400, description = "Unparsable body, amount <= 0 or empty payerName", body = ErrorBody)
    )
)]
async fn create_payment() {}

/// List transactions, newest first
#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "transactions",
    responses(
        (status = 200, description = "All transactions", body = Vec<Transaction>)
    )
)]
async fn list_transactions() {}

/// Record money sent to a counterparty
#[utoipa::path(
    post,
    path = "/api/transactions/send",
    tag = "transactions",
    request_body = RecordTransactionRequest,
    responses(
        (status = 201, description = "Transaction recorded with type `sent`", body = Transaction),
        (status = 400, description = "Unparsable body, amount <= 0 or empty counterparty", body = ErrorBody)
    )
)]
async fn send() {}

/// Record money received from a counterparty
#[utoipa::path(
    post,
    path = "/api/transactions/receive",
    tag = "transactions",
    request_body = RecordTransactionRequest,
    responses(
        (status = 201, description = "Transaction recorded with type `received`", body = Transaction),
        (status = 400, description = "Unparsable body, amount <= 0 or empty counterparty", body = ErrorBody)
    )
)]
async fn receive() {}

/// List one participant's ledger, newest first
#[utoipa::path(
    get,
    path = "/api/channels/{user}/transactions",
    tag = "channels",
    params(
        ("user" = String, Path, description = "Participant: `user-a` or `user-b`")
    ),
    responses(
        (status = 200, description = "Ledger entries", body = Vec<LedgerEntry>),
        (status = 400, description = "Unknown user", body = ErrorBody)
    )
)]
async fn list_channel_transactions() {}

/// Transfer between the two participants
#[utoipa::path(
    post,
    path = "/api/channels/transfer",
    tag = "channels",
    request_body = TransferRequest,
    responses(
        (status = 201, description = "Both ledger entries", body = TransferResponse),
        (status = 400, description = "Unknown or equal users, or amount <= 0", body = ErrorBody)
    )
)]
async fn transfer() {}

/// OpenAPI documentation for the payments service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "EchoPay Payments API",
        version = "1.0.0",
        description = "In-memory payment records.",
    ),
    paths(health, list_payments, create_payment),
    components(schemas(Payment, CreatePaymentRequest, Amount, RecordId, ErrorBody)),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "payments", description = "Payment records"),
    )
)]
pub struct PaymentsApiDoc;

/// OpenAPI documentation for the transactions service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "EchoPay Transactions API",
        version = "1.0.0",
        description = "In-memory sent/received transactions and the user-a <-> user-b transfer channel.",
    ),
    paths(
        health,
        list_transactions,
        send,
        receive,
        list_channel_transactions,
        transfer,
    ),
    components(
        schemas(
            Transaction,
            TransactionType,
            RecordTransactionRequest,
            LedgerEntry,
            Channel,
            Direction,
            UserId,
            TransferRequest,
            TransferResponse,
            Amount,
            RecordId,
            ErrorBody,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "transactions", description = "Sent and received transactions"),
        (name = "channels", description = "Two-party transfer channel"),
    )
)]
pub struct TransactionsApiDoc;
