//! HTTP request handlers.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use echopay_types::{
    AppError, CreatePaymentRequest, LedgerRepository, PaymentRepository, RecordTransactionRequest,
    TransactionRepository, TransactionType, TransferRequest,
};

use super::json::{ApiJson, ApiPath};
use crate::{ChannelService, PaymentService, TransactionService};

/// State shared across the payments service handlers.
pub struct PaymentsState<R: PaymentRepository> {
    pub service: PaymentService<R>,
}

/// State shared across the transactions service handlers.
pub struct TransactionsState<T: TransactionRepository, L: LedgerRepository> {
    pub transactions: TransactionService<T>,
    pub channels: ChannelService<L>,
}

/// Wrapper to implement IntoResponse for AppError (orphan rule workaround).
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MalformedRequest(_)
            | AppError::MissingField(_)
            | AppError::InvalidAmount(_)
            | AppError::InvalidUser(_)
            | AppError::InvalidPath(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        };

        let body = serde_json::json!({
            "error": self.0.to_string(),
            "code": status.as_u16()
        });

        (status, Json(body)).into_response()
    }
}

/// Health check endpoint.
pub async fn health(service: &'static str) -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy", "service": service }))
}

/// Answers a known path hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError(AppError::MethodNotAllowed)
}

/// Answers unknown paths.
///
/// Anything under `/api/channels/` that is not a known route is a malformed
/// channel path (`400`); everything else is `404`.
pub async fn fallback(uri: Uri) -> ApiError {
    let path = uri.path();
    if path.starts_with("/api/channels/") {
        ApiError(AppError::InvalidPath(path.to_string()))
    } else {
        ApiError(AppError::NotFound(path.to_string()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payments
// ─────────────────────────────────────────────────────────────────────────────

/// List all payments.
#[tracing::instrument(skip(state))]
pub async fn list_payments<R: PaymentRepository>(
    State(state): State<Arc<PaymentsState<R>>>,
) -> impl IntoResponse {
    Json(state.service.list_payments().await)
}

/// Record a payment.
#[tracing::instrument(skip(state), fields(amount = req.amount, payer = %req.payer_name))]
pub async fn create_payment<R: PaymentRepository>(
    State(state): State<Arc<PaymentsState<R>>>,
    ApiJson(req): ApiJson<CreatePaymentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let payment = state.service.create_payment(req).await?;
    Ok((StatusCode::CREATED, Json(payment)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

/// List all transactions.
#[tracing::instrument(skip(state))]
pub async fn list_transactions<T: TransactionRepository, L: LedgerRepository>(
    State(state): State<Arc<TransactionsState<T, L>>>,
) -> impl IntoResponse {
    Json(state.transactions.list_transactions().await)
}

/// Record money sent to a counterparty.
#[tracing::instrument(skip(state), fields(amount = req.amount, counterparty = %req.counterparty))]
pub async fn send<T: TransactionRepository, L: LedgerRepository>(
    State(state): State<Arc<TransactionsState<T, L>>>,
    ApiJson(req): ApiJson<RecordTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tx = state.transactions.record(req, TransactionType::Sent).await?;
    Ok((StatusCode::CREATED, Json(tx)))
}

/// Record money received from a counterparty.
#[tracing::instrument(skip(state), fields(amount = req.amount, counterparty = %req.counterparty))]
pub async fn receive<T: TransactionRepository, L: LedgerRepository>(
    State(state): State<Arc<TransactionsState<T, L>>>,
    ApiJson(req): ApiJson<RecordTransactionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tx = state
        .transactions
        .record(req, TransactionType::Received)
        .await?;
    Ok((StatusCode::CREATED, Json(tx)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Channels
// ─────────────────────────────────────────────────────────────────────────────

/// List one participant's ledger.
#[tracing::instrument(skip(state))]
pub async fn list_channel_transactions<T: TransactionRepository, L: LedgerRepository>(
    State(state): State<Arc<TransactionsState<T, L>>>,
    ApiPath(user): ApiPath<String>,
) -> Result<impl IntoResponse, ApiError> {
    let entries = state.channels.list_for_user(&user).await?;
    Ok(Json(entries))
}

/// Transfer between the two channel participants.
#[tracing::instrument(skip(state), fields(from = %req.from_user, to = %req.to_user, amount = req.amount))]
pub async fn transfer<T: TransactionRepository, L: LedgerRepository>(
    State(state): State<Arc<TransactionsState<T, L>>>,
    ApiJson(req): ApiJson<TransferRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let logs = state.channels.transfer(req).await?;
    Ok((StatusCode::CREATED, Json(logs)))
}
