//! # EchoPay Client SDK
//!
//! Typed Rust clients for the payments and transactions APIs.

use echopay_types::{
    CreatePaymentRequest, LedgerEntry, Payment, RecordTransactionRequest, Transaction,
    TransferRequest, TransferResponse,
};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

/// Error type for client operations.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid base URL: {0}")]
    InvalidUrl(String),
}

/// Base URL plus connection pool shared by both clients.
#[derive(Clone)]
struct Endpoint {
    base_url: String,
    http: Client,
}

impl Endpoint {
    fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    /// Appends `segments` to the base URL, percent-encoding each one.
    fn url(&self, segments: &[&str]) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidUrl(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn health(&self) -> Result<bool, ClientError> {
        let resp = self.http.get(self.url(&["health"])?).send().await?;
        Ok(resp.status().is_success())
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ClientError> {
        let resp = self.http.get(self.url(segments)?).send().await?;
        Self::handle_response(resp).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> Result<T, ClientError> {
        let resp = self.http.post(self.url(segments)?).json(body).send().await?;
        Self::handle_response(resp).await
    }

    async fn handle_response<T: DeserializeOwned>(
        resp: reqwest::Response,
    ) -> Result<T, ClientError> {
        let status = resp.status();
        if status.is_success() {
            let body = resp.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            let body = resp.text().await.unwrap_or_default();
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
                .unwrap_or(body);
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

/// Payments API client.
pub struct PaymentsClient {
    endpoint: Endpoint,
}

impl PaymentsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint::new(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.endpoint.base_url
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        self.endpoint.health().await
    }

    /// Lists all payments, newest first.
    pub async fn list_payments(&self) -> Result<Vec<Payment>, ClientError> {
        self.endpoint.get(&["api", "payments"]).await
    }

    /// Records a payment.
    pub async fn create_payment(
        &self,
        amount: f64,
        payer_name: &str,
    ) -> Result<Payment, ClientError> {
        let req = CreatePaymentRequest {
            amount,
            payer_name: payer_name.to_string(),
        };
        self.endpoint.post(&["api", "payments"], &req).await
    }
}

/// Transactions and channel API client.
pub struct TransactionsClient {
    endpoint: Endpoint,
}

impl TransactionsClient {
    /// Creates a new client.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            endpoint: Endpoint::new(base_url),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.endpoint.base_url
    }

    /// Checks if the API is healthy.
    pub async fn health(&self) -> Result<bool, ClientError> {
        self.endpoint.health().await
    }

    /// Lists all transactions, newest first.
    pub async fn list_transactions(&self) -> Result<Vec<Transaction>, ClientError> {
        self.endpoint.get(&["api", "transactions"]).await
    }

    /// Records money sent to `counterparty`.
    pub async fn send(&self, amount: f64, counterparty: &str) -> Result<Transaction, ClientError> {
        let req = RecordTransactionRequest {
            amount,
            counterparty: counterparty.to_string(),
        };
        self.endpoint.post(&["api", "transactions", "send"], &req).await
    }

    /// Records money received from `counterparty`.
    pub async fn receive(
        &self,
        amount: f64,
        counterparty: &str,
    ) -> Result<Transaction, ClientError> {
        let req = RecordTransactionRequest {
            amount,
            counterparty: counterparty.to_string(),
        };
        self.endpoint.post(&["api", "transactions", "receive"], &req).await
    }

    /// Lists one channel participant's ledger, newest first.
    pub async fn list_channel(&self, user: &str) -> Result<Vec<LedgerEntry>, ClientError> {
        self.endpoint.get(&["api", "channels", user, "transactions"]).await
    }

    /// Transfers `amount` from `from_user` to `to_user`.
    pub async fn transfer(
        &self,
        from_user: &str,
        to_user: &str,
        amount: f64,
    ) -> Result<TransferResponse, ClientError> {
        let req = TransferRequest {
            from_user: from_user.to_string(),
            to_user: to_user.to_string(),
            amount,
        };
        self.endpoint.post(&["api", "channels", "transfer"], &req).await
    }
}
