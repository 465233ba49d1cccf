//! EchoPay Application Services
//!
//! Validate requests and orchestrate the stores through their ports.
//! Contain NO infrastructure logic - pure business orchestration.

use echopay_types::{
    Amount, AppError, CreatePaymentRequest, DomainError, LedgerEntry, LedgerRepository, Payment,
    PaymentRepository, RecordTransactionRequest, Transaction, TransactionRepository,
    TransactionType, TransferRequest, TransferResponse,
};

/// Application service for payments.
///
/// Generic over `R: PaymentRepository` - the adapter is injected at compile time.
pub struct PaymentService<R: PaymentRepository> {
    repo: R,
}

impl<R: PaymentRepository> PaymentService<R> {
    /// Creates a new payment service with the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all payments, newest first.
    pub async fn list_payments(&self) -> Vec<Payment> {
        self.repo.list().await
    }

    /// Records a payment.
    pub async fn create_payment(&self, req: CreatePaymentRequest) -> Result<Payment, AppError> {
        let amount = Amount::new(req.amount)?;
        let payer_name = require("payerName", req.payer_name)?;

        Ok(self.repo.add(amount, payer_name).await)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Transactions
// ─────────────────────────────────────────────────────────────────────────────

/// Application service for sent/received transactions.
pub struct TransactionService<R: TransactionRepository> {
    repo: R,
}

impl<R: TransactionRepository> TransactionService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Lists all transactions, newest first.
    pub async fn list_transactions(&self) -> Vec<Transaction> {
        self.repo.list().await
    }

    /// Records a transaction in the given direction.
    pub async fn record(
        &self,
        req: RecordTransactionRequest,
        transaction_type: TransactionType,
    ) -> Result<Transaction, AppError> {
        let amount = Amount::new(req.amount)?;
        let counterparty = require("counterparty", req.counterparty)?;

        Ok(self.repo.add(amount, counterparty, transaction_type).await)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Channels
// ─────────────────────────────────────────────────────────────────────────────

/// Application service for the two-party transfer channel.
///
/// User and amount checks live in the ledger store, which owns the
/// participant list; this layer only maps its errors.
pub struct ChannelService<R: LedgerRepository> {
    repo: R,
}

impl<R: LedgerRepository> ChannelService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    /// Lists `user`'s ledger, newest first.
    pub async fn list_for_user(&self, user: &str) -> Result<Vec<LedgerEntry>, AppError> {
        self.repo.list_by_user(user).await.map_err(Into::into)
    }

    /// Applies a transfer and returns both sides.
    pub async fn transfer(&self, req: TransferRequest) -> Result<TransferResponse, AppError> {
        let (from_user_log, to_user_log) = self.repo.transfer(req).await?;
        Ok(TransferResponse {
            from_user_log,
            to_user_log,
        })
    }
}

/// Rejects blank strings.
fn require(field: &'static str, value: String) -> Result<String, DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::MissingField(field));
    }
    Ok(value)
}
