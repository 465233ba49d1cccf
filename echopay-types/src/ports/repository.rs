//! Repository port traits.
//!
//! These are the primary ports in our hexagonal architecture.
//! Adapters (the in-memory stores) implement them.

use crate::domain::{Amount, LedgerEntry, Payment, Transaction, TransactionType};
use crate::dto::TransferRequest;
use crate::error::StoreError;

/// Flat, newest-first list of payments.
///
/// Values reaching `add` are already validated; adding never fails.
#[async_trait::async_trait]
pub trait PaymentRepository: Send + Sync + 'static {
    /// Returns every payment, newest first.
    async fn list(&self) -> Vec<Payment>;

    /// Records a payment stamped with the current time.
    async fn add(&self, amount: Amount, payer_name: String) -> Payment;
}

/// Flat, newest-first list of sent/received transactions.
#[async_trait::async_trait]
pub trait TransactionRepository: Send + Sync + 'static {
    /// Returns every transaction, newest first.
    async fn list(&self) -> Vec<Transaction>;

    /// Records a transaction stamped with the current time.
    async fn add(
        &self,
        amount: Amount,
        counterparty: String,
        transaction_type: TransactionType,
    ) -> Transaction;
}

/// Per-user ledgers for the two channel participants.
///
/// `transfer` MUST be atomic: readers see both entries of a transfer or neither.
#[async_trait::async_trait]
pub trait LedgerRepository: Send + Sync + 'static {
    /// Returns `user`'s entries, newest first.
    ///
    /// Fails with `InvalidUser` for anything but `user-a` / `user-b`.
    async fn list_by_user(&self, user: &str) -> Result<Vec<LedgerEntry>, StoreError>;

    /// Moves `amount` from `from_user` to `to_user`.
    ///
    /// Returns the sender's and the receiver's entries, in that order.
    async fn transfer(
        &self,
        req: TransferRequest,
    ) -> Result<(LedgerEntry, LedgerEntry), StoreError>;
}
