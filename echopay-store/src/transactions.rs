//! In-memory store for sent/received transactions.

use async_trait::async_trait;
use chrono::Utc;
use echopay_types::{Amount, DomainError, Transaction, TransactionRepository, TransactionType};

use crate::record_log::RecordLog;
use crate::seed;

/// Transactions kept newest first in process memory.
#[derive(Default)]
pub struct InMemoryTransactionStore {
    log: RecordLog<Transaction>,
}

impl InMemoryTransactionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the three seeded transactions.
    pub fn seeded() -> Result<Self, DomainError> {
        Ok(Self {
            log: RecordLog::seeded(seed::transactions()?),
        })
    }
}

#[async_trait]
impl TransactionRepository for InMemoryTransactionStore {
    async fn list(&self) -> Vec<Transaction> {
        self.log.list().await
    }

    async fn add(
        &self,
        amount: Amount,
        counterparty: String,
        transaction_type: TransactionType,
    ) -> Transaction {
        let tx = self
            .log
            .append_with(|id| {
                Transaction::from_parts(id, transaction_type, amount, counterparty, Utc::now())
            })
            .await;
        tracing::debug!(id = %tx.id, kind = %tx.transaction_type, "transaction recorded");
        tx
    }
}
