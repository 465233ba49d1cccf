//! In-memory payment store.

use async_trait::async_trait;
use chrono::Utc;
use echopay_types::{Amount, DomainError, Payment, PaymentRepository};

use crate::record_log::RecordLog;
use crate::seed;

/// Payments kept newest first in process memory.
#[derive(Default)]
pub struct InMemoryPaymentStore {
    log: RecordLog<Payment>,
}

impl InMemoryPaymentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the three seeded payments.
    pub fn seeded() -> Result<Self, DomainError> {
        Ok(Self {
            log: RecordLog::seeded(seed::payments()?),
        })
    }
}

#[async_trait]
impl PaymentRepository for InMemoryPaymentStore {
    async fn list(&self) -> Vec<Payment> {
        self.log.list().await
    }

    async fn add(&self, amount: Amount, payer_name: String) -> Payment {
        let payment = self
            .log
            .append_with(|id| Payment::new(id, amount, payer_name, Utc::now()))
            .await;
        tracing::debug!(id = %payment.id, amount = %payment.amount, "payment recorded");
        payment
    }
}
