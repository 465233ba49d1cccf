//! Transaction domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::amount::Amount;
use super::record::{Record, RecordId};

/// The direction of a transaction, from the account holder's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money leaving to the counterparty
    Sent,
    /// Money arriving from the counterparty
    Received,
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Sent => write!(f, "sent"),
            TransactionType::Received => write!(f, "received"),
        }
    }
}

/// A recorded transaction with an external counterparty.
///
/// Transactions are immutable once created - they represent
/// a historical record of what happened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: RecordId,
    pub amount: Amount,
    #[schema(example = "Kabir")]
    pub counterparty: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    /// Creates a new outgoing transaction.
    pub fn sent(
        id: RecordId,
        amount: Amount,
        counterparty: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::from_parts(id, TransactionType::Sent, amount, counterparty, created_at)
    }

    /// Creates a new incoming transaction.
    pub fn received(
        id: RecordId,
        amount: Amount,
        counterparty: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self::from_parts(
            id,
            TransactionType::Received,
            amount,
            counterparty,
            created_at,
        )
    }

    pub fn from_parts(
        id: RecordId,
        transaction_type: TransactionType,
        amount: Amount,
        counterparty: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            amount,
            counterparty,
            transaction_type,
            created_at,
        }
    }
}

impl Record for Transaction {
    fn id(&self) -> RecordId {
        self.id
    }
}
