//! Payment domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::amount::Amount;
use super::record::{Record, RecordId};

/// A payment received from a named payer.
///
/// Payments are immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: RecordId,
    pub amount: Amount,
    /// Name of whoever paid
    #[schema(example = "Ishita")]
    pub payer_name: String,
    pub paid_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(id: RecordId, amount: Amount, payer_name: String, paid_at: DateTime<Utc>) -> Self {
        Self {
            id,
            amount,
            payer_name,
            paid_at,
        }
    }
}

impl Record for Payment {
    fn id(&self) -> RecordId {
        self.id
    }
}
