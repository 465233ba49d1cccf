//! Data Transfer Objects (DTOs) for requests and responses.
//!
//! Request fields default when absent so that a missing field surfaces as a
//! validation error (`payerName is required`) rather than a decode error.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::LedgerEntry;

// ─────────────────────────────────────────────────────────────────────────────
// Payment DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to record a payment.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CreatePaymentRequest {
    /// Amount paid, must be greater than 0
    #[schema(example = 321.99)]
    pub amount: f64,
    /// Name of the payer, must not be empty
    #[schema(example = "Ishita")]
    pub payer_name: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Transaction DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to record a sent or received transaction.
///
/// The direction comes from the route (`/send` or `/receive`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct RecordTransactionRequest {
    #[schema(example = 99.5)]
    pub amount: f64,
    #[schema(example = "Kabir")]
    pub counterparty: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Channel DTOs
// ─────────────────────────────────────────────────────────────────────────────

/// Request to move money between the two channel participants.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct TransferRequest {
    #[schema(example = "user-a")]
    pub from_user: String,
    #[schema(example = "user-b")]
    pub to_user: String,
    #[schema(example = 99.5)]
    pub amount: f64,
}

/// Both sides of a completed transfer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferResponse {
    pub from_user_log: LedgerEntry,
    pub to_user_log: LedgerEntry,
}
