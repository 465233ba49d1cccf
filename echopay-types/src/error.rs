//! Error types for the EchoPay ledgers.

use crate::domain::UserId;

/// Domain-level errors (invalid values).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    #[error("amount must be greater than 0, got {0}")]
    NonPositiveAmount(f64),

    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("unknown user: {0}; only user-a and user-b are supported")]
    UnknownUser(String),

    #[error("cannot transfer from {0} to itself")]
    SameParticipant(UserId),
}

/// Store-level errors (contract failures reported by a store).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StoreError {
    #[error("invalid user: {0}")]
    InvalidUser(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

impl From<DomainError> for StoreError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UnknownUser(_) | DomainError::SameParticipant(_) => {
                StoreError::InvalidUser(err.to_string())
            }
            DomainError::NonPositiveAmount(_) | DomainError::MissingField(_) => {
                StoreError::InvalidAmount(err.to_string())
            }
        }
    }
}

/// Application-level errors (for HTTP responses).
///
/// Maps cleanly to HTTP status codes.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AppError {
    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("invalid request body: {0}")]
    MalformedRequest(String),

    #[error("{0}")]
    MissingField(String),

    #[error("{0}")]
    InvalidAmount(String),

    #[error("{0}")]
    InvalidUser(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error("not found: {0}")]
    NotFound(String),
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NonPositiveAmount(_) => AppError::InvalidAmount(err.to_string()),
            DomainError::MissingField(_) => AppError::MissingField(err.to_string()),
            DomainError::UnknownUser(_) | DomainError::SameParticipant(_) => {
                AppError::InvalidUser(err.to_string())
            }
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::InvalidUser(msg) => AppError::InvalidUser(msg),
            StoreError::InvalidAmount(msg) => AppError::InvalidAmount(msg),
        }
    }
}
