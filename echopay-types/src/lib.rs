//! # EchoPay Types
//!
//! Domain types and port traits for the EchoPay payments and transactions ledgers.
//! This crate has ZERO external IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! This crate represents the **innermost core** of the hexagonal architecture:
//! - `domain/` - Pure domain types (Amount, Payment, Transaction, LedgerEntry)
//! - `ports/` - Trait definitions that store adapters must implement
//! - `dto/` - Data Transfer Objects for API boundaries
//! - `error/` - Domain, store and application error types

pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Amount, Channel, Direction, LedgerEntry, Payment, Record, RecordId, Transaction,
    TransactionType, UserId,
};
pub use dto::*;
pub use error::{AppError, DomainError, StoreError};
pub use ports::{LedgerRepository, PaymentRepository, TransactionRepository};
