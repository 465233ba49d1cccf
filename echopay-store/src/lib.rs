//! # EchoPay Store
//!
//! Concrete store implementations (adapters) for the EchoPay ledgers.
//! This crate provides the in-memory adapters that implement the
//! `PaymentRepository`, `TransactionRepository` and `LedgerRepository` ports.
//!
//! Nothing is persisted: every store is built once at process start from fixed
//! seed data and lives until the process exits.

pub mod ledger;
pub mod payments;
pub mod record_log;
pub mod seed;
pub mod transactions;

pub use ledger::{InMemoryLedgerStore, LedgerSnapshot};
pub use payments::InMemoryPaymentStore;
pub use record_log::RecordLog;
pub use transactions::InMemoryTransactionStore;
