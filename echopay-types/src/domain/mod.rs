//! Domain models for the EchoPay ledgers.

pub mod amount;
pub mod ledger;
pub mod payment;
pub mod record;
pub mod transaction;

pub use amount::Amount;
pub use ledger::{Channel, Direction, LedgerEntry, UserId};
pub use payment::Payment;
pub use record::{Record, RecordId};
pub use transaction::{Transaction, TransactionType};
