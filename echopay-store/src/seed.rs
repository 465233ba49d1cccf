//! Fixed records every store starts with.
//!
//! Timestamps are relative to process start. Lists are newest first, the
//! order the stores keep them in.

use chrono::{Duration, Utc};
use echopay_types::{Amount, DomainError, LedgerEntry, Payment, RecordId, Transaction, UserId};

pub fn payments() -> Result<Vec<Payment>, DomainError> {
    let now = Utc::now();
    Ok(vec![
        Payment::new(
            RecordId::new(3),
            Amount::new(75.00)?,
            "Meera".into(),
            now - Duration::minutes(28),
        ),
        Payment::new(
            RecordId::new(2),
            Amount::new(1200.50)?,
            "Rohit".into(),
            now - Duration::minutes(95),
        ),
        Payment::new(
            RecordId::new(1),
            Amount::new(249.00)?,
            "Asha".into(),
            now - Duration::hours(3),
        ),
    ])
}

pub fn transactions() -> Result<Vec<Transaction>, DomainError> {
    let now = Utc::now();
    Ok(vec![
        Transaction::sent(
            RecordId::new(3),
            Amount::new(89.99)?,
            "Dev".into(),
            now - Duration::minutes(15),
        ),
        Transaction::sent(
            RecordId::new(2),
            Amount::new(120.75)?,
            "Nisha".into(),
            now - Duration::minutes(70),
        ),
        Transaction::received(
            RecordId::new(1),
            Amount::new(450.00)?,
            "Aarav".into(),
            now - Duration::hours(2),
        ),
    ])
}

/// One settled transfer of 120 from user-a to user-b.
pub fn ledger() -> Result<(LedgerEntry, LedgerEntry), DomainError> {
    Ok(LedgerEntry::transfer_pair(
        RecordId::new(1),
        UserId::UserA,
        UserId::UserB,
        Amount::new(120.0)?,
        Utc::now() - Duration::minutes(40),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_lists_are_newest_first() {
        let payments = payments().unwrap();
        assert!(payments.windows(2).all(|w| w[0].paid_at > w[1].paid_at));
        assert!(payments.windows(2).all(|w| w[0].id > w[1].id));

        let transactions = transactions().unwrap();
        assert!(
            transactions
                .windows(2)
                .all(|w| w[0].created_at > w[1].created_at)
        );
    }

    #[test]
    fn test_ledger_seed_is_one_transfer() {
        let (sent, received) = ledger().unwrap();
        assert_eq!(sent.user, UserId::UserA);
        assert_eq!(received.user, UserId::UserB);
        assert_eq!(sent.amount, received.amount);
    }
}
