//! In-memory per-user ledger store.

use std::collections::VecDeque;

use async_trait::async_trait;
use chrono::Utc;
use echopay_types::{
    Amount, DomainError, LedgerEntry, LedgerRepository, RecordId, StoreError, TransferRequest,
    UserId,
};
use tokio::sync::RwLock;

use crate::seed;

/// Ledgers for `user-a` and `user-b`, each newest first.
///
/// A transfer appends to both ledgers inside a single write lock, so a reader
/// sees both halves of a transfer or neither.
pub struct InMemoryLedgerStore {
    state: RwLock<LedgerState>,
}

struct LedgerState {
    user_a: VecDeque<LedgerEntry>,
    user_b: VecDeque<LedgerEntry>,
    next_id: RecordId,
}

impl LedgerState {
    fn ledger(&self, user: UserId) -> &VecDeque<LedgerEntry> {
        match user {
            UserId::UserA => &self.user_a,
            UserId::UserB => &self.user_b,
        }
    }

    fn ledger_mut(&mut self, user: UserId) -> &mut VecDeque<LedgerEntry> {
        match user {
            UserId::UserA => &mut self.user_a,
            UserId::UserB => &mut self.user_b,
        }
    }
}

/// Both ledgers, copied under one read lock.
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerSnapshot {
    pub user_a: Vec<LedgerEntry>,
    pub user_b: Vec<LedgerEntry>,
}

impl InMemoryLedgerStore {
    /// Creates a store with two empty ledgers.
    pub fn new() -> Self {
        Self {
            state: RwLock::new(LedgerState {
                user_a: VecDeque::new(),
                user_b: VecDeque::new(),
                next_id: RecordId::new(1),
            }),
        }
    }

    /// Creates a store holding the seeded transfer, one entry per user.
    pub fn seeded() -> Result<Self, DomainError> {
        let (sent, received) = seed::ledger()?;
        let next_id = sent.id.max(received.id).next();

        let mut state = LedgerState {
            user_a: VecDeque::new(),
            user_b: VecDeque::new(),
            next_id,
        };
        state.ledger_mut(sent.user).push_front(sent);
        state.ledger_mut(received.user).push_front(received);

        Ok(Self {
            state: RwLock::new(state),
        })
    }

    /// Copies both ledgers at one instant.
    pub async fn snapshot(&self) -> LedgerSnapshot {
        let state = self.state.read().await;
        LedgerSnapshot {
            user_a: state.user_a.iter().cloned().collect(),
            user_b: state.user_b.iter().cloned().collect(),
        }
    }
}

impl Default for InMemoryLedgerStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LedgerRepository for InMemoryLedgerStore {
    async fn list_by_user(&self, user: &str) -> Result<Vec<LedgerEntry>, StoreError> {
        let user: UserId = user.parse()?;

        let state = self.state.read().await;
        Ok(state.ledger(user).iter().cloned().collect())
    }

    async fn transfer(
        &self,
        req: TransferRequest,
    ) -> Result<(LedgerEntry, LedgerEntry), StoreError> {
        let from: UserId = req.from_user.parse()?;
        let to: UserId = req.to_user.parse()?;
        if from == to {
            return Err(DomainError::SameParticipant(from).into());
        }
        let amount = Amount::new(req.amount)?;

        let mut state = self.state.write().await;
        let first_id = state.next_id;
        let (sent, received) = LedgerEntry::transfer_pair(first_id, from, to, amount, Utc::now());
        state.next_id = received.id.next();

        state.ledger_mut(from).push_front(sent.clone());
        state.ledger_mut(to).push_front(received.clone());
        drop(state);

        tracing::debug!(
            from = %from,
            to = %to,
            amount = %amount,
            sent_id = %sent.id,
            received_id = %received.id,
            "transfer applied"
        );
        Ok((sent, received))
    }
}
