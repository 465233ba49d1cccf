//! Append-only, newest-first record list shared by the flat stores.

use std::collections::VecDeque;

use echopay_types::{Record, RecordId};
use tokio::sync::RwLock;

/// Ordered records plus the counter that names the next one.
///
/// Reads take the shared lock; appends take the exclusive lock for both id
/// allocation and insertion, so ids are never handed out twice.
pub struct RecordLog<T: Record> {
    state: RwLock<LogState<T>>,
}

struct LogState<T> {
    /// Front is the most recently added record.
    records: VecDeque<T>,
    next_id: RecordId,
}

impl<T: Record> RecordLog<T> {
    /// Creates an empty log whose first record gets id `1`.
    pub fn new() -> Self {
        Self::seeded(Vec::new())
    }

    /// Creates a log holding `seed`, which must already be newest first.
    ///
    /// The counter starts right above the highest seeded id.
    pub fn seeded(seed: Vec<T>) -> Self {
        let next_id = seed
            .iter()
            .map(Record::id)
            .max()
            .map(|id| id.next())
            .unwrap_or(RecordId::new(1));

        Self {
            state: RwLock::new(LogState {
                records: seed.into(),
                next_id,
            }),
        }
    }

    /// Returns a copy of every record, newest first.
    pub async fn list(&self) -> Vec<T> {
        self.state.read().await.records.iter().cloned().collect()
    }

    /// Allocates the next id, builds a record with it and puts it at the front.
    pub async fn append_with<F>(&self, build: F) -> T
    where
        F: FnOnce(RecordId) -> T,
    {
        let mut state = self.state.write().await;
        let id = state.next_id;
        state.next_id = id.next();

        let record = build(id);
        state.records.push_front(record.clone());
        record
    }
}

impl<T: Record> Default for RecordLog<T> {
    fn default() -> Self {
        Self::new()
    }
}
