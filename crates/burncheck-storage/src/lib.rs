//! burncheck-storage
//!
//! Per-user test history. The scoring engine never touches storage; callers
//! hand finished result records to a [`HistoryStore`].

pub mod error;
pub mod file;
pub mod memory;
pub mod stats;

use burncheck_core::models::{HistoryEntry, ResultRecord};

use error::StorageError;
use stats::Statistics;

/// Entries kept per user; the oldest are evicted first.
pub const DEFAULT_CAPACITY: usize = 20;

/// Entries returned by a history listing unless asked otherwise.
pub const DEFAULT_VIEW_LIMIT: usize = 10;

/// Append-only, capacity-capped result history keyed by user id.
#[allow(async_fn_in_trait)]
pub trait HistoryStore {
    /// Append an entry, evicting the oldest entries beyond capacity.
    async fn append(&self, user_id: i64, entry: HistoryEntry) -> Result<(), StorageError>;

    /// The most recent `limit` entries, oldest first.
    async fn history(&self, user_id: i64, limit: usize)
    -> Result<Vec<HistoryEntry>, StorageError>;

    /// Stamp a finished record with the current time and append it.
    async fn save_result(
        &self,
        user_id: i64,
        record: ResultRecord,
    ) -> Result<HistoryEntry, StorageError> {
        let entry = HistoryEntry::new(record, jiff::Timestamp::now());
        self.append(user_id, entry.clone()).await?;
        tracing::info!(
            user_id,
            entry_id = %entry.id,
            test_type = %entry.test_type(),
            "saved test result"
        );
        Ok(entry)
    }

    /// Statistics over everything retained for the user; `None` when the
    /// history is empty.
    async fn statistics(&self, user_id: i64) -> Result<Option<Statistics>, StorageError> {
        let history = self.history(user_id, usize::MAX).await?;
        Ok(stats::statistics(&history))
    }
}

/// Keep only the last `capacity` items.
pub(crate) fn retain_latest<T>(entries: &mut Vec<T>, capacity: usize) {
    if entries.len() > capacity {
        let excess = entries.len() - capacity;
        entries.drain(..excess);
    }
}

/// The last `limit` items, in insertion order.
pub(crate) fn latest<T: Clone>(entries: &[T], limit: usize) -> Vec<T> {
    let start = entries.len().saturating_sub(limit);
    entries[start..].to_vec()
}
