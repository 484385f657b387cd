use std::collections::HashMap;

use burncheck_core::models::HistoryEntry;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::{latest, retain_latest, HistoryStore, DEFAULT_CAPACITY};

/// In-process history. Lost on exit.
#[derive(Debug)]
pub struct MemoryStore {
    entries: Mutex<HashMap<i64, Vec<HistoryEntry>>>,
    capacity: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            capacity,
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for MemoryStore {
    async fn append(&self, user_id: i64, entry: HistoryEntry) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().await;
        let user_entries = entries.entry(user_id).or_default();
        user_entries.push(entry);
        retain_latest(user_entries, self.capacity);
        Ok(())
    }

    async fn history(
        &self,
        user_id: i64,
        limit: usize,
    ) -> Result<Vec<HistoryEntry>, StorageError> {
        let entries = self.entries.lock().await;
        Ok(entries
            .get(&user_id)
            .map(|user_entries| latest(user_entries, limit))
            .unwrap_or_default())
    }
}
