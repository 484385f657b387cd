use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::ResultRecord;
use super::test_type::TestType;

/// A result record as persisted in a user's history.
///
/// The record is flattened, so a stored entry reads as
/// `{ "id", "timestamp", "test_type", "scores", ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: Uuid,
    pub timestamp: jiff::Timestamp,
    #[serde(flatten)]
    pub record: ResultRecord,
}

impl HistoryEntry {
    pub fn new(record: ResultRecord, timestamp: jiff::Timestamp) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            record,
        }
    }

    pub fn test_type(&self) -> TestType {
        self.record.test_type()
    }
}
