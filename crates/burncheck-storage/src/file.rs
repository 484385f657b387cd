use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use burncheck_core::models::HistoryEntry;
use tokio::sync::Mutex;

use crate::error::StorageError;
use crate::{latest, retain_latest, HistoryStore, DEFAULT_CAPACITY};

type HistoryFile = BTreeMap<i64, Vec<HistoryEntry>>;

/// History kept in a single pretty-printed JSON file mapping user id to
/// entries. Every append is a read-modify-write of the whole file, serialized
/// through one lock within the process.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    capacity: usize,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_capacity(path, DEFAULT_CAPACITY)
    }

    pub fn with_capacity(path: impl Into<PathBuf>, capacity: usize) -> Self {
        Self {
            path: path.into(),
            capacity,
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Load the history file. A missing file is an empty history.
async fn load(path: &Path) -> Result<HistoryFile, StorageError> {
    match tokio::fs::read(path).await {
        Ok(body) => Ok(serde_json::from_slice(&body)?),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no history file yet");
            Ok(HistoryFile::new())
        }
        Err(source) => Err(StorageError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

async fn save(path: &Path, value: &HistoryFile) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }
    tokio::fs::write(path, body).await.map_err(write_err)
}

impl HistoryStore for JsonFileStore {
    async fn append(&self, user_id: i64, entry: HistoryEntry) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut file = load(&self.path).await?;
        let user_entries = file.entry(user_id).or_default();
        user_entries.push(entry);
        retain_latest(user_entries, self.capacity);
        save(&self.path, &file).await
    }

    async fn history(
        &self,
        user_id: i64,
        limit: usize,
    ) -> Result<Vec<HistoryEntry>, StorageError> {
        let _guard = self.lock.lock().await;
        let file = load(&self.path).await?;
        Ok(file
            .get(&user_id)
            .map(|user_entries| latest(user_entries, limit))
            .unwrap_or_default())
    }
}
