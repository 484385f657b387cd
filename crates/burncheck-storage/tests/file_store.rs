use burncheck_core::models::{ResultRecord, TestType};
use burncheck_instruments::questionnaires::quick;
use burncheck_storage::error::StorageError;
use burncheck_storage::file::JsonFileStore;
use burncheck_storage::HistoryStore;

fn quick_record(value: u8) -> ResultRecord {
    quick::score(&[value; 10]).unwrap()
}

#[tokio::test]
async fn missing_file_is_an_empty_history() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::new(dir.path().join("history.json"));

    assert!(store.history(1, 10).await.unwrap().is_empty());
    assert!(store.statistics(1).await.unwrap().is_none());
    assert!(!store.path().exists());
}

#[tokio::test]
async fn entries_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("history.json");

    let saved = {
        let store = JsonFileStore::new(&path);
        store.save_result(42, quick_record(1)).await.unwrap();
        store.save_result(42, quick_record(3)).await.unwrap()
    };

    let reopened = JsonFileStore::new(&path);
    let history = reopened.history(42, 10).await.unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[1], saved);
    assert_eq!(history[0].test_type(), TestType::Quick);
}

#[tokio::test]
async fn stored_entries_are_flat_envelopes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    let store = JsonFileStore::new(&path);
    store.save_result(5, quick_record(2)).await.unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    let entry = &value["5"][0];
    assert_eq!(entry["test_type"], "quick");
    assert_eq!(entry["scores"]["total"], 20);
    assert!(entry["id"].is_string());
    assert!(entry["timestamp"].is_string());
}

#[tokio::test]
async fn capacity_applies_to_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonFileStore::with_capacity(dir.path().join("history.json"), 2);
    for value in 0..=4u8 {
        store.save_result(1, quick_record(value)).await.unwrap();
    }

    let totals: Vec<f64> = store
        .history(1, usize::MAX)
        .await
        .unwrap()
        .iter()
        .map(|e| e.record.primary_value())
        .collect();
    assert_eq!(totals, vec![30.0, 40.0]);
}

#[tokio::test]
async fn corrupt_file_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "not json").unwrap();

    let store = JsonFileStore::new(&path);
    let err = store.history(1, 10).await.unwrap_err();
    assert!(matches!(err, StorageError::Serialization(_)));
}
