use burncheck_cli::config::{load_config, migrate, save_config, BurncheckConfig, CURRENT_VERSION};
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config(&dir.path().join("config.json")).unwrap();
    assert_eq!(config, BurncheckConfig::default());
    assert_eq!(config.history_capacity, 20);
    assert_eq!(config.history_view_limit, 10);
}

#[test]
fn unversioned_config_is_migrated() {
    let migrated = migrate(json!({ "history_path": "/tmp/h.json" }), 0).unwrap();
    assert_eq!(
        migrated,
        json!({
            "config_version": 1,
            "history_path": "/tmp/h.json",
            "history_capacity": 20,
            "history_view_limit": 10,
        })
    );
}

#[test]
fn migration_keeps_existing_values() {
    let migrated = migrate(json!({ "history_capacity": 5 }), 0).unwrap();
    assert_eq!(migrated["history_capacity"], 5);
}

#[test]
fn newer_config_is_rejected() {
    let err = migrate(json!({}), CURRENT_VERSION + 1).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("burncheck").join("config.json");
    let config = BurncheckConfig {
        config_version: 0,
        history_path: Some(dir.path().join("history.json")),
        history_capacity: 7,
        history_view_limit: 3,
    };
    save_config(&path, &config).unwrap();

    let loaded = load_config(&path).unwrap();
    assert_eq!(loaded.config_version, CURRENT_VERSION);
    assert_eq!(loaded.history_capacity, 7);
    assert_eq!(loaded.history_path, config.history_path);
}

#[test]
fn history_override_wins() {
    let config = BurncheckConfig {
        history_path: Some("/configured.json".into()),
        ..BurncheckConfig::default()
    };
    let explicit = std::path::Path::new("/explicit.json");
    assert_eq!(
        config.resolve_history_path(Some(explicit)).unwrap(),
        explicit
    );
    assert_eq!(
        config.resolve_history_path(None).unwrap(),
        std::path::Path::new("/configured.json")
    );
}
