use std::path::{Path, PathBuf};

use burncheck_storage::{DEFAULT_CAPACITY, DEFAULT_VIEW_LIMIT};
use serde::{Deserialize, Serialize};

/// Schema version written by this build. Every bump needs a step in
/// [`migrate`].
pub const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurncheckConfig {
    /// 0 when absent: written before versioning.
    #[serde(default)]
    pub config_version: u32,
    /// History file; the platform data directory when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub history_path: Option<PathBuf>,
    /// Added in v1.
    pub history_capacity: usize,
    /// Added in v1.
    pub history_view_limit: usize,
}

impl Default for BurncheckConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            history_path: None,
            history_capacity: DEFAULT_CAPACITY,
            history_view_limit: DEFAULT_VIEW_LIMIT,
        }
    }
}

impl BurncheckConfig {
    /// History file location: the explicit override, then the configured
    /// path, then `<data dir>/burncheck/history.json`.
    pub fn resolve_history_path(&self, override_path: Option<&Path>) -> eyre::Result<PathBuf> {
        if let Some(path) = override_path.or(self.history_path.as_deref()) {
            return Ok(path.to_path_buf());
        }
        let base = dirs::data_dir().ok_or_else(|| eyre::eyre!("no data directory found"))?;
        Ok(base.join("burncheck").join("history.json"))
    }
}

pub fn default_config_path() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("burncheck").join("config.json"))
}

/// Load the config at `path`, migrating older versions. A missing file yields
/// the defaults.
pub fn load_config(path: &Path) -> eyre::Result<BurncheckConfig> {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(BurncheckConfig::default());
        }
        Err(e) => {
            return Err(eyre::eyre!(
                "failed to read config at {}: {e}",
                path.display()
            ));
        }
    };

    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: BurncheckConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update burncheck."
        ));
    }

    // v0 → v1: history limits became configurable
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("history_capacity")
            .or_insert(serde_json::Value::from(DEFAULT_CAPACITY));
        obj.entry("history_view_limit")
            .or_insert(serde_json::Value::from(DEFAULT_VIEW_LIMIT));
        obj.insert("config_version".to_string(), serde_json::Value::from(1));
        tracing::info!("migrated config v0 → v1 (added history limits)");
    }

    Ok(json)
}

pub fn save_config(path: &Path, config: &BurncheckConfig) -> eyre::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)?;
    }

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;
    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}
