use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use waypoint_core::slot_keys;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaypointConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    /// Where the tracker snapshot lives. `None` uses the platform data dir.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset. Added in v1.
    #[serde(default)]
    pub log_filter: Option<String>,
    #[serde(default)]
    pub log_format: LogFormat,
    pub created_at: jiff::Timestamp,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            LogFormat::Text => "text",
            LogFormat::Json => "json",
        }
    }
}

impl Default for WaypointConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            data_file: None,
            log_filter: None,
            log_format: LogFormat::Text,
            created_at: jiff::Timestamp::now(),
        }
    }
}

/// Printable summary for `config show`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigInfo {
    pub config_path: String,
    pub exists: bool,
    pub data_file: String,
    pub log_filter: String,
    pub log_format: LogFormat,
    pub created_at: String,
}

pub fn default_config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join(slot_keys::APP_DIR))
}

pub fn config_path(dir: &Path) -> PathBuf {
    dir.join(slot_keys::CONFIG_FILE)
}

pub fn has_config(dir: &Path) -> bool {
    config_path(dir).exists()
}

pub fn load_config(dir: &Path) -> eyre::Result<WaypointConfig> {
    let path = config_path(dir);
    let contents = std::fs::read_to_string(&path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;

    // Parse as raw JSON so we can run migrations before deserializing.
    let json: serde_json::Value = serde_json::from_str(&contents)?;
    let on_disk_version = json
        .get("config_version")
        .and_then(|v| v.as_u64())
        .unwrap_or(0) as u32;

    let migrated = migrate(json, on_disk_version)?;
    let config: WaypointConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Load the config in `dir`, or defaults when none has been saved yet.
pub fn load_or_default(dir: &Path) -> eyre::Result<WaypointConfig> {
    if has_config(dir) {
        load_config(dir)
    } else {
        Ok(WaypointConfig::default())
    }
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
///
/// Each migration is a pure transform on the raw JSON value.
pub fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update Waypoint."
        ));
    }

    // v0 → v1: the log settings did not exist; pre-versioned configs may
    // also lack a creation time.
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        obj.entry("log_filter").or_insert(serde_json::Value::Null);
        obj.entry("log_format")
            .or_insert(serde_json::Value::String("text".to_string()));
        obj.entry("created_at")
            .or_insert(serde_json::Value::String(jiff::Timestamp::now().to_string()));
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (added log settings)");
    }

    Ok(json)
}

pub fn save_config(dir: &Path, config: &WaypointConfig) -> eyre::Result<()> {
    std::fs::create_dir_all(dir)?;

    // Always write the current version, regardless of what was loaded.
    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;

    let path = config_path(dir);
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = dir.join(slot_keys::temp_file(slot_keys::CONFIG_FILE));
    std::fs::write(&tmp_path, json.as_bytes())?;

    // Set restrictive permissions on Unix before renaming
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, &path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

pub fn config_info(dir: &Path, config: &WaypointConfig, data_file: &Path) -> ConfigInfo {
    ConfigInfo {
        config_path: config_path(dir).display().to_string(),
        exists: has_config(dir),
        data_file: data_file.display().to_string(),
        log_filter: config
            .log_filter
            .clone()
            .unwrap_or_else(|| crate::DEFAULT_LOG_FILTER.to_string()),
        log_format: config.log_format,
        created_at: config.created_at.to_string(),
    }
}
