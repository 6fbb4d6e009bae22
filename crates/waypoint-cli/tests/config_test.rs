use serde_json::json;
use tempfile::TempDir;

use waypoint_cli::config::{self, LogFormat, WaypointConfig};
use waypoint_cli::state::resolve_slot;

#[test]
fn missing_config_loads_defaults() {
    let dir = TempDir::new().unwrap();
    assert!(!config::has_config(dir.path()));
    let config = config::load_or_default(dir.path()).unwrap();
    assert!(config.data_file.is_none());
    assert_eq!(config.log_format, LogFormat::Text);
}

#[test]
fn save_then_load_round_trips_and_stamps_version() {
    let dir = TempDir::new().unwrap();
    let config = WaypointConfig {
        config_version: 0,
        data_file: Some(dir.path().join("data.json")),
        log_filter: Some("debug".to_string()),
        ..WaypointConfig::default()
    };
    config::save_config(dir.path(), &config).unwrap();

    let raw: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(config::config_path(dir.path())).unwrap())
            .unwrap();
    assert_eq!(raw["config_version"], 1);

    let loaded = config::load_config(dir.path()).unwrap();
    assert_eq!(loaded.data_file, config.data_file);
    assert_eq!(loaded.log_filter.as_deref(), Some("debug"));
    assert!(!dir.path().join("config.json.tmp").exists());
}

#[test]
fn v0_config_is_migrated() {
    let migrated = config::migrate(json!({ "data_file": "/tmp/tracker.json" }), 0).unwrap();
    assert_eq!(migrated["config_version"], 1);
    assert_eq!(migrated["log_filter"], serde_json::Value::Null);
    assert_eq!(migrated["log_format"], "text");

    let config: WaypointConfig = serde_json::from_value(migrated).unwrap();
    assert_eq!(config.data_file.as_deref(), Some(std::path::Path::new("/tmp/tracker.json")));
}

#[test]
fn newer_config_is_rejected() {
    let err = config::migrate(json!({}), 99).unwrap_err();
    assert!(err.to_string().contains("newer than this build supports"));
}

#[test]
fn non_object_config_is_rejected() {
    assert!(config::migrate(json!([1, 2, 3]), 0).is_err());
}

#[test]
fn command_line_data_file_beats_config() {
    let config = WaypointConfig {
        data_file: Some("/from/config.json".into()),
        ..WaypointConfig::default()
    };
    let slot = resolve_slot(Some(std::path::Path::new("/from/flag.json")), &config).unwrap();
    assert_eq!(slot.path(), std::path::Path::new("/from/flag.json"));

    let slot = resolve_slot(None, &config).unwrap();
    assert_eq!(slot.path(), std::path::Path::new("/from/config.json"));
}

#[cfg(unix)]
#[test]
fn saved_config_is_owner_only() {
    use std::os::unix::fs::PermissionsExt;

    let dir = TempDir::new().unwrap();
    config::save_config(dir.path(), &WaypointConfig::default()).unwrap();
    let mode = std::fs::metadata(config::config_path(dir.path()))
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}

#[test]
fn config_info_uses_camel_case_keys() {
    let dir = TempDir::new().unwrap();
    let config = WaypointConfig::default();
    let info = config::config_info(dir.path(), &config, std::path::Path::new("/data/tracker.json"));
    let json = serde_json::to_value(&info).unwrap();
    assert_eq!(json["dataFile"], "/data/tracker.json");
    assert_eq!(json["logFilter"], waypoint_cli::DEFAULT_LOG_FILTER);
    assert_eq!(json["logFormat"], LogFormat::Text.as_str());
    assert_eq!(json["exists"], false);
    assert!(json.get("config_path").is_none());
}
