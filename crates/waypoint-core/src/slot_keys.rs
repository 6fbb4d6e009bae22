//! Slot key conventions.
//!
//! Pure string functions. These define where the tracker snapshot lives,
//! whatever backend holds it.

/// Fixed namespace key of the persisted tracker snapshot.
pub const STATE_KEY: &str = "career-tracker-storage";

/// Application directory name under the platform config/data dirs.
pub const APP_DIR: &str = "com.waypoint.tracker";

pub const CONFIG_FILE: &str = "config.json";

/// File name of the snapshot when the slot is a plain file.
pub fn state_file() -> String {
    format!("{STATE_KEY}.json")
}

/// Sibling file used for write-then-rename.
pub fn temp_file(file_name: &str) -> String {
    format!("{file_name}.tmp")
}
