use std::path::Path;

use waypoint_storage::FileSlot;
use waypoint_tracker::GoalStore;

use crate::config::WaypointConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    Human,
    Json,
}

/// Everything a tracker command handler needs.
pub struct AppState {
    pub store: GoalStore<FileSlot>,
    pub output: Output,
}

/// Pick the snapshot location: command-line override, then config, then
/// the platform data dir.
pub fn resolve_slot(data_file: Option<&Path>, config: &WaypointConfig) -> eyre::Result<FileSlot> {
    if let Some(path) = data_file.or(config.data_file.as_deref()) {
        return Ok(FileSlot::new(path));
    }
    Ok(FileSlot::default_location()?)
}

impl AppState {
    pub fn open(data_file: Option<&Path>, config: &WaypointConfig, output: Output) -> eyre::Result<Self> {
        let slot = resolve_slot(data_file, config)?;
        tracing::debug!(slot = %slot.path().display(), "opening tracker");
        Ok(Self {
            store: GoalStore::open(slot)?,
            output,
        })
    }
}
