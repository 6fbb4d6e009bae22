use std::path::{Path, PathBuf};

use waypoint_core::slot_keys;

use crate::error::StorageError;
use crate::slot::StateSlot;

/// A slot backed by one JSON file on local disk.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The snapshot file inside `dir`, named after the fixed state key.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(slot_keys::state_file()))
    }

    /// `<platform data dir>/com.waypoint.tracker/career-tracker-storage.json`.
    pub fn default_location() -> Result<Self, StorageError> {
        let base = dirs::data_dir().ok_or(StorageError::NoDataDir)?;
        Ok(Self::in_dir(base.join(slot_keys::APP_DIR)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(slot_keys::state_file);
        self.path.with_file_name(slot_keys::temp_file(&name))
    }
}

impl StateSlot for FileSlot {
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError> {
        match std::fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        let write_err = |source| StorageError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir).map_err(write_err)?;
        }

        // Write to a temp file then rename, so readers never see a torn snapshot
        let tmp_path = self.temp_path();
        std::fs::write(&tmp_path, bytes).map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))
                .map_err(write_err)?;
        }

        std::fs::rename(&tmp_path, &self.path).map_err(write_err)?;

        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "snapshot written");
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
