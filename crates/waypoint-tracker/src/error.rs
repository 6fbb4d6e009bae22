use thiserror::Error;

use waypoint_storage::error::StorageError;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("failed to load tracker state: {0}")]
    Load(#[source] StorageError),

    #[error("failed to persist tracker state: {0}")]
    Persist(#[from] StorageError),
}
