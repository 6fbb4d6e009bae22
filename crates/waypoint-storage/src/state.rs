use serde::{de::DeserializeOwned, Serialize};

use crate::error::StorageError;
use crate::slot::StateSlot;

/// Load a JSON state value from a slot. `Ok(None)` if the slot is empty.
pub fn load_state<T: DeserializeOwned>(slot: &impl StateSlot) -> Result<Option<T>, StorageError> {
    let Some(bytes) = slot.read()? else {
        return Ok(None);
    };
    let value: T = serde_json::from_slice(&bytes)?;
    Ok(Some(value))
}

/// Save a JSON state value to a slot, replacing what was there.
pub fn save_state<T: Serialize>(slot: &mut impl StateSlot, value: &T) -> Result<(), StorageError> {
    let body = serde_json::to_vec_pretty(value)?;
    slot.write(&body)
}
