use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::StorageError;
use crate::slot::StateSlot;

/// In-memory slot. Clones share the same cell, so a test can keep a handle
/// and inspect what the tracker wrote.
#[derive(Debug, Clone, Default)]
pub struct MemorySlot {
    cell: Arc<Mutex<Option<Vec<u8>>>>,
    writes: Arc<Mutex<usize>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot that already holds `bytes`.
    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        let slot = Self::default();
        *lock(&slot.cell) = Some(bytes.into());
        slot
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        lock(&self.cell).clone()
    }

    /// Number of writes since creation.
    pub fn write_count(&self) -> usize {
        *lock(&self.writes)
    }
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl StateSlot for MemorySlot {
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.contents())
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        *lock(&self.cell) = Some(bytes.to_vec());
        *lock(&self.writes) += 1;
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
