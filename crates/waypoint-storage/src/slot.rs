use crate::error::StorageError;

/// A durable location holding a single serialized snapshot.
///
/// The tracker calls [`StateSlot::write`] after every mutation, so
/// implementations must replace the whole value (last write wins).
pub trait StateSlot {
    /// Read the stored bytes. `Ok(None)` means nothing has been written yet.
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError>;

    /// Replace the stored bytes.
    fn write(&mut self, bytes: &[u8]) -> Result<(), StorageError>;

    /// Human-readable location for log lines.
    fn describe(&self) -> String;
}

impl<S: StateSlot + ?Sized> StateSlot for Box<S> {
    fn read(&self) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).read()
    }

    fn write(&mut self, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).write(bytes)
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
