//! In-memory slot storage.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::{Storage, StorageError};

/// Holds slots in a process-local map.
///
/// Contents die with the process, which is exactly the lifetime the
/// session-scoped slots want. Also the backend of choice in tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    /// Create an empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Storage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(slot).cloned())
    }

    fn write(&self, slot: &str, payload: &str) -> Result<(), StorageError> {
        self.lock().insert(slot.to_owned(), payload.to_owned());
        Ok(())
    }

    fn remove(&self, slot: &str) -> Result<(), StorageError> {
        self.lock().remove(slot);
        Ok(())
    }
}
