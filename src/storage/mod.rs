mod local;
mod memory;
mod selection;

pub use local::LocalStorageStore;
pub use memory::MemoryStore;
pub use selection::SelectionStore;

/// Selection store backed by whichever browser storage is available
pub type BrowserSelection = SelectionStore<Box<dyn KeyValueStore>>;

/// Why a value could not be persisted
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("Storage backend is not available")]
    Unavailable,
    #[error("Failed to write value: {0}")]
    Write(String),
    #[error("Failed to serialize value: {0}")]
    Serialize(String),
}

/// Synchronous key/value persistence port.
///
/// Reads fail soft: a missing or unreadable key is `None`.
pub trait KeyValueStore {
    fn read(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the key if present
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the removal.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Box<T> {
    fn read(&self, key: &str) -> Option<String> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

/// Browser local storage when available, otherwise an in-memory fallback
#[must_use]
pub fn browser_store() -> Box<dyn KeyValueStore> {
    match LocalStorageStore::open() {
        Ok(store) => Box::new(store),
        Err(e) => {
            leptos::logging::warn!("{e}, selections will not survive a reload");
            Box::new(MemoryStore::default())
        }
    }
}
