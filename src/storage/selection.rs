use indexmap::IndexSet;

use super::{KeyValueStore, StorageError};
use crate::logging::log;
use crate::models::TimetableData;

/// The visitor's personal set of performance ids.
///
/// Insertion order is kept for display, duplicates are impossible, and every
/// mutation is written back through the persistence port.
#[derive(Debug)]
pub struct SelectionStore<S> {
    store: S,
    key: String,
    ids: IndexSet<String>,
}

impl<S: KeyValueStore> SelectionStore<S> {
    /// Rehydrate the selection stored under `key`.
    ///
    /// A missing or corrupt value yields an empty selection.
    pub fn load(store: S, key: impl Into<String>) -> Self {
        let key = key.into();
        let ids = store
            .read(&key)
            .map(|raw| Self::parse(&raw))
            .unwrap_or_default();
        log!("Restored {} selected performances", ids.len());
        Self { store, key, ids }
    }

    fn parse(raw: &str) -> IndexSet<String> {
        match serde_json::from_str::<Vec<String>>(raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                leptos::logging::warn!("Ignoring corrupt stored selection: {e}");
                IndexSet::new()
            }
        }
    }

    /// Add the id if absent, remove it if present; returns whether it is now selected
    pub fn toggle(&mut self, id: &str) -> bool {
        let selected = if self.ids.shift_remove(id) {
            false
        } else {
            self.ids.insert(id.to_string());
            true
        };
        self.persist();
        selected
    }

    pub fn remove(&mut self, id: &str) {
        if self.ids.shift_remove(id) {
            self.persist();
        }
    }

    pub fn clear(&mut self) {
        if !self.ids.is_empty() {
            self.ids.clear();
            self.persist();
        }
    }

    /// Drop ids that no longer exist in the dataset; returns how many were dropped
    pub fn prune_unknown(&mut self, data: &TimetableData) -> usize {
        let before = self.ids.len();
        self.ids.retain(|id| data.contains(id));
        let dropped = before - self.ids.len();
        if dropped > 0 {
            log!("Dropped {} stale selections", dropped);
            self.persist();
        }
        dropped
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> + Clone {
        self.ids.iter().map(String::as_str)
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        self.ids.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// JSON array of ids in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn serialize(&self) -> Result<String, StorageError> {
        serde_json::to_string(&self.ids).map_err(|e| StorageError::Serialize(e.to_string()))
    }

    fn persist(&self) {
        let result = self.serialize().and_then(|json| self.store.write(&self.key, &json));
        if let Err(e) = result {
            leptos::logging::warn!("Failed to save selection: {e}");
        }
    }
}
