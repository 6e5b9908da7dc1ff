//! Persistence of the grid's column layout.
//!
//! [`KeyValueStore`] is the seam to whatever origin-scoped storage the host
//! provides (`localStorage` in the browser, [`MemoryStore`] elsewhere).
//! [`ColumnStateStore`] sits on top of it and is the fault boundary: every
//! storage or decoding failure is logged there and turned into "nothing was
//! saved" / "nothing to restore", so a broken store can never break the grid.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, error, warn};

use crate::error::StoreError;
use crate::model::ColumnState;

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Rc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        (**self).remove(key)
    }
}

/// In-process store. Used in tests and as the fallback when the browser
/// refuses access to `localStorage`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Column layout persisted as a JSON array under one fixed key.
pub struct ColumnStateStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ColumnStateStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Persists `state`. Returns whether the write went through; a failed
    /// write is logged and otherwise ignored.
    pub fn save(&self, state: &[ColumnState]) -> bool {
        match self.try_save(state) {
            Ok(()) => {
                debug!("saved layout of {} columns under `{}`", state.len(), self.key);
                true
            }
            Err(err) => {
                error!("Failed to save column state: {err}");
                false
            }
        }
    }

    /// Returns the last successfully saved layout, or `None` when nothing
    /// usable is stored.
    pub fn load(&self) -> Option<Vec<ColumnState>> {
        match self.try_load() {
            Ok(state) => state,
            Err(err) => {
                warn!("Failed to load column state: {err}");
                None
            }
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.store.remove(&self.key) {
            warn!("Failed to clear column state: {err}");
        }
    }

    fn try_save(&self, state: &[ColumnState]) -> Result<(), StoreError> {
        let json = serde_json::to_string(state).map_err(StoreError::Encode)?;
        self.store.set(&self.key, &json)
    }

    fn try_load(&self) -> Result<Option<Vec<ColumnState>>, StoreError> {
        let Some(raw) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        serde_json::from_str::<Option<Vec<ColumnState>>>(&raw).map_err(StoreError::Corrupt)
    }
}
