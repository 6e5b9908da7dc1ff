//! `localStorage` adapter for the column-layout store.

use common::error::StoreError;
use common::store::{KeyValueStore, MemoryStore};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};

/// Origin-scoped browser storage.
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    pub fn open() -> Result<Self, StoreError> {
        let window =
            web_sys::window().ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StoreError::Unavailable(
                "localStorage is disabled".to_string(),
            )),
            Err(err) => Err(StoreError::Unavailable(describe(&err))),
        }
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.storage.get_item(key).map_err(|err| StoreError::Read {
            key: key.to_string(),
            reason: describe(&err),
        })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StoreError::Write {
                key: key.to_string(),
                reason: describe(&err),
            })
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        self.storage.remove_item(key).map_err(|err| StoreError::Write {
            key: key.to_string(),
            reason: describe(&err),
        })
    }
}

/// Browser storage when the page may use it, memory for this tab otherwise.
pub enum DashboardStore {
    Browser(BrowserStorage),
    Memory(MemoryStore),
}

impl DashboardStore {
    pub fn open() -> Self {
        match BrowserStorage::open() {
            Ok(storage) => DashboardStore::Browser(storage),
            Err(err) => {
                warn!("{err}; column layout will not outlive this page");
                DashboardStore::Memory(MemoryStore::new())
            }
        }
    }
}

impl KeyValueStore for DashboardStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        match self {
            DashboardStore::Browser(store) => store.get(key),
            DashboardStore::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            DashboardStore::Browser(store) => store.set(key, value),
            DashboardStore::Memory(store) => store.set(key, value),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        match self {
            DashboardStore::Browser(store) => store.remove(key),
            DashboardStore::Memory(store) => store.remove(key),
        }
    }
}

/// Readable text for a thrown JS value (`QuotaExceededError: ...`).
pub fn describe(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return format!("{}: {}", String::from(error.name()), String::from(error.message()));
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}
