//! `localStorage`-backed preference store.

use web_sys::{Storage, Window};

use super::describe;
use crate::store::{MemoryStore, PreferenceStore, StoreError};

/// `localStorage` when the browser grants it, page memory otherwise.
pub enum BrowserStore {
    Local(Storage),
    Memory(MemoryStore),
}

impl BrowserStore {
    pub fn open(window: &Window) -> Self {
        match window.local_storage() {
            Ok(Some(storage)) => Self::Local(storage),
            Ok(None) => {
                log::warn!("storage: localStorage unavailable, preference will not persist");
                Self::Memory(MemoryStore::new())
            }
            Err(err) => {
                log::warn!("storage: localStorage denied ({}), preference will not persist", describe(&err));
                Self::Memory(MemoryStore::new())
            }
        }
    }
}

impl PreferenceStore for BrowserStore {
    fn get(&self, key: &str) -> Option<String> {
        match self {
            Self::Local(storage) => match storage.get_item(key) {
                Ok(value) => value,
                Err(err) => {
                    log::warn!("storage: read of {key} failed: {}", describe(&err));
                    None
                }
            },
            Self::Memory(store) => store.get(key),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        match self {
            Self::Local(storage) => storage
                .set_item(key, value)
                .map_err(|err| StoreError::WriteRejected { key: key.to_owned(), reason: describe(&err) }),
            Self::Memory(store) => store.set(key, value),
        }
    }
}
