//! String key/value preference storage.
//!
//! The browser build persists to `localStorage`; [`MemoryStore`] backs tests
//! and stands in when the browser denies storage access, so the toggle still
//! works for the lifetime of the page.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashMap;

/// Errors raised by a preference store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("storage write rejected for key {key}: {reason}")]
    WriteRejected { key: String, reason: String },
}

/// A string key/value store with get/set semantics.
pub trait PreferenceStore {
    /// Read the value under `key`, or `None` if unset or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::WriteRejected`] if the backend refuses the write
    /// (quota exceeded, storage disabled).
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Page-lifetime store with no persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry.
    #[must_use]
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.values.borrow_mut().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
