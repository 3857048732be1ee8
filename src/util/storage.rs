//! `localStorage`-backed preference store.
//!
//! Off the browser, or when storage is blocked, values live in memory for
//! the rest of the page's life.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use effects::theme::{MemoryStore, PreferenceStore, StoreError};

#[derive(Debug)]
pub struct LocalStore {
    #[cfg(feature = "hydrate")]
    storage: Option<web_sys::Storage>,
    fallback: MemoryStore,
}

impl LocalStore {
    /// Bind to the window's `localStorage`, if the browser grants it.
    #[must_use]
    pub fn open() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
            if storage.is_none() {
                log::debug!("localStorage unavailable; preferences last for this page only");
            }
            Self { storage, fallback: MemoryStore::new() }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self { fallback: MemoryStore::new() }
        }
    }

    /// Whether writes reach the browser rather than memory.
    #[must_use]
    pub fn is_persistent(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.storage.is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "hydrate")]
        if let Some(storage) = &self.storage {
            return storage.get_item(key).ok().flatten();
        }
        self.fallback.get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        #[cfg(feature = "hydrate")]
        if let Some(storage) = &self.storage {
            return storage.set_item(key, value).map_err(|err| StoreError::WriteFailed {
                key: key.to_owned(),
                reason: err.as_string().unwrap_or_else(|| format!("{err:?}")),
            });
        }
        self.fallback.set(key, value)
    }
}
