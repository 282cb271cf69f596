//! # Browser `localStorage` store
//!
//! [`LocalStore`] is the [`KeyValueStore`] used on the **web platform**. Values
//! are plain strings under plain keys, so the token written here is readable in
//! the browser dev tools exactly as the backend issued it.
//!
//! ## Error handling
//!
//! `localStorage` can be unavailable (privacy modes, sandboxed iframes) or full.
//! Reads degrade to `None` and writes are dropped with a warning, so a broken
//! storage backend looks like an empty one to the rest of the client.

use web_sys::Storage;

use crate::KeyValueStore;

/// `window.localStorage`-backed KeyValueStore.
///
/// Zero-size. The `Storage` handle is looked up on every call.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, dropping write to {key}");
            return;
        };
        if let Err(e) = storage.set_item(key, value) {
            tracing::warn!("Failed to write {key} to localStorage: {e:?}");
        }
    }

    fn remove(&self, key: &str) {
        let Some(storage) = Self::storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            tracing::warn!("Failed to remove {key} from localStorage: {e:?}");
        }
    }
}
