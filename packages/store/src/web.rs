//! `localStorage`-backed store for the web platform.
//!
//! All methods degrade gracefully: a browser with storage disabled (private
//! mode quotas, sandboxed iframes) behaves like an empty store, which the
//! session layer reads as "not logged in". Nothing here panics.

use crate::KeyValueStore;

/// `window.localStorage` as a [`KeyValueStore`].
///
/// Zero-size and `Clone`-friendly; the handle is re-acquired from the
/// window on every call since `web_sys::Storage` is not `Send`.
#[derive(Clone, Debug, Default)]
pub struct WebStorage;

impl WebStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl KeyValueStore for WebStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
