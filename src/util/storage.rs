//! Key-value persistence behind an injectable store interface.
//!
//! SYSTEM CONTEXT
//! ==============
//! History, saved items, the signed-in user and the theme preference all live
//! in browser `localStorage`. Pages and components go through
//! [`KeyValueStore`] so the same logic runs against [`MemoryStore`] in tests.
//!
//! ERROR HANDLING
//! ==============
//! Storage is best-effort: unavailable storage reads as empty and failed
//! writes are dropped. Malformed JSON reads as `None`.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;

pub const HISTORY_KEY: &str = "snapit_history";
pub const SAVED_KEY: &str = "snapit_saved";
pub const USER_KEY: &str = "snapit_user";
pub const THEME_KEY: &str = "theme";

/// String key-value store with explicit get/set/remove contracts.
pub trait KeyValueStore {
    /// Raw value for `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;
    /// Replace the value for `key`.
    fn set(&self, key: &str, value: &str);
    /// Remove `key`; absent keys are ignored.
    fn remove(&self, key: &str);
}

/// Browser `localStorage`. Outside the browser every read is empty.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            local_storage()?.get_item(key).ok().flatten()
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
            None
        }
    }

    fn set(&self, key: &str, value: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (key, value);
        }
    }

    fn remove(&self, key: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(key);
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = key;
        }
    }
}

/// In-process store used in tests and non-browser builds.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Load a JSON value for `key`. Missing or malformed values yield `None`.
pub fn load_json<T: DeserializeOwned>(store: &impl KeyValueStore, key: &str) -> Option<T> {
    let raw = store.get(key)?;
    serde_json::from_str(&raw).ok()
}

/// Save a JSON value for `key`.
pub fn save_json<T: Serialize>(store: &impl KeyValueStore, key: &str, value: &T) {
    let Ok(raw) = serde_json::to_string(value) else {
        return;
    };
    store.set(key, &raw);
}

/// Number of elements in the JSON array stored at `key` (0 when absent or malformed).
pub fn array_len(store: &impl KeyValueStore, key: &str) -> usize {
    load_json::<Vec<serde_json::Value>>(store, key).map_or(0, |items| items.len())
}
