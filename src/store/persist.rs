//! Persisted buffers
//!
//! Buffers live under one key per fragment kind in a string key-value store
//! (`localStorage` in the browser). Reads happen once at startup; writes are
//! fire-and-forget and a failed write never undoes the in-memory change.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use thiserror::Error;

use crate::models::{FragmentKind, Sources};
use super::observer::{SourceChange, SourceObserver};

/// Storage failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// No storage backend is reachable (private mode, blocked cookies, ...)
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read '{key}': {reason}")]
    Read { key: String, reason: String },

    /// Usually the quota was exceeded
    #[error("Failed to write '{key}': {reason}")]
    Write { key: String, reason: String },
}

/// String key-value storage backend
pub trait KeyValueStore {
    /// Read a key; `Ok(None)` when it was never written
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a key, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Key under which a fragment is persisted
pub fn storage_key(prefix: &str, kind: FragmentKind) -> String {
    format!("{}:{}", prefix, kind.tab_id())
}

/// Read all three buffers, using built-in defaults for missing or unreadable keys
pub fn load_sources(store: &dyn KeyValueStore, prefix: &str) -> Sources {
    let mut sources = Sources::default();

    for kind in FragmentKind::ALL {
        let key = storage_key(prefix, kind);
        match store.get_item(&key) {
            Ok(Some(text)) => {
                log::debug!("Restored {} ({} bytes) from '{}'", kind, text.len(), key);
                sources.replace(kind, text);
            }
            Ok(None) => {
                log::debug!("No saved {} under '{}', using default", kind, key);
            }
            Err(e) => {
                log::warn!("Could not restore {}, using default: {}", kind, e);
            }
        }
    }

    sources
}

/// Session observer that writes each changed buffer back to storage
pub struct Persister<K: KeyValueStore> {
    store: K,
    prefix: String,
}

impl<K: KeyValueStore> Persister<K> {
    pub fn new(store: K, prefix: impl Into<String>) -> Self {
        Self {
            store,
            prefix: prefix.into(),
        }
    }
}

impl<K: KeyValueStore> SourceObserver for Persister<K> {
    fn sources_changed(&mut self, change: &SourceChange<'_>) {
        let key = storage_key(&self.prefix, change.kind);
        if let Err(e) = self.store.set_item(&key, change.text()) {
            log::warn!("Change to {} kept in memory only: {}", change.kind, e);
        }
    }
}

/// In-memory store
///
/// Clones share the same map, so a test can hand one clone to a session and
/// keep another to inspect writes or to start a second session against the
/// same "persisted" data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    items: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Store whose every operation fails
    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Read {
                key: key.to_string(),
                reason: "disk on fire".to_string(),
            })
        }

        fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write {
                key: key.to_string(),
                reason: "quota exceeded".to_string(),
            })
        }
    }

    #[test]
    fn test_storage_keys() {
        assert_eq!(storage_key("playground", FragmentKind::Markup), "playground:html");
        assert_eq!(storage_key("p", FragmentKind::Style), "p:css");
    }

    #[test]
    fn test_load_missing_keys_uses_defaults() {
        let store = MemoryStore::new();
        assert_eq!(load_sources(&store, "playground"), Sources::default());
    }

    #[test]
    fn test_load_prefers_saved_text_including_empty() {
        let mut store = MemoryStore::new();
        store.set_item("playground:html", "<p>x</p>").unwrap();
        store.set_item("playground:css", "").unwrap();

        let sources = load_sources(&store, "playground");
        assert_eq!(sources.markup, "<p>x</p>");
        assert_eq!(sources.style, "");
        assert_eq!(sources.script, FragmentKind::Script.default_source());
    }

    #[test]
    fn test_load_read_errors_fall_back_to_defaults() {
        assert_eq!(load_sources(&BrokenStore, "playground"), Sources::default());
    }

    #[test]
    fn test_memory_store_clones_share_items() {
        let store = MemoryStore::new();
        let mut writer = store.clone();
        writer.set_item("k", "v").unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(store.get_item("k").unwrap(), Some("v".to_string()));
        assert_eq!(store.get_item("missing").unwrap(), None);
    }
}
