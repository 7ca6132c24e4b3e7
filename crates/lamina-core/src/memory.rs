//! In-memory configuration store for testing and runtime overrides.
//!
//! [`InMemoryConfigStore`] keeps key/value pairs in a `HashMap` behind a
//! `RwLock`. It implements the full [`ConfigStore`] contract and is suitable
//! for unit tests and for layering ad-hoc overrides on top of file-backed
//! stores.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::error::StoreResult;
use crate::traits::ConfigStore;

/// A writable, in-memory implementation of [`ConfigStore`].
///
/// Keys are opaque strings with no dotted-path interpretation: `read`
/// answers exactly the keys previously written, nothing else. Data is lost
/// when the store is dropped.
pub struct InMemoryConfigStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryConfigStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store holds no keys.
    pub fn is_empty(&self) -> bool {
        self.values.read().expect("lock poisoned").is_empty()
    }

    /// Remove all keys from the store.
    pub fn clear(&self) {
        self.values.write().expect("lock poisoned").clear();
    }

    /// Return a sorted list of all keys in the store.
    pub fn keys(&self) -> Vec<String> {
        let map = self.values.read().expect("lock poisoned");
        let mut keys: Vec<String> = map.keys().cloned().collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for InMemoryConfigStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn can_read(&self) -> bool {
        true
    }

    fn can_write(&self) -> bool {
        true
    }

    fn read(&self, key: &str) -> StoreResult<Option<String>> {
        let map = self.values.read().expect("lock poisoned");
        Ok(map.get(key).cloned())
    }

    fn write(&self, key: &str, value: Option<&str>) -> StoreResult<()> {
        let mut map = self.values.write().expect("lock poisoned");
        match value {
            Some(value) => {
                map.insert(key.to_string(), value.to_string());
            }
            None => {
                map.remove(key);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for InMemoryConfigStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryConfigStore")
            .field("key_count", &self.len())
            .finish()
    }
}
