//! Process-local storage adapter

use std::collections::HashMap;

use euindico_domain::Result;
use parking_lot::RwLock;

use super::ports::KeyValueStore;

/// [`KeyValueStore`] kept in memory; nothing survives the process
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `entries`
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let entries = entries.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Self { entries: RwLock::new(entries) }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        let mut map = self.entries.write();
        for (key, value) in entries {
            map.insert((*key).to_string(), (*value).to_string());
        }
        Ok(())
    }

    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        let mut map = self.entries.write();
        for key in keys {
            map.remove(*key);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_remove() {
        let store = MemoryStore::new();
        store.set("token", "t1").unwrap();
        assert_eq!(store.get("token").unwrap().as_deref(), Some("t1"));

        store.remove("token").unwrap();
        assert!(store.get("token").unwrap().is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn remove_many_ignores_missing_keys() {
        let store = MemoryStore::with_entries([("token", "t1"), ("other", "x")]);
        store.remove_many(&["token", "user", "username"]).unwrap();
        assert_eq!(store.len(), 1);
    }
}
