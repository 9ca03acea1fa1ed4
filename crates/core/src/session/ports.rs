//! Port interface for durable client storage

use euindico_domain::Result;

/// String key/value storage that survives restarts
///
/// The multi-key operations must be all-or-nothing: the session keys are
/// always written and cleared together.
pub trait KeyValueStore: Send + Sync {
    /// Read a key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write several keys in one step
    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()>;

    /// Remove several keys in one step; missing keys are ignored
    fn remove_many(&self, keys: &[&str]) -> Result<()>;

    /// Write one key
    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.set_many(&[(key, value)])
    }

    /// Remove one key
    fn remove(&self, key: &str) -> Result<()> {
        self.remove_many(&[key])
    }
}
