//! JSON-file storage adapter
//!
//! The whole map lives in one JSON object. Writes go to a sibling temp file
//! that is then renamed over the original, so a crash mid-write leaves either
//! the old or the new contents.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use euindico_core::KeyValueStore;
use euindico_domain::{EuIndicoError, Result};
use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::errors::InfraError;

type Entries = BTreeMap<String, String>;

/// [`KeyValueStore`] persisted to a JSON file
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within the process
    lock: Mutex<()>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`
    ///
    /// # Errors
    /// Returns `EuIndicoError::Storage` if the parent directory cannot be
    /// created.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| EuIndicoError::from(InfraError::from(e)))?;
        }
        debug!(path = %path.display(), "opened session storage");
        Ok(Self { path, lock: Mutex::new(()) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(InfraError::from(err).into()),
        };

        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }

        serde_json::from_str(&contents).or_else(|err| {
            warn!(path = %self.path.display(), error = %err, "storage file is corrupt, starting empty");
            Ok(Entries::new())
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<()> {
        let json = serde_json::to_vec_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json).map_err(|e| EuIndicoError::from(InfraError::from(e)))?;
        fs::rename(&tmp, &self.path).map_err(|e| EuIndicoError::from(InfraError::from(e)))
    }

    fn update(&self, apply: impl FnOnce(&mut Entries)) -> Result<()> {
        let _guard = self.lock.lock();
        let mut entries = self.read_entries()?;
        apply(&mut entries);
        self.write_entries(&entries)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let _guard = self.lock.lock();
        Ok(self.read_entries()?.remove(key))
    }

    fn set_many(&self, entries: &[(&str, &str)]) -> Result<()> {
        self.update(|map| {
            for (key, value) in entries {
                map.insert((*key).to_string(), (*value).to_string());
            }
        })
    }

    fn remove_many(&self, keys: &[&str]) -> Result<()> {
        self.update(|map| {
            for key in keys {
                map.remove(*key);
            }
        })
    }
}
