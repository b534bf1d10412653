//! Backend

use crate::storage::KeyValueStore;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::RwLock;
use tracing::debug;

/// In-memory key-value store
///
/// Non-persistent; useful for tests and as the fallback backend.
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> crate::Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|e| crate::TaskListError::Storage(format!("Lock poisoned: {e}")))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> crate::Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| crate::TaskListError::Storage(format!("Lock poisoned: {e}")))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// File-backed key-value store
///
/// Each key maps to `<key>.json` under the store's root directory. Writes go
/// through a temporary file and a rename, so an interrupted write cannot
/// leave a torn value behind.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a file store rooted at `root`, creating the directory if needed
    pub fn new(root: impl Into<PathBuf>) -> crate::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            crate::TaskListError::Storage(format!(
                "Failed to create store directory {}: {e}",
                root.display()
            ))
        })?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> crate::Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(crate::TaskListError::Storage(format!(
                "Failed to read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> crate::Result<()> {
        let path = self.path_for(key);
        let tmp = self.root.join(format!(".{key}.json.tmp"));

        fs::write(&tmp, value).map_err(|e| {
            crate::TaskListError::Storage(format!("Failed to write {}: {e}", tmp.display()))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            crate::TaskListError::Storage(format!("Failed to rename to {}: {e}", path.display()))
        })?;

        debug!("Wrote {} bytes under key {}", value.len(), key);
        Ok(())
    }
}
