use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use super::Storage;
use crate::core::error::{ConsoleError, Result};

/// JSON-file backed storage.
///
/// Entries are cached in memory; each change rewrites the whole file through
/// a temporary sibling and a rename. A failed write keeps the in-memory value
/// and reports `false`.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    entries: RwLock<BTreeMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) the store at `path`.
    ///
    /// A corrupt file is treated as empty and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConsoleError::Storage(format!("cannot create {}: {}", parent.display(), e))
            })?;
        }

        let entries = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "Corrupt session file, starting empty");
                BTreeMap::new()
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(ConsoleError::Storage(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        let storage = Self {
            path,
            entries: RwLock::new(entries),
        };
        // Probe writability now so an unusable location degrades at open time.
        storage
            .flush(&storage.entries.read())
            .map_err(|e| ConsoleError::Storage(format!("cannot write {}: {}", storage.path.display(), e)))?;

        Ok(storage)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self, entries: &BTreeMap<String, String>) -> io::Result<()> {
        let json = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)
    }

    fn flush_logged(&self, entries: &BTreeMap<String, String>, key: &str) -> bool {
        match self.flush(entries) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), key, error = %e, "Session storage write denied");
                false
            }
        }
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.flush_logged(&entries, key)
    }

    fn remove(&self, key: &str) -> bool {
        let mut entries = self.entries.write();
        if entries.remove(key).is_none() {
            return true;
        }
        self.flush_logged(&entries, key)
    }

    fn keys(&self) -> Vec<String> {
        self.entries.read().keys().cloned().collect()
    }

    fn is_persistent(&self) -> bool {
        true
    }
}
