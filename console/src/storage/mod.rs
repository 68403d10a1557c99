//! # Session Storage
//!
//! Key/value persistence for the session. Every operation reports whether it
//! succeeded instead of failing: reads return `Option`, writes and removals
//! return `bool`. A console whose storage is unavailable keeps working with
//! an in-memory-only session.
//!
//! ## Backends
//!
//! - [`FileStorage`]: a JSON object on disk, rewritten on every change
//! - [`MemoryStorage`]: process-local map, used as the fallback and in tests
//!
//! ## Usage
//!
//! ```rust,no_run
//! use console::storage::open_storage;
//!
//! let storage = open_storage(Some(std::path::Path::new("/tmp/shopops/session.json")));
//! storage.set("token", "abc");
//! assert_eq!(storage.get("token").as_deref(), Some("abc"));
//! ```

mod file;
mod memory;

use std::path::Path;
use std::sync::Arc;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Capability-checked key/value store.
pub trait Storage: Send + Sync {
    /// Value stored under `key`, `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value`; `false` when it could not be persisted.
    fn set(&self, key: &str, value: &str) -> bool;

    /// Remove `key`; `false` when the removal could not be persisted.
    fn remove(&self, key: &str) -> bool;

    /// Keys currently stored.
    fn keys(&self) -> Vec<String>;

    /// Whether values survive a restart.
    fn is_persistent(&self) -> bool;
}

/// Open file storage at `path`, degrading to memory when that fails or no path is given.
pub fn open_storage(path: Option<&Path>) -> Arc<dyn Storage> {
    let Some(path) = path else {
        tracing::info!("No storage path configured, session kept in memory");
        return Arc::new(MemoryStorage::new());
    };

    match FileStorage::open(path) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "Session storage unavailable, falling back to memory"
            );
            Arc::new(MemoryStorage::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_storage_without_path_is_memory() {
        let storage = open_storage(None);
        assert!(!storage.is_persistent());
        assert!(storage.set("token", "abc"));
        assert_eq!(storage.get("token").as_deref(), Some("abc"));
    }

    #[test]
    fn test_open_storage_degrades_when_path_is_unusable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "x").unwrap();

        // Parent of the storage file is a regular file, so the store cannot be created.
        let storage = open_storage(Some(&blocker.join("session.json")));

        assert!(!storage.is_persistent());
        assert!(storage.set("username", "alice"));
    }

    #[test]
    fn test_open_storage_with_path_is_persistent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = open_storage(Some(&dir.path().join("session.json")));
        assert!(storage.is_persistent());
    }
}
