//! # Session Storage
//!
//! A key-value store scoped to one browsing session. The catalog keeps
//! its last successful search here so a later view of the same session
//! can restore it without another network call.
//!
//! ```text
//! ┌──────────────────────────┐      ┌──────────────────────────────────┐
//! │ MemorySessionStore       │      │ FileSessionStore                 │
//! │ RwLock<HashMap>          │      │ <session_dir>/<session_id>.json  │
//! │ tests, --ephemeral runs  │      │ survives restarts of one session │
//! └──────────────────────────┘      └──────────────────────────────────┘
//! ```
//!
//! Values never expire; they stay until overwritten, cleared, or the
//! session is discarded.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use crate::error::{ServiceError, ServiceResult};

/// Key holding the JSON-serialized last search-result list.
pub const SEARCH_RESULTS_KEY: &str = "searchResults";

/// Session-scoped key-value storage.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> ServiceResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> ServiceResult<()>;

    /// Removes the key. Clearing a missing key is not an error.
    fn clear(&self, key: &str) -> ServiceResult<()>;
}

// =============================================================================
// In-Memory Store
// =============================================================================

#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> ServiceError {
    ServiceError::Storage("session lock poisoned".to_string())
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> ServiceResult<Option<String>> {
        let entries = self.entries.read().map_err(poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> ServiceResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn clear(&self, key: &str) -> ServiceResult<()> {
        let mut entries = self.entries.write().map_err(poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

// =============================================================================
// File-Backed Store
// =============================================================================

/// One JSON object per session, rewritten on every `set`/`clear`.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: RwLock<()>,
}

impl FileSessionStore {
    /// Opens (or lazily creates) the store for `session_id` under `dir`.
    pub fn open(dir: impl AsRef<Path>, session_id: &str) -> ServiceResult<Self> {
        if session_id.is_empty()
            || !session_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ServiceError::InvalidConfig(format!(
                "session id must be alphanumeric, got '{}'",
                session_id
            )));
        }

        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;

        let path = dir.join(format!("{}.json", session_id));
        debug!(?path, "Opened session store");
        Ok(FileSessionStore {
            path,
            lock: RwLock::new(()),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> ServiceResult<HashMap<String, String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) if contents.trim().is_empty() => Ok(HashMap::new()),
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &HashMap<String, String>) -> ServiceResult<()> {
        let contents = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: &str) -> ServiceResult<Option<String>> {
        let _guard = self.lock.read().map_err(poisoned)?;
        Ok(self.read_all()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> ServiceResult<()> {
        let _guard = self.lock.write().map_err(poisoned)?;
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn clear(&self, key: &str) -> ServiceResult<()> {
        let _guard = self.lock.write().map_err(poisoned)?;
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(store: &dyn SessionStore) {
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v1"));

        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));

        store.clear("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);

        // Clearing twice is fine.
        store.clear("k").unwrap();
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemorySessionStore::new());
    }

    #[test]
    fn test_file_store() {
        let dir = tempfile::tempdir().unwrap();
        exercise(&FileSessionStore::open(dir.path(), "tab-1").unwrap());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let first = FileSessionStore::open(dir.path(), "tab-1").unwrap();
        first.set(SEARCH_RESULTS_KEY, "[]").unwrap();
        drop(first);

        let again = FileSessionStore::open(dir.path(), "tab-1").unwrap();
        assert_eq!(again.get(SEARCH_RESULTS_KEY).unwrap().as_deref(), Some("[]"));

        // A different session sees nothing.
        let other = FileSessionStore::open(dir.path(), "tab-2").unwrap();
        assert_eq!(other.get(SEARCH_RESULTS_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_bad_session_id() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileSessionStore::open(dir.path(), "../escape").is_err());
        assert!(FileSessionStore::open(dir.path(), "").is_err());
    }

    #[test]
    fn test_file_store_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSessionStore::open(dir.path(), "tab-1").unwrap();
        std::fs::write(store.path(), "{not json").unwrap();

        assert!(matches!(
            store.get("k"),
            Err(ServiceError::Serialization(_))
        ));
    }
}
