//! Flat key-value stores
//!
//! The persistence gateway sits on top of a [`KeyValueStore`]: string keys,
//! string values, no transactions. [`MemoryStore`] keeps everything in memory;
//! [`FileStore`] persists the whole map as one JSON file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::file_io::{read_json, write_json_atomic};
use crate::error::VaultResult;

/// A flat string key-value store
pub trait KeyValueStore {
    /// Read a value, `None` when the key is absent
    fn get(&self, key: &str) -> VaultResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set(&mut self, key: &str, value: &str) -> VaultResult<()>;

    /// Delete a key; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> VaultResult<()>;
}

/// In-memory store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> VaultResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> VaultResult<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> VaultResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store persisted as a single JSON object on disk
///
/// The map is read once at open and rewritten atomically on every change.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> VaultResult<Self> {
        let path = path.into();
        let entries: BTreeMap<String, String> = read_json(&path)?;
        debug!("Opened key-value store at {:?} ({} keys)", path, entries.len());
        Ok(Self { path, entries })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> VaultResult<()> {
        write_json_atomic(&self.path, &self.entries)?;
        debug!("Flushed key-value store to {:?}", self.path);
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> VaultResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> VaultResult<()> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Keep memory in line with what is on disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> VaultResult<()> {
        let Some(previous) = self.entries.remove(key) else {
            return Ok(());
        };
        if let Err(e) = self.flush() {
            self.entries.insert(key.to_string(), previous);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &mut impl KeyValueStore) {
        assert_eq!(store.get("a").unwrap(), None);

        store.set("a", "1").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("1"));

        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));

        store.remove("a").unwrap();
        assert_eq!(store.get("a").unwrap(), None);

        // Idempotent
        store.remove("a").unwrap();
    }

    #[test]
    fn test_memory_store_contract() {
        let mut store = MemoryStore::new();
        exercise(&mut store);
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_contract() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileStore::open(temp_dir.path().join("store.json")).unwrap();
        exercise(&mut store);
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        {
            let mut store = FileStore::open(&path).unwrap();
            store.set("blob", "abc").unwrap();
            store.set("flag", "true").unwrap();
            store.remove("flag").unwrap();
        }

        let store = FileStore::open(&path).unwrap();
        assert_eq!(store.get("blob").unwrap().as_deref(), Some("abc"));
        assert_eq!(store.get("flag").unwrap(), None);
    }

    #[test]
    fn test_file_store_missing_file_not_created_until_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");

        let mut store = FileStore::open(&path).unwrap();
        store.remove("nothing").unwrap();
        assert!(!path.exists());

        store.set("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_file_store_rejects_corrupt_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("store.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        assert!(FileStore::open(&path).is_err());
    }
}
