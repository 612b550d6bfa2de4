//! Storage backends for the serialized collection.
//!
//! The durable contract is a single key holding the JSON-serialized article
//! collection. Absence of the key is not an error - it signals "first run,
//! seed defaults".

use std::cell::RefCell;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{Result, StoreError};

/// A single-key durable store for the serialized collection.
pub trait CollectionStore {
    /// Read the payload, `None` when nothing has been written yet.
    fn read(&self) -> Result<Option<String>>;

    /// Fully overwrite the payload.
    fn write(&self, payload: &str) -> Result<()>;
}

/// File-backed store: one JSON file holding the whole collection.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CollectionStore for JsonFileStore {
    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Read {
                path: self.path.clone(),
                source: e,
            }),
        }
    }

    fn write(&self, payload: &str) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        fs::write(&self.path, payload).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// In-process store for tests and ephemeral runs.
///
/// `RefCell` is enough here: the whole system is specified as
/// single-threaded and event-serialized.
#[derive(Debug, Default)]
pub struct MemoryStore {
    payload: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-load a payload, as if a previous process had written it.
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            payload: RefCell::new(Some(payload.into())),
        }
    }
}

impl CollectionStore for MemoryStore {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.payload.borrow().clone())
    }

    fn write(&self, payload: &str) -> Result<()> {
        *self.payload.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}

/// Default location for the collection file, under the platform data dir.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("./"))
        .join("folio/articles.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryStore::new();
        assert_eq!(store.read().unwrap(), None);
        store.write("[]").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("articles.json"));
        assert_eq!(store.read().unwrap(), None);
    }

    #[test]
    fn test_file_store_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/articles.json"));
        store.write("[]").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_store_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("articles.json"));
        store.write("first").unwrap();
        store.write("second").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("second"));
    }
}
