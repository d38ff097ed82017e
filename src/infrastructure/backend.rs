//! Key-value persistence backends
//!
//! The record store reads and writes the whole post collection as one
//! opaque blob under a single fixed key. Backends only move blobs; they
//! never interpret them.

use crate::error::{BlogrError, Result};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Key-value slot storage consumed by the record store
pub trait StorageBackend {
    /// Read the blob stored under `key`, or `None` when the slot is absent
    fn load(&self, key: &str) -> Result<Option<String>>;

    /// Replace the blob stored under `key`
    fn save(&self, key: &str, blob: &str) -> Result<()>;
}

/// File-backed storage: each key maps to `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct JsonFileBackend {
    dir: PathBuf,
}

impl JsonFileBackend {
    /// Create a backend rooted at the given data directory
    pub fn new(dir: PathBuf) -> Self {
        JsonFileBackend { dir }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for JsonFileBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);

        match fs::read_to_string(&path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(BlogrError::Io(e)),
        }
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        let path = self.slot_path(key);

        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| {
                BlogrError::Storage(format!(
                    "failed to create data directory {}: {}",
                    self.dir.display(),
                    e
                ))
            })?;
        }

        fs::write(&path, blob).map_err(|e| {
            BlogrError::Storage(format!("failed to write {}: {}", path.display(), e))
        })
    }
}

/// In-memory storage for tests and embedding.
///
/// Clones share the same slots, so a second backend handle sees writes
/// made through the first. `reject_writes` makes every subsequent save
/// fail, which is how persist-failure paths are exercised.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: Rc<RefCell<HashMap<String, String>>>,
    reject_writes: Rc<Cell<bool>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend::default()
    }

    /// Toggle write rejection on this backend and all its clones
    pub fn reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        if self.reject_writes.get() {
            return Err(BlogrError::Storage(format!(
                "write rejected for key '{}'",
                key
            )));
        }
        self.slots
            .borrow_mut()
            .insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

/// Return the data directory (`<root>/.blogr`) for a blog root
pub fn data_dir(root: &Path) -> PathBuf {
    root.join(".blogr")
}
