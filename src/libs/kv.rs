//! Whole-value key-value persistence for user data.
//!
//! Each collection (history, statistics, favorites, notes, plans) lives as a
//! single JSON document under its own key. Writers always replace the full
//! document; there are no partial updates.
//!
//! [`JsonCollection`] keeps one such array in memory. Every mutation goes
//! through [`JsonCollection::commit`], which edits a copy, writes the copy
//! and only then swaps it in, so a failed write leaves memory and store
//! agreeing on the old value. Holding the collection by `&mut` makes each
//! one single-writer within the process.

use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key '{key}': {reason}")]
    InvalidKey { key: String, reason: String },
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored value is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub type SharedStore = Arc<dyn KeyValueStore>;

/// One file per key in a directory. `@biblia_history` is stored as
/// `biblia_history.json`.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn shared(dir: impl Into<PathBuf>) -> SharedStore {
        Arc::new(Self::new(dir))
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let name: String = key
            .trim_start_matches('@')
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' || c == '-' { c } else { '_' })
            .collect();
        if name.is_empty() || name.chars().all(|c| c == '_') {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
                reason: "key has no usable characters".to_string(),
            });
        }
        Ok(self.dir.join(format!("{}.json", name)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;
        // the document is replaced by rename, never written in place
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedStore {
        Arc::new(Self::new())
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.values.lock().remove(key);
        Ok(())
    }
}

/// Reads a JSON document stored under `key`.
pub fn read_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

pub fn write_json<T: Serialize + ?Sized>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    store.set(key, &serde_json::to_string(value)?)
}

/// A JSON array held in memory and written back whole.
pub struct JsonCollection<T> {
    store: SharedStore,
    key: &'static str,
    items: Vec<T>,
}

impl<T> JsonCollection<T>
where
    T: Serialize + DeserializeOwned + Clone,
{
    /// Loads the array under `key`. A missing key is an empty collection; so
    /// is a document that no longer parses, which is logged and will be
    /// replaced on the next commit.
    pub fn load(store: SharedStore, key: &'static str) -> Result<Self, StorageError> {
        let items = match read_json::<Vec<T>>(store.as_ref(), key) {
            Ok(items) => items.unwrap_or_default(),
            Err(StorageError::Json(e)) => {
                tracing::warn!(key, error = %e, "discarding unreadable collection");
                Vec::new()
            }
            Err(e) => return Err(e),
        };
        tracing::debug!(key, len = items.len(), "loaded collection");

        Ok(JsonCollection { store, key, items })
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Applies `edit` to a copy of the items and persists the copy. The
    /// in-memory items change only once the write has succeeded; on error
    /// they are exactly what they were before the call.
    pub fn commit<R>(&mut self, edit: impl FnOnce(&mut Vec<T>) -> R) -> Result<R, StorageError> {
        let mut next = self.items.clone();
        let outcome = edit(&mut next);
        write_json(self.store.as_ref(), self.key, &next)?;
        self.items = next;
        Ok(outcome)
    }

    /// Persists `items` as the whole collection, then adopts them.
    pub fn replace(&mut self, items: Vec<T>) -> Result<(), StorageError> {
        write_json(self.store.as_ref(), self.key, &items)?;
        self.items = items;
        Ok(())
    }

    /// Empties the collection and removes its key from the store.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.store.remove(self.key)?;
        self.items.clear();
        Ok(())
    }
}
