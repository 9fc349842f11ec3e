//! File-based store backend.
//!
//! Persists every key inside one JSON document, loaded lazily on first
//! access and rewritten on each mutation.

use super::KeyValueStore;
use crate::error::{MedicaseError, MedicaseResult};
use serde_json::Value;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing::warn;

/// Store backed by a single JSON file of key-value entries.
pub struct FileStore {
    path: PathBuf,
    cache: Mutex<Option<HashMap<String, Value>>>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            cache: Mutex::new(None),
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Read the document from disk. A missing or unparsable file yields an
    /// empty document so a later write can start fresh.
    fn load_from_disk(&self) -> MedicaseResult<HashMap<String, Value>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(entries) => Ok(entries),
                Err(err) => {
                    warn!(
                        path = %self.path.display(),
                        error = %err,
                        "store document unreadable, starting empty"
                    );
                    Ok(HashMap::new())
                }
            },
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(err) => Err(MedicaseError::Io(err)),
        }
    }

    fn save_to_disk(&self, entries: &HashMap<String, Value>) -> MedicaseResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(entries)?;
        fs::write(&self.path, text).map_err(|err| MedicaseError::StorageSaveFailed(err.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> MedicaseResult<Option<Value>> {
        let mut cache = self.cache.lock()?;
        if cache.is_none() {
            *cache = Some(self.load_from_disk()?);
        }
        Ok(cache.as_ref().and_then(|entries| entries.get(key).cloned()))
    }

    fn set(&self, key: &str, value: Value) -> MedicaseResult<()> {
        let mut cache = self.cache.lock()?;
        if cache.is_none() {
            *cache = Some(self.load_from_disk()?);
        }
        let entries = cache.get_or_insert_with(HashMap::new);
        entries.insert(key.to_string(), value);
        self.save_to_disk(entries)
    }

    fn remove(&self, key: &str) -> MedicaseResult<()> {
        let mut cache = self.cache.lock()?;
        if cache.is_none() {
            *cache = Some(self.load_from_disk()?);
        }
        let entries = cache.get_or_insert_with(HashMap::new);
        if entries.remove(key).is_some() {
            self.save_to_disk(entries)?;
        }
        Ok(())
    }
}
