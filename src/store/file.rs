//! File-backed key-value store.
//!
//! The store is a single JSON object on disk. Reads load and filter the whole
//! object; writes take an advisory lock, re-read, merge, and persist through a
//! temp file in the same directory so a crash never leaves a half-written
//! store behind.

use crate::errors::{AppResult, StorageError};
use crate::store::KeyValueStore;
use fs2::FileExt;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::debug;

/// Key-value store backed by a JSON file.
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store over the given backing file.
    ///
    /// The file is not created until the first `set`; a missing file reads as
    /// an empty store.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileStore { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_object(&self) -> AppResult<Map<String, Value>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.clone(),
                    source: e,
                }
                .into())
            }
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        let value: Value =
            serde_json::from_str(&contents).map_err(|e| StorageError::Corrupt {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        match value {
            Value::Object(object) => Ok(object),
            other => Err(StorageError::Corrupt {
                path: self.path.clone(),
                message: format!("expected a JSON object at the top level, found {}", other),
            }
            .into()),
        }
    }

    fn write_object(&self, object: &Map<String, Value>) -> AppResult<()> {
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp = NamedTempFile::new_in(dir).map_err(|e| StorageError::WriteFailed {
            path: self.path.clone(),
            source: e,
        })?;

        let serialized =
            serde_json::to_string_pretty(&Value::Object(object.clone())).map_err(|e| {
                StorageError::Corrupt {
                    path: self.path.clone(),
                    message: e.to_string(),
                }
            })?;

        temp.write_all(serialized.as_bytes())
            .map_err(|e| StorageError::WriteFailed {
                path: self.path.clone(),
                source: e,
            })?;

        temp.persist(&self.path)
            .map_err(|e| StorageError::WriteFailed {
                path: self.path.clone(),
                source: e.error,
            })?;

        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, keys: &[&str]) -> AppResult<HashMap<String, Value>> {
        let object = self.read_object()?;
        let mut result = HashMap::new();
        for &key in keys {
            if let Some(value) = object.get(key) {
                result.insert(key.to_string(), value.clone());
            }
        }
        Ok(result)
    }

    fn set(&self, values: HashMap<String, Value>) -> AppResult<()> {
        debug!("Writing {} key(s) to store", values.len());

        // Hold an advisory lock on a sidecar file for the whole
        // read-merge-write cycle so two gratia processes cannot interleave.
        let lock_path = self.path.with_extension("lock");
        let lock_file = OpenOptions::new()
            .create(true)
            .write(true)
            .open(&lock_path)
            .map_err(|e| StorageError::LockFailed {
                path: self.path.clone(),
                source: e,
            })?;
        lock_file
            .lock_exclusive()
            .map_err(|e| StorageError::LockFailed {
                path: self.path.clone(),
                source: e,
            })?;

        let result = (|| {
            let mut object = self.read_object()?;
            for (key, value) in values {
                object.insert(key, value);
            }
            self.write_object(&object)
        })();

        let _ = lock_file.unlock();
        result
    }
}
