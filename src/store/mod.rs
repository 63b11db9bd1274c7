//! Persistent key-value store contract and implementations.
//!
//! Every component persists through the same flat key-value namespace: the
//! entries list, streak bookkeeping, the unsaved draft, and display settings
//! all live under well-known keys (see [`crate::constants`]). The store itself
//! is an external collaborator consumed through the [`KeyValueStore`] trait;
//! this module ships a file-backed implementation for the CLI and an in-memory
//! implementation for tests and embedding.
//!
//! The consistency model is read-modify-write with last-writer-wins: the
//! contract offers no transactions, and concurrent writers can lose updates.
//! Callers are structured so that versioned writes could be added behind this
//! trait without changing their signatures.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::errors::{AppResult, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Contract of the persistent key-value service.
///
/// `get` returns a mapping containing only the requested keys that are
/// present; absent keys are simply missing from the result. `set` merges the
/// given mapping into the store in a single atomic write.
pub trait KeyValueStore {
    /// Reads the values stored under the given keys.
    fn get(&self, keys: &[&str]) -> AppResult<HashMap<String, Value>>;

    /// Merges the given key-value mapping into the store.
    fn set(&self, values: HashMap<String, Value>) -> AppResult<()>;
}

/// Reads and decodes a single typed value from the store.
///
/// Returns `Ok(None)` when the key is absent or explicitly null. A value that
/// is present but does not decode into `T` is reported as a
/// [`StorageError::Decode`] rather than silently dropped.
pub fn get_value<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> AppResult<Option<T>> {
    let mut values = store.get(&[key])?;
    match values.remove(key) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => {
            let decoded = serde_json::from_value(value).map_err(|e| StorageError::Decode {
                key: key.to_string(),
                source: e,
            })?;
            Ok(Some(decoded))
        }
    }
}

/// Encodes and writes a single typed value to the store.
pub fn set_value<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let encoded = serde_json::to_value(value).map_err(|e| StorageError::Decode {
        key: key.to_string(),
        source: e,
    })?;
    let mut values = HashMap::new();
    values.insert(key.to_string(), encoded);
    store.set(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_value_absent_key() {
        let store = MemoryStore::new();
        let value: Option<u32> = get_value(&store, "streak").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_get_value_null_is_absent() {
        let store = MemoryStore::new();
        let mut values = HashMap::new();
        values.insert("lastStreakDate".to_string(), Value::Null);
        store.set(values).unwrap();

        let value: Option<String> = get_value(&store, "lastStreakDate").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn test_set_then_get_round_trip() {
        let store = MemoryStore::new();
        set_value(&store, "streak", &5u32).unwrap();

        let value: Option<u32> = get_value(&store, "streak").unwrap();
        assert_eq!(value, Some(5));
    }

    #[test]
    fn test_get_value_wrong_shape_errors() {
        let store = MemoryStore::new();
        set_value(&store, "streak", &"not a number").unwrap();

        let result: AppResult<Option<u32>> = get_value(&store, "streak");
        assert!(result.is_err());
    }

    #[test]
    fn test_set_merges_rather_than_replaces() {
        let store = MemoryStore::new();
        set_value(&store, "font", &"Georgia, serif").unwrap();
        set_value(&store, "streak", &3u32).unwrap();

        let values = store.get(&["font", "streak"]).unwrap();
        assert_eq!(values.len(), 2);
    }
}
