//! In-memory key-value store for tests and embedding.

use crate::errors::AppResult;
use crate::store::KeyValueStore;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;

/// Key-value store held entirely in memory.
///
/// Useful anywhere the file-backed store is unwanted: unit tests, integration
/// tests, or embedding the journal core behind a different persistence layer.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, keys: &[&str]) -> AppResult<HashMap<String, Value>> {
        let values = self.values.lock().expect("store mutex poisoned");
        let mut result = HashMap::new();
        for &key in keys {
            if let Some(value) = values.get(key) {
                result.insert(key.to_string(), value.clone());
            }
        }
        Ok(result)
    }

    fn set(&self, new_values: HashMap<String, Value>) -> AppResult<()> {
        let mut values = self.values.lock().expect("store mutex poisoned");
        for (key, value) in new_values {
            values.insert(key, value);
        }
        Ok(())
    }
}
