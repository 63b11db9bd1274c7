//! Unsaved draft persistence.
//!
//! An in-progress entry is periodically written under its own key so it
//! survives the surface closing. Each save is a single atomic store write and
//! shares nothing with the entries list, so draft autosaves can never
//! interleave mid-write with an entry save. The write path clears the draft
//! after a successful entry save.

use crate::constants::KEY_UNSAVED_ENTRY;
use crate::errors::AppResult;
use crate::store::{self, KeyValueStore};
use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

/// Manages the single unsaved-draft scratch value.
pub struct DraftManager<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> DraftManager<'a> {
    /// Creates a manager over the given store.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        DraftManager { store }
    }

    /// Reads the current draft; absent reads as empty.
    pub fn load(&self) -> AppResult<String> {
        Ok(store::get_value(self.store, KEY_UNSAVED_ENTRY)?.unwrap_or_default())
    }

    /// Overwrites the draft with the given text.
    ///
    /// This is the autosave tick: whatever was there before is replaced.
    pub fn save(&self, text: &str) -> AppResult<()> {
        debug!("Autosaving draft ({} bytes)", text.len());
        store::set_value(self.store, KEY_UNSAVED_ENTRY, &text)
    }

    /// Clears the draft, typically after a successful entry save.
    pub fn clear(&self) -> AppResult<()> {
        let mut values = HashMap::new();
        values.insert(KEY_UNSAVED_ENTRY.to_string(), Value::Null);
        self.store.set(values)
    }
}
