//! Journal entries and the entry repository.
//!
//! The repository owns the canonical entries list in the store and is the only
//! writer of the `entries` key. Every successful create also advances the
//! streak tracker; deletes deliberately do not (see [`EntryRepository::delete`]).

use crate::constants::{KEY_ENTRIES, KEY_LAST_MOOD, UNKNOWN_MOOD_LABEL, WORD_LIMIT};
use crate::errors::{AppError, AppResult, StorageError};
use crate::store::{self, KeyValueStore};
use crate::streak::StreakTracker;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// The fixed set of moods a journal entry can carry.
///
/// Entries store the raw mood symbol (the wire format of the store), so this
/// enum is a lookup table over that symbol rather than the stored type itself.
/// Symbols outside the set render with the [`UNKNOWN_MOOD_LABEL`] fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Happy,
    Content,
    Sad,
    Frustrated,
    Tired,
}

impl Mood {
    /// All moods, in selector order.
    pub const ALL: [Mood; 5] = [
        Mood::Happy,
        Mood::Content,
        Mood::Sad,
        Mood::Frustrated,
        Mood::Tired,
    ];

    /// The emoji symbol stored in the entries list.
    pub fn symbol(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Content => "😌",
            Mood::Sad => "😔",
            Mood::Frustrated => "😤",
            Mood::Tired => "😴",
        }
    }

    /// The human-readable label used in listings and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Content => "Content",
            Mood::Sad => "Sad",
            Mood::Frustrated => "Frustrated",
            Mood::Tired => "Tired",
        }
    }

    /// Looks up a mood by its stored symbol.
    pub fn from_symbol(symbol: &str) -> Option<Mood> {
        Mood::ALL.iter().copied().find(|m| m.symbol() == symbol)
    }

    /// Looks up a mood by its label, case-insensitively.
    ///
    /// Accepts the CLI-friendly spelling ("happy", "Tired") as well as the raw
    /// symbol.
    pub fn parse(input: &str) -> Option<Mood> {
        Mood::from_symbol(input)
            .or_else(|| {
                Mood::ALL
                    .iter()
                    .copied()
                    .find(|m| m.label().eq_ignore_ascii_case(input))
            })
    }
}

/// Renders a stored mood symbol as a human-readable label.
///
/// Unmapped symbols fall back to [`UNKNOWN_MOOD_LABEL`].
pub fn mood_label(symbol: &str) -> &'static str {
    Mood::from_symbol(symbol)
        .map(|m| m.label())
        .unwrap_or(UNKNOWN_MOOD_LABEL)
}

/// A single dated journal record.
///
/// `date` is the creation instant and serves as the entry's identifier.
/// Uniqueness is assumed but not enforced; duplicate timestamps are possible
/// and deletes remove only the first match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Creation instant, the primary identifier.
    pub date: DateTime<Utc>,
    /// Free-form entry text; the 100-word guideline is advisory, not enforced.
    pub entry: String,
    /// Stored mood symbol, if one was selected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
}

/// Counts whitespace-separated words in entry text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Owns the canonical entries list in the store.
///
/// All mutations are full read-modify-write cycles against the store;
/// last-writer-wins is the accepted consistency model.
pub struct EntryRepository<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> EntryRepository<'a> {
    /// Creates a repository over the given store.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        EntryRepository { store }
    }

    /// Creates and persists a new entry, then advances the streak.
    ///
    /// The entry is appended, so the stored list is chronological (the
    /// canonical order; see [`Self::list`]). The legacy `lastMood` key is
    /// cleared alongside the write. Text over the word guideline is accepted
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` if `text` is empty after trimming, or a
    /// storage error if the store read or write fails.
    pub fn create(
        &self,
        text: &str,
        mood: Option<Mood>,
        now: DateTime<Utc>,
    ) -> AppResult<JournalEntry> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "Entry text cannot be empty".to_string(),
            ));
        }

        let words = word_count(trimmed);
        if words > WORD_LIMIT {
            warn!(
                "Entry is {} words, over the {}-word guideline",
                words, WORD_LIMIT
            );
        }

        let entry = JournalEntry {
            date: now,
            entry: trimmed.to_string(),
            mood: mood.map(|m| m.symbol().to_string()),
        };

        let mut entries = self.list()?;
        entries.push(entry.clone());

        let mut values = HashMap::new();
        values.insert(
            KEY_ENTRIES.to_string(),
            serde_json::to_value(&entries).map_err(|e| StorageError::Decode {
                key: KEY_ENTRIES.to_string(),
                source: e,
            })?,
        );
        values.insert(KEY_LAST_MOOD.to_string(), Value::Null);
        self.store.set(values)?;

        info!("Saved entry with {} words", words);

        StreakTracker::new(self.store).record_write(now.date_naive())?;

        Ok(entry)
    }

    /// Reads the full entries list.
    ///
    /// A missing key reads as an empty list. The result is sorted ascending by
    /// date, which normalizes lists written by older versions that prepended
    /// new entries.
    pub fn list(&self) -> AppResult<Vec<JournalEntry>> {
        let mut entries: Vec<JournalEntry> =
            store::get_value(self.store, KEY_ENTRIES)?.unwrap_or_default();
        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    /// Removes the entry with the given date; no-op when absent.
    ///
    /// Does not recompute the streak: the streak reflects writing history, not
    /// the current entry set. Only [`Self::delete_all`] resets it.
    pub fn delete(&self, date: DateTime<Utc>) -> AppResult<()> {
        let entries = self.list()?;
        let before = entries.len();

        let mut remaining = entries;
        if let Some(position) = remaining.iter().position(|e| e.date == date) {
            remaining.remove(position);
        }

        if remaining.len() == before {
            debug!("No entry found for {}, nothing to delete", date);
            return Ok(());
        }

        store::set_value(self.store, KEY_ENTRIES, &remaining)?;
        info!("Deleted entry {}", date);
        Ok(())
    }

    /// Clears all entries and resets the streak to zero.
    ///
    /// This is the only operation permitted to force the streak to zero.
    pub fn delete_all(&self) -> AppResult<()> {
        store::set_value(self.store, KEY_ENTRIES, &Vec::<JournalEntry>::new())?;
        StreakTracker::new(self.store).reset()?;
        info!("Deleted all entries and reset streak");
        Ok(())
    }
}
