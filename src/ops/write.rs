//! Saving a new journal entry.

use crate::draft::DraftManager;
use crate::errors::{AppError, AppResult};
use crate::journal::{EntryRepository, Mood};
use crate::store::KeyValueStore;
use crate::streak::StreakTracker;
use chrono::{DateTime, Utc};
use tracing::debug;

/// Saves a new entry, advances the streak, and clears the unsaved draft.
///
/// # Errors
///
/// Returns `AppError::Validation` for empty text or an unrecognized mood, or
/// a storage error if persistence fails.
pub fn save_entry(
    store: &dyn KeyValueStore,
    text: &str,
    mood_input: Option<&str>,
    now: DateTime<Utc>,
) -> AppResult<()> {
    let mood = match mood_input {
        None => None,
        Some(input) => Some(Mood::parse(input).ok_or_else(|| {
            AppError::Validation(format!(
                "Unrecognized mood '{}'. Expected one of: {}",
                input,
                Mood::ALL
                    .iter()
                    .map(|m| m.label().to_lowercase())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?),
    };

    let repository = EntryRepository::new(store);
    let entry = repository.create(text, mood, now)?;

    // The draft held the in-progress text; a completed save supersedes it.
    DraftManager::new(store).clear()?;
    debug!("Cleared draft after save");

    let streak = StreakTracker::new(store).load()?;

    match &entry.mood {
        Some(symbol) => println!(
            "Saved entry {} with mood {}",
            entry.date.to_rfc3339(),
            symbol
        ),
        None => println!("Saved entry {}", entry.date.to_rfc3339()),
    }
    println!("Current streak: {} day(s)", streak.streak);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    #[test]
    fn test_save_entry_clears_draft() {
        let store = MemoryStore::new();
        DraftManager::new(&store).save("work in progress").unwrap();

        let now = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        save_entry(&store, "grateful for rain", Some("happy"), now).unwrap();

        assert_eq!(DraftManager::new(&store).load().unwrap(), "");
        assert_eq!(EntryRepository::new(&store).list().unwrap().len(), 1);
    }

    #[test]
    fn test_save_entry_rejects_unknown_mood() {
        let store = MemoryStore::new();
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();

        let result = save_entry(&store, "text", Some("ecstatic"), now);
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert!(EntryRepository::new(&store).list().unwrap().is_empty());
    }
}
