//! Deleting entries, singly or in bulk.

use crate::errors::{AppError, AppResult};
use crate::journal::EntryRepository;
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};

/// Deletes the entry with the given RFC 3339 timestamp.
///
/// Deleting a past entry does not rewind the streak; the streak reflects
/// writing history, not the current entry set.
pub fn delete_entry(store: &dyn KeyValueStore, date_str: &str) -> AppResult<()> {
    let date: DateTime<Utc> = DateTime::parse_from_rfc3339(date_str)
        .map_err(|e| {
            AppError::Validation(format!(
                "Invalid timestamp '{}': {}. Expected RFC 3339, e.g. 2024-01-05T09:00:00Z",
                date_str, e
            ))
        })?
        .with_timezone(&Utc);

    EntryRepository::new(store).delete(date)?;
    println!("Deleted entry {} (if it existed)", date.to_rfc3339());
    Ok(())
}

/// Deletes all entries and resets the streak to zero.
///
/// Refuses to act unless `confirmed` is set; this is the only operation that
/// forces the streak to zero.
pub fn purge_all(store: &dyn KeyValueStore, confirmed: bool) -> AppResult<()> {
    if !confirmed {
        println!("This deletes every entry and resets your streak.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    EntryRepository::new(store).delete_all()?;
    println!("All entries deleted. Streak reset to 0.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use crate::streak::StreakTracker;
    use chrono::TimeZone;

    #[test]
    fn test_delete_entry_rejects_bad_timestamp() {
        let store = MemoryStore::new();
        let result = delete_entry(&store, "yesterday");
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_purge_without_confirmation_changes_nothing() {
        let store = MemoryStore::new();
        let repo = EntryRepository::new(&store);
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        repo.create("entry", None, now).unwrap();

        purge_all(&store, false).unwrap();
        assert_eq!(repo.list().unwrap().len(), 1);
        assert_eq!(StreakTracker::new(&store).load().unwrap().streak, 1);
    }

    #[test]
    fn test_purge_with_confirmation_resets() {
        let store = MemoryStore::new();
        let repo = EntryRepository::new(&store);
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        repo.create("entry", None, now).unwrap();

        purge_all(&store, true).unwrap();
        assert!(repo.list().unwrap().is_empty());
        assert_eq!(StreakTracker::new(&store).load().unwrap().streak, 0);
    }
}
