//! End-to-end tests of the journal core over the file-backed store.
//!
//! These exercise the persistence paths the way independent UI surfaces
//! would: separate store handles over the same backing file, with state
//! expected to survive reopening.

use chrono::{DateTime, TimeZone, Utc};
use gratia::journal::{EntryRepository, Mood};
use gratia::store::{self, FileStore};
use gratia::streak::{StreakState, StreakTracker};
use std::path::Path;

fn at(y: i32, mo: u32, d: u32, h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, 0, 0).unwrap()
}

fn store_at(path: &Path) -> FileStore {
    FileStore::new(path.join("store.json"))
}

#[test]
fn test_entries_survive_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = store_at(dir.path());
        let repo = EntryRepository::new(&store);
        repo.create("first entry", Some(Mood::Happy), at(2024, 1, 5, 9))
            .unwrap();
        repo.create("second entry", None, at(2024, 1, 6, 9))
            .unwrap();
    }

    let store = store_at(dir.path());
    let entries = EntryRepository::new(&store).list().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].entry, "first entry");
    assert_eq!(entries[0].mood.as_deref(), Some("😊"));
    assert_eq!(entries[1].entry, "second entry");
}

#[test]
fn test_streak_survives_reopen() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = store_at(dir.path());
        let repo = EntryRepository::new(&store);
        repo.create("day one", None, at(2024, 1, 5, 9)).unwrap();
        repo.create("day two", None, at(2024, 1, 6, 9)).unwrap();
        repo.create("same day again", None, at(2024, 1, 6, 21))
            .unwrap();
    }

    let store = store_at(dir.path());
    let state = StreakTracker::new(&store).load().unwrap();
    assert_eq!(state.streak, 2);
    assert_eq!(
        state.last_streak_date,
        Some(chrono::NaiveDate::from_ymd_opt(2024, 1, 6).unwrap())
    );
}

#[test]
fn test_gap_resets_streak_across_surfaces() {
    let dir = tempfile::tempdir().unwrap();

    // One surface builds up a streak.
    {
        let store = store_at(dir.path());
        let repo = EntryRepository::new(&store);
        repo.create("day one", None, at(2024, 1, 1, 9)).unwrap();
        repo.create("day two", None, at(2024, 1, 2, 9)).unwrap();
    }

    // A different surface writes after a long gap.
    {
        let store = store_at(dir.path());
        EntryRepository::new(&store)
            .create("back again", None, at(2024, 1, 10, 9))
            .unwrap();
    }

    let store = store_at(dir.path());
    assert_eq!(StreakTracker::new(&store).load().unwrap().streak, 1);
}

#[test]
fn test_delete_all_resets_on_disk() {
    let dir = tempfile::tempdir().unwrap();

    {
        let store = store_at(dir.path());
        let repo = EntryRepository::new(&store);
        repo.create("one", None, at(2024, 1, 5, 9)).unwrap();
        repo.create("two", None, at(2024, 1, 6, 9)).unwrap();
        repo.delete_all().unwrap();
    }

    let store = store_at(dir.path());
    assert!(EntryRepository::new(&store).list().unwrap().is_empty());
    assert_eq!(
        StreakTracker::new(&store).load().unwrap(),
        StreakState::default()
    );
}

#[test]
fn test_streak_reads_state_written_by_older_version() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(dir.path());

    // Older versions persisted the marker as a full instant.
    store::set_value(&store, "streak", &3u32).unwrap();
    store::set_value(&store, "lastStreakDate", &"2024-01-05T00:00:00.000Z").unwrap();

    let state = StreakTracker::new(&store).load().unwrap();
    assert_eq!(state.streak, 3);

    // The next consecutive-day write continues the streak.
    let next = StreakTracker::new(&store)
        .record_write(chrono::NaiveDate::from_ymd_opt(2024, 1, 6).unwrap())
        .unwrap();
    assert_eq!(next.streak, 4);
}

#[test]
fn test_draft_and_entries_do_not_interfere() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_at(dir.path());

    gratia::draft::DraftManager::new(&store)
        .save("in progress")
        .unwrap();
    EntryRepository::new(&store)
        .create("a finished entry", None, at(2024, 1, 5, 9))
        .unwrap();

    // The repository write merged around the draft key.
    assert_eq!(
        gratia::draft::DraftManager::new(&store).load().unwrap(),
        "in progress"
    );
    assert_eq!(EntryRepository::new(&store).list().unwrap().len(), 1);
}
