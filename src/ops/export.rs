//! Exporting the journal to a document.

use crate::constants::EXPORT_FILENAME;
use crate::errors::AppResult;
use crate::export::{export_entries, ExportBackend, PlainTextBackend};
use crate::journal::EntryRepository;
use crate::store::KeyValueStore;
use std::path::PathBuf;

/// Exports all entries through the given backend.
///
/// The output defaults to [`EXPORT_FILENAME`] in the current directory. A
/// failed export is reported to the user for a manual retry; nothing is
/// retried automatically.
pub fn export_journal(
    store: &dyn KeyValueStore,
    backend: &dyn ExportBackend,
    output: Option<PathBuf>,
) -> AppResult<()> {
    let entries = EntryRepository::new(store).list()?;
    let path = output.unwrap_or_else(|| PathBuf::from(EXPORT_FILENAME));

    export_entries(&entries, backend, &path)?;
    println!("Exported {} entries to {}", entries.len(), path.display());
    Ok(())
}

/// Exports with the bundled plain-text backend.
pub fn export_journal_plain(store: &dyn KeyValueStore, output: Option<PathBuf>) -> AppResult<()> {
    export_journal(store, &PlainTextBackend, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::Mood;
    use crate::store::MemoryStore;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_export_round_trip() {
        let store = MemoryStore::new();
        let repo = EntryRepository::new(&store);
        let now = Utc.with_ymd_and_hms(2024, 1, 5, 9, 0, 0).unwrap();
        repo.create("grateful for tea", Some(Mood::Content), now)
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.txt");
        export_journal_plain(&store, Some(path.clone())).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("grateful for tea"));
        assert!(contents.contains("Mood: Content"));
    }

    #[test]
    fn test_export_empty_journal_fails() {
        let store = MemoryStore::new();
        let dir = tempfile::tempdir().unwrap();
        let result = export_journal_plain(&store, Some(dir.path().join("journal.txt")));
        assert!(result.is_err());
    }
}
