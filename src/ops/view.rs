//! Listing entries and showing aggregate stats.

use crate::constants::{DISPLAY_DATE_FORMAT, NO_MOOD_DATA};
use crate::errors::AppResult;
use crate::journal::{mood_label, EntryRepository};
use crate::query::{self, QueryState};
use crate::store::KeyValueStore;
use crate::streak::StreakTracker;

/// Lists one page of entries, optionally filtered by a search term.
pub fn list_entries(
    store: &dyn KeyValueStore,
    search: Option<&str>,
    page: usize,
) -> AppResult<()> {
    let entries = EntryRepository::new(store).list()?;

    let mut state = QueryState::new();
    if let Some(term) = search {
        state.set_search(term);
    }
    state.set_page(page);
    let view = state.apply(&entries);

    if view.entries.is_empty() {
        match search {
            Some(term) => println!("No entries match '{}'", term),
            None => println!("No entries yet. Write one with: gratia write <text>"),
        }
        return Ok(());
    }

    for entry in &view.entries {
        println!(
            "{}  [{}]",
            entry.date.format(DISPLAY_DATE_FORMAT),
            entry.date.to_rfc3339()
        );
        println!("  {}", entry.entry);
        if let Some(symbol) = &entry.mood {
            println!("  Mood: {} {}", symbol, mood_label(symbol));
        }
        println!();
    }

    println!("Page {} of {}", view.current_page, view.total_pages);
    Ok(())
}

/// Prints totals, the current streak, and the dominant mood.
pub fn show_stats(store: &dyn KeyValueStore) -> AppResult<()> {
    let entries = EntryRepository::new(store).list()?;
    let streak = StreakTracker::new(store).load()?;
    let stats = query::stats(&entries, streak.streak);

    println!("Total entries: {}", stats.total);
    println!("Current streak: {} day(s)", stats.streak);
    match &stats.dominant_mood {
        Some(symbol) => println!("Dominant mood: {} {}", symbol, mood_label(symbol)),
        None => println!("Dominant mood: {}", NO_MOOD_DATA),
    }
    Ok(())
}
