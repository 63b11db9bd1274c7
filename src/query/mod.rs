//! Read-side projections over the entries list.
//!
//! Search, pagination, and aggregate stats are pure functions over an already
//! materialized entries list; nothing here touches the store. Per-surface view
//! state lives in [`QueryState`] rather than module-level globals, so every
//! caller carries its own page and filter.

use crate::constants::ENTRIES_PER_PAGE;
use crate::journal::{mood_label, JournalEntry};

/// Filters entries by a case-insensitive substring match.
///
/// The term is matched against the entry text, the stored mood symbol, and
/// the mood's human-readable label. An empty term matches everything.
pub fn search(entries: &[JournalEntry], term: &str) -> Vec<JournalEntry> {
    if term.is_empty() {
        return entries.to_vec();
    }

    let needle = term.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            if e.entry.to_lowercase().contains(&needle) {
                return true;
            }
            match &e.mood {
                Some(symbol) => {
                    symbol.to_lowercase().contains(&needle)
                        || mood_label(symbol).to_lowercase().contains(&needle)
                }
                None => false,
            }
        })
        .cloned()
        .collect()
}

/// One page of entries plus navigation state.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    /// The entries on this page, in list order.
    pub entries: Vec<JournalEntry>,
    /// 1-based page number after clamping.
    pub current_page: usize,
    /// Total number of pages (at least 1, even for an empty list).
    pub total_pages: usize,
}

impl Page {
    /// Whether backward navigation is disabled (already on the first page).
    pub fn prev_disabled(&self) -> bool {
        self.current_page == 1
    }

    /// Whether forward navigation is disabled (already on the last page).
    pub fn next_disabled(&self) -> bool {
        self.current_page == self.total_pages
    }
}

/// Slices one page out of the entries list.
///
/// `total_pages` is `ceil(n / page_size)` with a floor of one page, and the
/// requested page number is clamped into `[1, total_pages]`: navigation never
/// wraps around.
pub fn paginate(entries: &[JournalEntry], page_size: usize, page_number: usize) -> Page {
    debug_assert!(page_size > 0, "page size must be positive");

    let total_pages = entries.len().div_ceil(page_size).max(1);
    let current_page = page_number.clamp(1, total_pages);

    let start = (current_page - 1) * page_size;
    let page_entries = entries
        .iter()
        .skip(start)
        .take(page_size)
        .cloned()
        .collect();

    Page {
        entries: page_entries,
        current_page,
        total_pages,
    }
}

/// Aggregate stats shown on the journal page.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    /// Total number of entries.
    pub total: usize,
    /// Current streak, as persisted by the tracker.
    pub streak: u32,
    /// Most frequent mood symbol, or `None` when no entry carries a mood.
    pub dominant_mood: Option<String>,
}

/// Computes aggregate stats over the entries list.
///
/// The dominant mood is the symbol with the highest occurrence count among
/// entries that have one; ties break to the symbol encountered first in a
/// chronological scan of the list.
pub fn stats(entries: &[JournalEntry], streak: u32) -> Stats {
    // First-occurrence order doubles as the tie-break, so counts are kept in
    // scan order instead of a map.
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for entry in entries {
        if let Some(symbol) = &entry.mood {
            match counts.iter_mut().find(|(s, _)| s == symbol) {
                Some((_, count)) => *count += 1,
                None => counts.push((symbol, 1)),
            }
        }
    }

    let dominant_mood = counts
        .iter()
        .max_by_key(|(_, count)| *count)
        .map(|(symbol, _)| symbol.to_string());

    Stats {
        total: entries.len(),
        streak,
        dominant_mood,
    }
}

/// Component-local view state for a journal surface.
///
/// Each surface (CLI invocation, page render) owns one of these; a new search
/// resets to the first page and page moves clamp at the edges.
#[derive(Debug, Clone, Default)]
pub struct QueryState {
    filter: String,
    page: usize,
}

impl QueryState {
    /// Fresh state: no filter, first page.
    pub fn new() -> Self {
        QueryState {
            filter: String::new(),
            page: 1,
        }
    }

    /// The active search term.
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Sets the search term and resets to the first page.
    pub fn set_search(&mut self, term: &str) {
        self.filter = term.to_string();
        self.page = 1;
    }

    /// Jumps to the given page; clamping happens on [`Self::apply`].
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Moves forward one page.
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Moves back one page, stopping at the first.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Projects the view: filter, then slice the current page.
    pub fn apply(&mut self, entries: &[JournalEntry]) -> Page {
        let filtered = search(entries, &self.filter);
        let page = paginate(&filtered, ENTRIES_PER_PAGE, self.page);
        // Keep the stored page in range so repeated next_page calls past the
        // end do not accumulate.
        self.page = page.current_page;
        page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(day: u32, text: &str, mood: Option<&str>) -> JournalEntry {
        JournalEntry {
            date: Utc.with_ymd_and_hms(2024, 1, day, 12, 0, 0).unwrap(),
            entry: text.to_string(),
            mood: mood.map(String::from),
        }
    }

    fn entries(n: u32) -> Vec<JournalEntry> {
        (1..=n).map(|i| entry(i.min(28), &format!("entry {}", i), None)).collect()
    }

    #[test]
    fn test_search_empty_term_returns_all() {
        let list = vec![entry(1, "sunshine", None), entry(2, "rain", None)];
        assert_eq!(search(&list, "").len(), 2);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let list = vec![entry(1, "Grateful for Sunshine", None)];
        assert_eq!(search(&list, "sUnShInE").len(), 1);
        assert_eq!(search(&list, "moonlight").len(), 0);
    }

    #[test]
    fn test_search_matches_mood_symbol_and_label() {
        let list = vec![
            entry(1, "quiet walk", Some("😔")),
            entry(2, "loud day", None),
        ];
        assert_eq!(search(&list, "😔").len(), 1);
        assert_eq!(search(&list, "sad").len(), 1);
    }

    #[test]
    fn test_search_no_mood_does_not_match_mood_terms() {
        let list = vec![entry(1, "no mood here", None)];
        assert_eq!(search(&list, "happy").len(), 0);
    }

    #[test]
    fn test_paginate_total_pages_is_ceiling() {
        assert_eq!(paginate(&entries(45), 20, 1).total_pages, 3);
        assert_eq!(paginate(&entries(40), 20, 1).total_pages, 2);
        assert_eq!(paginate(&entries(1), 20, 1).total_pages, 1);
    }

    #[test]
    fn test_paginate_last_partial_page() {
        let page = paginate(&entries(45), 20, 3);
        assert_eq!(page.entries.len(), 5);
        assert_eq!(page.current_page, 3);
        assert!(page.next_disabled());
        assert!(!page.prev_disabled());
    }

    #[test]
    fn test_paginate_first_page_disables_prev() {
        let page = paginate(&entries(45), 20, 1);
        assert!(page.prev_disabled());
        assert!(!page.next_disabled());
        assert_eq!(page.entries.len(), 20);
    }

    #[test]
    fn test_paginate_clamps_out_of_range() {
        let page = paginate(&entries(45), 20, 99);
        assert_eq!(page.current_page, 3);

        let page = paginate(&entries(45), 20, 0);
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_paginate_empty_list() {
        let page = paginate(&[], 20, 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.entries.is_empty());
        assert!(page.prev_disabled());
        assert!(page.next_disabled());
    }

    #[test]
    fn test_stats_dominant_mood() {
        let list = vec![
            entry(1, "a", Some("😊")),
            entry(2, "b", Some("😊")),
            entry(3, "c", Some("😔")),
        ];
        let result = stats(&list, 3);
        assert_eq!(result.total, 3);
        assert_eq!(result.streak, 3);
        assert_eq!(result.dominant_mood.as_deref(), Some("😊"));
    }

    #[test]
    fn test_stats_tie_breaks_to_first_occurrence() {
        let list = vec![
            entry(1, "a", Some("😔")),
            entry(2, "b", Some("😊")),
            entry(3, "c", Some("😊")),
            entry(4, "d", Some("😔")),
        ];
        assert_eq!(stats(&list, 0).dominant_mood.as_deref(), Some("😔"));
    }

    #[test]
    fn test_stats_no_moods_is_none() {
        let list = vec![entry(1, "a", None), entry(2, "b", None)];
        assert_eq!(stats(&list, 0).dominant_mood, None);
    }

    #[test]
    fn test_query_state_search_resets_page() {
        let mut state = QueryState::new();
        state.set_page(3);
        state.set_search("rain");
        let page = state.apply(&entries(45));
        assert_eq!(page.current_page, 1);
    }

    #[test]
    fn test_query_state_navigation_clamps() {
        let mut state = QueryState::new();
        let list = entries(45);

        state.prev_page();
        assert_eq!(state.apply(&list).current_page, 1);

        for _ in 0..10 {
            state.next_page();
            state.apply(&list);
        }
        assert_eq!(state.apply(&list).current_page, 3);
    }
}
