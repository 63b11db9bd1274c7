//! Streak computation and persistence.
//!
//! The streak is the count of consecutive calendar days with at least one
//! entry written, as of the last recorded write. The transition rules live in
//! the pure [`next_streak`] function so they can be tested exhaustively
//! without storage; [`StreakTracker`] wraps it with the store bookkeeping.
//!
//! Invariant: `streak == 0` exactly when `last_streak_date` is unset.

use crate::constants::{DATE_FORMAT_ISO, KEY_LAST_STREAK_DATE, KEY_STREAK};
use crate::errors::AppResult;
use crate::store::{self, KeyValueStore};
use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Persisted streak bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StreakState {
    /// Consecutive calendar days with at least one write.
    pub streak: u32,
    /// Calendar date of the most recent streak-updating write.
    pub last_streak_date: Option<NaiveDate>,
}

/// Computes the streak state after a write on `today`.
///
/// Pure and deterministic: same-day repeat writes leave the count unchanged, a
/// consecutive-day write increments by exactly one, and any other gap
/// (including an out-of-order `today` before the recorded date) resets to one.
/// The new state always stamps `today` as the last streak date.
///
/// # Examples
///
/// ```
/// use gratia::streak::{next_streak, StreakState};
/// use chrono::NaiveDate;
///
/// let prior = StreakState {
///     streak: 3,
///     last_streak_date: NaiveDate::from_ymd_opt(2024, 1, 5),
/// };
/// let next = next_streak(&prior, NaiveDate::from_ymd_opt(2024, 1, 6).unwrap());
/// assert_eq!(next.streak, 4);
/// ```
pub fn next_streak(prior: &StreakState, today: NaiveDate) -> StreakState {
    let streak = match prior.last_streak_date {
        None => 1,
        Some(last) => {
            let gap_days = (today - last).num_days();
            match gap_days {
                0 => prior.streak,
                1 => prior.streak + 1,
                _ => 1,
            }
        }
    };

    StreakState {
        streak,
        last_streak_date: Some(today),
    }
}

/// Derives and persists streak state from entry-write events.
///
/// The tracker is a consumer of write events, never a source of entry data:
/// it only reads and writes the two streak keys.
pub struct StreakTracker<'a> {
    store: &'a dyn KeyValueStore,
}

impl<'a> StreakTracker<'a> {
    /// Creates a tracker over the given store.
    pub fn new(store: &'a dyn KeyValueStore) -> Self {
        StreakTracker { store }
    }

    /// Loads the persisted streak state.
    ///
    /// Missing keys read as the zero state. A last-streak-date that fails to
    /// parse is treated as unset (with a warning) rather than failing the
    /// read, so a damaged marker degrades to a streak restart.
    pub fn load(&self) -> AppResult<StreakState> {
        let streak: u32 = store::get_value(self.store, KEY_STREAK)?.unwrap_or(0);
        let raw_date: Option<String> = store::get_value(self.store, KEY_LAST_STREAK_DATE)?;

        let last_streak_date = match raw_date {
            None => None,
            Some(raw) => match parse_streak_date(&raw) {
                Some(date) => Some(date),
                None => {
                    warn!("Unparseable lastStreakDate '{}', treating as unset", raw);
                    None
                }
            },
        };

        Ok(StreakState {
            streak,
            last_streak_date,
        })
    }

    /// Records an entry write on `today` and persists the new state.
    ///
    /// Both streak keys are written in a single store call so the counter and
    /// the date marker cannot drift apart.
    pub fn record_write(&self, today: NaiveDate) -> AppResult<StreakState> {
        let prior = self.load()?;
        let next = next_streak(&prior, today);
        debug!(
            "Streak {} -> {} (last write {:?})",
            prior.streak, next.streak, prior.last_streak_date
        );
        self.persist(&next)?;
        Ok(next)
    }

    /// Resets the streak to zero with no last-write marker.
    ///
    /// Only the delete-all path is permitted to call this.
    pub fn reset(&self) -> AppResult<()> {
        self.persist(&StreakState::default())
    }

    fn persist(&self, state: &StreakState) -> AppResult<()> {
        let mut values = HashMap::new();
        values.insert(KEY_STREAK.to_string(), Value::from(state.streak));
        values.insert(
            KEY_LAST_STREAK_DATE.to_string(),
            match state.last_streak_date {
                Some(date) => Value::from(date.format(DATE_FORMAT_ISO).to_string()),
                None => Value::Null,
            },
        );
        self.store.set(values)
    }
}

/// Parses the persisted streak date marker.
///
/// Accepts the canonical ISO date, and the full RFC 3339 instant older
/// versions wrote, discarding the time of day.
fn parse_streak_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT_ISO)
        .ok()
        .or_else(|| {
            chrono::DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn state(streak: u32, last: Option<NaiveDate>) -> StreakState {
        StreakState {
            streak,
            last_streak_date: last,
        }
    }

    #[test]
    fn test_first_write_starts_at_one() {
        let next = next_streak(&StreakState::default(), day(2024, 1, 5));
        assert_eq!(next, state(1, Some(day(2024, 1, 5))));
    }

    #[test]
    fn test_same_day_repeat_write_unchanged() {
        let prior = state(3, Some(day(2024, 1, 5)));
        let next = next_streak(&prior, day(2024, 1, 5));
        assert_eq!(next, state(3, Some(day(2024, 1, 5))));
    }

    #[test]
    fn test_consecutive_day_increments_by_one() {
        let prior = state(3, Some(day(2024, 1, 5)));
        let next = next_streak(&prior, day(2024, 1, 6));
        assert_eq!(next, state(4, Some(day(2024, 1, 6))));
    }

    #[test]
    fn test_gap_resets_to_one() {
        let prior = state(5, Some(day(2024, 1, 1)));
        let next = next_streak(&prior, day(2024, 1, 10));
        assert_eq!(next, state(1, Some(day(2024, 1, 10))));
    }

    #[test]
    fn test_out_of_order_write_resets_to_one() {
        // A clock that moved backwards counts as a broken streak, not a panic.
        let prior = state(4, Some(day(2024, 1, 10)));
        let next = next_streak(&prior, day(2024, 1, 8));
        assert_eq!(next, state(1, Some(day(2024, 1, 8))));
    }

    #[test]
    fn test_month_boundary_is_consecutive() {
        let prior = state(2, Some(day(2024, 1, 31)));
        let next = next_streak(&prior, day(2024, 2, 1));
        assert_eq!(next.streak, 3);
    }

    #[test]
    fn test_year_boundary_is_consecutive() {
        let prior = state(7, Some(day(2023, 12, 31)));
        let next = next_streak(&prior, day(2024, 1, 1));
        assert_eq!(next.streak, 8);
    }

    #[test]
    fn test_next_streak_is_deterministic() {
        let prior = state(3, Some(day(2024, 1, 5)));
        let today = day(2024, 1, 6);
        assert_eq!(next_streak(&prior, today), next_streak(&prior, today));
    }

    #[test]
    fn test_tracker_load_missing_keys() {
        let store = MemoryStore::new();
        let loaded = StreakTracker::new(&store).load().unwrap();
        assert_eq!(loaded, StreakState::default());
    }

    #[test]
    fn test_tracker_record_write_persists() {
        let store = MemoryStore::new();
        let tracker = StreakTracker::new(&store);

        tracker.record_write(day(2024, 1, 5)).unwrap();
        tracker.record_write(day(2024, 1, 6)).unwrap();

        let loaded = tracker.load().unwrap();
        assert_eq!(loaded, state(2, Some(day(2024, 1, 6))));
    }

    #[test]
    fn test_tracker_reset() {
        let store = MemoryStore::new();
        let tracker = StreakTracker::new(&store);
        tracker.record_write(day(2024, 1, 5)).unwrap();

        tracker.reset().unwrap();
        assert_eq!(tracker.load().unwrap(), StreakState::default());
    }

    #[test]
    fn test_load_tolerates_legacy_instant_marker() {
        let store = MemoryStore::new();
        store::set_value(&store, KEY_STREAK, &4u32).unwrap();
        store::set_value(&store, KEY_LAST_STREAK_DATE, &"2024-01-05T00:00:00.000Z").unwrap();

        let loaded = StreakTracker::new(&store).load().unwrap();
        assert_eq!(loaded, state(4, Some(day(2024, 1, 5))));
    }

    #[test]
    fn test_load_tolerates_garbage_marker() {
        let store = MemoryStore::new();
        store::set_value(&store, KEY_STREAK, &4u32).unwrap();
        store::set_value(&store, KEY_LAST_STREAK_DATE, &"not a date").unwrap();

        let loaded = StreakTracker::new(&store).load().unwrap();
        assert_eq!(loaded.last_streak_date, None);
    }
}
