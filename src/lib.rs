/*!
# Gratia

Gratia is a personal gratitude journal: dated entries with an optional mood,
search and pagination over past entries, consecutive-day writing streaks,
document export, and a daily reminder.

## Core Features

- Save dated entries with an optional mood
- Track consecutive-day writing streaks across out-of-order and same-day writes
- Search, paginate, and summarize past entries
- Export the journal to a laid-out document
- Persist unsaved drafts so in-progress text survives a closed surface
- Schedule a daily reminder from user settings

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `store`: the persistent key-value contract shared by every component
- `journal`: entries, moods, and the entry repository
- `streak`: the pure streak state machine and its persistence
- `query`: read-side search, pagination, and stats projections
- `draft`: unsaved-draft persistence
- `settings`: display and reminder settings
- `reminder`: next-fire computation and the alarm seam
- `export`: page layout and the document-rendering seam
- `content`: quotes and writing prompts
- `cli`, `config`, `ops`: command-line surface and wiring

## Usage Example

```no_run
use gratia::journal::{EntryRepository, Mood};
use gratia::store::MemoryStore;
use chrono::Utc;

fn main() -> gratia::AppResult<()> {
    let store = MemoryStore::new();
    let repository = EntryRepository::new(&store);
    repository.create("Grateful for rain on the roof.", Some(Mood::Content), Utc::now())?;
    Ok(())
}
```
*/

/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Centralized application constants
pub mod constants;
/// Quotes and writing prompts
pub mod content;
/// Unsaved draft persistence
pub mod draft;
/// Error types and utilities for error handling
pub mod errors;
/// Export layout and rendering seam
pub mod export;
/// Journal entries and the entry repository
pub mod journal;
/// High-level operations behind the CLI commands
pub mod ops;
/// Read-side search, pagination, and stats
pub mod query;
/// Daily reminder scheduling
pub mod reminder;
/// Display and reminder settings
pub mod settings;
/// Persistent key-value store contract and implementations
pub mod store;
/// Streak computation and persistence
pub mod streak;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use journal::{EntryRepository, JournalEntry, Mood};
pub use streak::{next_streak, StreakState};
