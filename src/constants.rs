//! Constants used throughout the application.
//!
//! This module contains all constants used in the gratia application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "gratia";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A gratitude journal with streaks, search, and daily reminders";

// Configuration Keys & Environment Variables
/// Environment variable for specifying the gratia data directory.
pub const ENV_VAR_GRATIA_DIR: &str = "GRATIA_DIR";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for journal data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".gratia";
/// Filename of the key-value store backing file inside the data directory.
pub const STORE_FILENAME: &str = "store.json";
/// Filename of the bundled quotes file inside the data directory.
pub const QUOTES_FILENAME: &str = "quotes.json";
/// Filename of the bundled prompts file inside the data directory.
pub const PROMPTS_FILENAME: &str = "prompts.json";

// Store Keys
/// Store key holding the full list of journal entries.
pub const KEY_ENTRIES: &str = "entries";
/// Store key holding the current streak counter.
pub const KEY_STREAK: &str = "streak";
/// Store key holding the calendar date of the last streak-updating write.
pub const KEY_LAST_STREAK_DATE: &str = "lastStreakDate";
/// Store key holding the unsaved draft text.
pub const KEY_UNSAVED_ENTRY: &str = "unsavedEntry";
/// Store key holding the reminder time-of-day as "HH:MM".
pub const KEY_REMINDER_TIME: &str = "reminderTime";
/// Store key holding the display font family.
pub const KEY_FONT: &str = "font";
/// Store key holding the reminders-enabled toggle.
pub const KEY_REMINDERS_ENABLED: &str = "remindersEnabled";
/// Legacy store key for the last selected mood; cleared on every save.
pub const KEY_LAST_MOOD: &str = "lastMood";

// Journal Parameters
/// Soft word-count guideline for a single entry.
pub const WORD_LIMIT: usize = 100;
/// Number of entries shown per journal page.
pub const ENTRIES_PER_PAGE: usize = 20;

// Settings Defaults
/// Default reminder time-of-day.
pub const DEFAULT_REMINDER_TIME: &str = "20:00";
/// Default display font family.
pub const DEFAULT_FONT: &str = "Arial, sans-serif";

// Reminder Notification
/// Title of the daily reminder notification.
pub const REMINDER_TITLE: &str = "Gratitude Journal Reminder";
/// Body of the daily reminder notification.
pub const REMINDER_MESSAGE: &str = "Time to write your daily gratitude entry!";
/// Repeat period of the daily reminder, in minutes.
pub const REMINDER_PERIOD_MINUTES: i64 = 24 * 60;

// Content Fallbacks
/// Quote text used when quotes.json cannot be loaded.
pub const FALLBACK_QUOTE_TEXT: &str = "Every day is a gift.";
/// Quote author used when quotes.json cannot be loaded.
pub const FALLBACK_QUOTE_AUTHOR: &str = "Unknown";
/// Prompt used when prompts.json cannot be loaded.
pub const FALLBACK_PROMPT_TEXT: &str = "What made you smile today?";

// Export Layout
/// Default filename of the exported document.
pub const EXPORT_FILENAME: &str = "gratitude-journal.pdf";
/// Title line of the exported document.
pub const EXPORT_TITLE: &str = "Gratitude Journal";
/// Vertical cursor position at the top of a fresh page.
pub const EXPORT_TOP_MARGIN: f32 = 20.0;
/// Vertical cursor position beyond which a page break occurs.
pub const EXPORT_BOTTOM_MARGIN: f32 = 270.0;
/// Maximum characters per wrapped body line.
pub const EXPORT_WRAP_COLUMNS: usize = 80;
/// Label used for mood symbols outside the fixed mood set.
pub const UNKNOWN_MOOD_LABEL: &str = "Unknown";
/// Sentinel shown when no entry carries a mood.
pub const NO_MOOD_DATA: &str = "No mood data";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format used for entry headings in listings and exports.
pub const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

// File System Parameters
/// Default POSIX permissions for newly created directories (owner read/write/execute).
#[cfg(unix)]
pub const DEFAULT_DIR_PERMISSIONS: u32 = 0o700;
