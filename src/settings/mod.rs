//! Display and reminder settings.
//!
//! Settings live under three store keys (`reminderTime`, `font`,
//! `remindersEnabled`) and are created with defaults on first read. The
//! reminder time is stored as "HH:MM" wall-clock text, the format the
//! original settings form wrote.

use crate::constants::{
    DEFAULT_FONT, DEFAULT_REMINDER_TIME, KEY_FONT, KEY_REMINDERS_ENABLED, KEY_REMINDER_TIME,
};
use crate::errors::{AppError, AppResult};
use crate::store::{self, KeyValueStore};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

/// User-adjustable settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Reminder hour of day (0-23).
    pub reminder_hour: u32,
    /// Reminder minute (0-59).
    pub reminder_minute: u32,
    /// Display font family string.
    pub font: String,
    /// Whether the daily reminder is active.
    pub reminders_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        let (reminder_hour, reminder_minute) =
            parse_reminder_time(DEFAULT_REMINDER_TIME).expect("default reminder time is valid");
        Settings {
            reminder_hour,
            reminder_minute,
            font: DEFAULT_FONT.to_string(),
            reminders_enabled: true,
        }
    }
}

impl Settings {
    /// The reminder time in its stored "HH:MM" form.
    pub fn reminder_time(&self) -> String {
        format!("{:02}:{:02}", self.reminder_hour, self.reminder_minute)
    }

    /// Loads settings from the store, filling defaults for absent keys.
    ///
    /// A reminder time that no longer parses falls back to the default with a
    /// warning rather than failing the whole load.
    pub fn load(store: &dyn KeyValueStore) -> AppResult<Self> {
        let defaults = Settings::default();

        let raw_time: Option<String> = store::get_value(store, KEY_REMINDER_TIME)?;
        let (reminder_hour, reminder_minute) = match raw_time {
            None => (defaults.reminder_hour, defaults.reminder_minute),
            Some(raw) => match parse_reminder_time(&raw) {
                Ok(parsed) => parsed,
                Err(_) => {
                    warn!("Unparseable reminderTime '{}', using default", raw);
                    (defaults.reminder_hour, defaults.reminder_minute)
                }
            },
        };

        let font: String = store::get_value(store, KEY_FONT)?.unwrap_or(defaults.font);
        let reminders_enabled: bool =
            store::get_value(store, KEY_REMINDERS_ENABLED)?.unwrap_or(true);

        Ok(Settings {
            reminder_hour,
            reminder_minute,
            font,
            reminders_enabled,
        })
    }

    /// Persists all three settings keys in a single store write.
    pub fn save(&self, store: &dyn KeyValueStore) -> AppResult<()> {
        debug!("Saving settings (reminders at {})", self.reminder_time());
        let mut values = HashMap::new();
        values.insert(
            KEY_REMINDER_TIME.to_string(),
            Value::from(self.reminder_time()),
        );
        values.insert(KEY_FONT.to_string(), Value::from(self.font.clone()));
        values.insert(
            KEY_REMINDERS_ENABLED.to_string(),
            Value::from(self.reminders_enabled),
        );
        store.set(values)
    }
}

/// Parses an "HH:MM" wall-clock time into (hour, minute).
///
/// # Errors
///
/// Returns `AppError::Validation` when the text is not two colon-separated
/// numbers or the values fall outside clock range.
pub fn parse_reminder_time(raw: &str) -> AppResult<(u32, u32)> {
    let invalid = || {
        AppError::Validation(format!(
            "Invalid reminder time '{}': expected HH:MM (24-hour clock)",
            raw
        ))
    };

    let (hour_str, minute_str) = raw.split_once(':').ok_or_else(invalid)?;
    let hour: u32 = hour_str.trim().parse().map_err(|_| invalid())?;
    let minute: u32 = minute_str.trim().parse().map_err(|_| invalid())?;

    if hour > 23 || minute > 59 {
        return Err(invalid());
    }
    Ok((hour, minute))
}
