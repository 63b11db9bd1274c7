//! Showing and changing settings.

use crate::errors::AppResult;
use crate::reminder::{AlarmBackend, ReminderScheduler};
use crate::settings::{parse_reminder_time, Settings};
use crate::store::KeyValueStore;
use chrono::NaiveDateTime;

/// Prints the current settings.
pub fn show_settings(store: &dyn KeyValueStore) -> AppResult<()> {
    let settings = Settings::load(store)?;
    println!("Reminder time: {}", settings.reminder_time());
    println!("Font: {}", settings.font);
    println!(
        "Reminders: {}",
        if settings.reminders_enabled {
            "enabled"
        } else {
            "disabled"
        }
    );
    Ok(())
}

/// Applies the given setting changes and re-registers the reminder.
///
/// Unset arguments leave their setting untouched. Saving always re-applies
/// the reminder schedule: enabling (or changing the time) registers the next
/// alarm, disabling clears it.
pub fn set_settings(
    store: &dyn KeyValueStore,
    alarms: &dyn AlarmBackend,
    reminder_time: Option<&str>,
    font: Option<&str>,
    reminders: Option<bool>,
    now: NaiveDateTime,
) -> AppResult<()> {
    let mut settings = Settings::load(store)?;

    if let Some(raw) = reminder_time {
        let (hour, minute) = parse_reminder_time(raw)?;
        settings.reminder_hour = hour;
        settings.reminder_minute = minute;
    }
    if let Some(font) = font {
        settings.font = font.to_string();
    }
    if let Some(enabled) = reminders {
        settings.reminders_enabled = enabled;
    }

    settings.save(store)?;
    println!("Settings saved.");

    match ReminderScheduler::new(alarms).apply(&settings, now)? {
        Some(at) => println!("Next reminder: {}", at),
        None => println!("Reminders are disabled."),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::reminder::LogAlarmBackend;
    use crate::store::MemoryStore;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 5)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_set_settings_partial_update() {
        let store = MemoryStore::new();
        set_settings(&store, &LogAlarmBackend, Some("07:30"), None, None, noon()).unwrap();

        let settings = Settings::load(&store).unwrap();
        assert_eq!(settings.reminder_time(), "07:30");
        // Untouched fields keep their defaults.
        assert!(settings.reminders_enabled);
    }

    #[test]
    fn test_set_settings_rejects_bad_time() {
        let store = MemoryStore::new();
        let result = set_settings(&store, &LogAlarmBackend, Some("25:00"), None, None, noon());
        assert!(matches!(result, Err(AppError::Validation(_))));

        // Nothing was persisted.
        assert_eq!(Settings::load(&store).unwrap(), Settings::default());
    }
}
