//! Re-registering the daily reminder.

use crate::errors::AppResult;
use crate::reminder::{AlarmBackend, ReminderScheduler};
use crate::settings::Settings;
use crate::store::KeyValueStore;
use chrono::NaiveDateTime;

/// Applies the current reminder settings and prints the next fire time.
pub fn remind(
    store: &dyn KeyValueStore,
    alarms: &dyn AlarmBackend,
    now: NaiveDateTime,
) -> AppResult<()> {
    let settings = Settings::load(store)?;
    match ReminderScheduler::new(alarms).apply(&settings, now)? {
        Some(at) => println!("Next reminder: {}", at),
        None => println!("Reminders are disabled. Enable with: gratia settings set --reminders true"),
    }
    Ok(())
}
