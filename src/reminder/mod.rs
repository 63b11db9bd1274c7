//! Daily reminder scheduling.
//!
//! The next-fire computation is a pure function so the midnight and
//! just-past-the-hour boundaries can be tested directly; the platform alarm
//! primitive sits behind [`AlarmBackend`], which is an external collaborator.
//! The scheduler reacts to settings changes: enabled reminders (re)register
//! the daily alarm, disabled reminders clear it.

use crate::constants::{REMINDER_MESSAGE, REMINDER_PERIOD_MINUTES, REMINDER_TITLE};
use crate::errors::AppResult;
use crate::settings::Settings;
use chrono::{Duration, NaiveDateTime, NaiveTime};
use tracing::info;

/// Computes the next instant the reminder should fire.
///
/// The candidate is today at the given wall-clock time; if that has already
/// passed (or is exactly now), the reminder moves to tomorrow.
///
/// # Examples
///
/// ```
/// use gratia::reminder::next_fire_time;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let now = NaiveDate::from_ymd_opt(2024, 1, 1)
///     .unwrap()
///     .and_hms_opt(19, 0, 0)
///     .unwrap();
/// let at = next_fire_time(20, 0, now);
/// assert_eq!(at.time(), NaiveTime::from_hms_opt(20, 0, 0).unwrap());
/// assert_eq!(at.date(), now.date());
/// ```
pub fn next_fire_time(hour: u32, minute: u32, now: NaiveDateTime) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).expect("validated wall-clock time");
    let candidate = now.date().and_time(time);
    if candidate <= now {
        candidate + Duration::days(1)
    } else {
        candidate
    }
}

/// Contract of the platform's recurring alarm primitive.
pub trait AlarmBackend {
    /// Registers (or replaces) the daily alarm, first firing at `at` and
    /// repeating every `period_minutes`.
    fn schedule(&self, at: NaiveDateTime, period_minutes: i64) -> AppResult<()>;

    /// Clears the daily alarm. The explicit disable path.
    fn clear(&self) -> AppResult<()>;
}

/// Alarm backend that only records the schedule in the log.
///
/// Stands in where no OS alarm service is wired up, and doubles as the CLI's
/// way of showing what would be scheduled.
#[derive(Default)]
pub struct LogAlarmBackend;

impl AlarmBackend for LogAlarmBackend {
    fn schedule(&self, at: NaiveDateTime, period_minutes: i64) -> AppResult<()> {
        info!(
            "Daily reminder scheduled for {} (repeats every {} minutes): {}: {}",
            at, period_minutes, REMINDER_TITLE, REMINDER_MESSAGE
        );
        Ok(())
    }

    fn clear(&self) -> AppResult<()> {
        info!("Daily reminder cleared");
        Ok(())
    }
}

/// Registers or clears the daily reminder from settings.
pub struct ReminderScheduler<'a> {
    backend: &'a dyn AlarmBackend,
}

impl<'a> ReminderScheduler<'a> {
    /// Creates a scheduler over the given alarm backend.
    pub fn new(backend: &'a dyn AlarmBackend) -> Self {
        ReminderScheduler { backend }
    }

    /// Registers the recurring daily alarm at the given wall-clock time.
    pub fn schedule_daily(&self, hour: u32, minute: u32, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
        let at = next_fire_time(hour, minute, now);
        self.backend.schedule(at, REMINDER_PERIOD_MINUTES)?;
        Ok(at)
    }

    /// Applies the reminder settings: schedule when enabled, clear when not.
    ///
    /// Returns the next fire instant when a reminder was scheduled.
    pub fn apply(&self, settings: &Settings, now: NaiveDateTime) -> AppResult<Option<NaiveDateTime>> {
        if settings.reminders_enabled {
            let at = self.schedule_daily(settings.reminder_hour, settings.reminder_minute, now)?;
            Ok(Some(at))
        } else {
            self.backend.clear()?;
            Ok(None)
        }
    }
}
