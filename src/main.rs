/*!
# Gratia - A Gratitude Journal

Gratia is a command-line gratitude journal. It keeps dated entries with an
optional mood, tracks consecutive-day writing streaks, searches and paginates
past entries, exports the journal to a document, and schedules a daily
reminder.

## Usage

```text
gratia <COMMAND>

Commands:
  write     Save a new journal entry
  list      List entries, with optional search and pagination
  stats     Show totals, the current streak, and the dominant mood
  delete    Delete the entry with the given timestamp (RFC 3339)
  purge     Delete all entries and reset the streak
  export    Export all entries to a document
  draft     Manage the unsaved draft
  settings  Show or change settings
  remind    Show the next reminder time and re-register the daily alarm
  quote     Print a random inspirational quote
  prompt    Print a random writing prompt
```

## Configuration

The application can be configured with the following environment variables:
- `GRATIA_DIR`: The directory holding the journal store (defaults to "~/.gratia")
*/

use chrono::{Local, Utc};
use gratia::cli::{CliArgs, Command, DraftAction, SettingsAction};
use gratia::config::{self, Config};
use gratia::errors::AppResult;
use gratia::ops;
use gratia::reminder::LogAlarmBackend;
use gratia::store::FileStore;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> AppResult<()> {
    let args = CliArgs::parse_args();

    let default_level = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    info!("Starting gratia");
    debug!("CLI arguments: {:?}", args);

    let config = Config::load()?;
    config.validate()?;

    debug!("Data directory: {:?}", config);
    config::ensure_data_directory_exists(&config.data_dir)?;

    let store = FileStore::new(config.store_path());
    let now_utc = Utc::now();
    let now_local = Local::now().naive_local();

    match args.command {
        Command::Write { text, mood } => {
            ops::write::save_entry(&store, &text, mood.as_deref(), now_utc)
        }
        Command::List { search, page } => {
            ops::view::list_entries(&store, search.as_deref(), page)
        }
        Command::Stats => ops::view::show_stats(&store),
        Command::Delete { date } => ops::purge::delete_entry(&store, &date),
        Command::Purge { yes } => ops::purge::purge_all(&store, yes),
        Command::Export { output } => ops::export::export_journal_plain(&store, output),
        Command::Draft { action } => match action {
            DraftAction::Save { text } => ops::draft::save_draft(&store, &text),
            DraftAction::Show => ops::draft::show_draft(&store),
            DraftAction::Clear => ops::draft::clear_draft(&store),
        },
        Command::Settings { action } => match action {
            SettingsAction::Show => ops::settings::show_settings(&store),
            SettingsAction::Set {
                reminder_time,
                font,
                reminders,
            } => ops::settings::set_settings(
                &store,
                &LogAlarmBackend,
                reminder_time.as_deref(),
                font.as_deref(),
                reminders,
                now_local,
            ),
        },
        Command::Remind => ops::remind::remind(&store, &LogAlarmBackend, now_local),
        Command::Quote => ops::inspire::show_quote(&config),
        Command::Prompt => ops::inspire::show_prompt(&config),
    }
}
