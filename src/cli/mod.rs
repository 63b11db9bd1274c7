use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::constants::{APP_DESCRIPTION, APP_NAME};

/// A gratitude journal with streaks, search, and daily reminders
#[derive(Parser, Debug)]
#[clap(name = APP_NAME, about = APP_DESCRIPTION)]
#[clap(author, version, long_about = None)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Command,

    /// Print verbose output
    #[clap(short = 'v', long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save a new journal entry
    Write {
        /// The entry text
        text: String,

        /// Mood for the entry (happy, content, sad, frustrated, tired)
        #[clap(short, long)]
        mood: Option<String>,
    },

    /// List entries, with optional search and pagination
    List {
        /// Case-insensitive search over entry text and mood
        #[clap(short, long)]
        search: Option<String>,

        /// Page number (20 entries per page)
        #[clap(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show totals, the current streak, and the dominant mood
    Stats,

    /// Delete the entry with the given timestamp (RFC 3339)
    Delete {
        /// Timestamp of the entry to delete
        date: String,
    },

    /// Delete all entries and reset the streak
    Purge {
        /// Skip the confirmation prompt
        #[clap(long)]
        yes: bool,
    },

    /// Export all entries to a document
    Export {
        /// Output path (defaults to gratitude-journal.pdf in the current directory)
        #[clap(short, long)]
        output: Option<PathBuf>,
    },

    /// Manage the unsaved draft
    Draft {
        #[clap(subcommand)]
        action: DraftAction,
    },

    /// Show or change settings
    Settings {
        #[clap(subcommand)]
        action: SettingsAction,
    },

    /// Show the next reminder time and re-register the daily alarm
    Remind,

    /// Print a random inspirational quote
    Quote,

    /// Print a random writing prompt
    Prompt,
}

#[derive(Subcommand, Debug)]
pub enum DraftAction {
    /// Save draft text, replacing any existing draft
    Save {
        /// The draft text
        text: String,
    },
    /// Print the current draft
    Show,
    /// Discard the current draft
    Clear,
}

#[derive(Subcommand, Debug)]
pub enum SettingsAction {
    /// Print the current settings
    Show,
    /// Change one or more settings
    Set {
        /// Reminder time of day as HH:MM (24-hour clock)
        #[clap(long)]
        reminder_time: Option<String>,

        /// Display font family
        #[clap(long)]
        font: Option<String>,

        /// Enable or disable the daily reminder
        #[clap(long)]
        reminders: Option<bool>,
    },
}

impl CliArgs {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        CliArgs::parse_from(std::env::args())
    }
}
