//! Quotes and writing prompts.
//!
//! Both are read-only JSON files in the data directory: `quotes.json` is an
//! array of `{text, author}` objects, `prompts.json` wraps its list as
//! `{"prompts": [{text}]}`. Any load or parse failure falls back to a
//! hardcoded value with a warning; these failures are never surfaced to the
//! user.

use crate::constants::{
    FALLBACK_PROMPT_TEXT, FALLBACK_QUOTE_AUTHOR, FALLBACK_QUOTE_TEXT,
};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::warn;

/// An inspirational quote shown on the popup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

/// A writing prompt used as the entry placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Prompt {
    pub text: String,
}

#[derive(Deserialize)]
struct PromptsFile {
    prompts: Vec<Prompt>,
}

fn fallback_quote() -> Quote {
    Quote {
        text: FALLBACK_QUOTE_TEXT.to_string(),
        author: FALLBACK_QUOTE_AUTHOR.to_string(),
    }
}

fn fallback_prompt() -> Prompt {
    Prompt {
        text: FALLBACK_PROMPT_TEXT.to_string(),
    }
}

/// Picks an index from the subsecond clock; good enough for rotating
/// display content, and keeps the dependency surface flat.
fn pick_index(len: usize) -> usize {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(0);
    nanos as usize % len
}

fn read_quotes(path: &Path) -> Option<Vec<Quote>> {
    let contents = fs::read_to_string(path).ok()?;
    let quotes: Vec<Quote> = serde_json::from_str(&contents).ok()?;
    if quotes.is_empty() {
        None
    } else {
        Some(quotes)
    }
}

fn read_prompts(path: &Path) -> Option<Vec<Prompt>> {
    let contents = fs::read_to_string(path).ok()?;
    let file: PromptsFile = serde_json::from_str(&contents).ok()?;
    if file.prompts.is_empty() {
        None
    } else {
        Some(file.prompts)
    }
}

/// Returns a random quote from the given file, or the hardcoded fallback.
pub fn random_quote(path: &Path) -> Quote {
    match read_quotes(path) {
        Some(quotes) => quotes[pick_index(quotes.len())].clone(),
        None => {
            warn!("Could not load quotes from {}, using fallback", path.display());
            fallback_quote()
        }
    }
}

/// Returns a random prompt from the given file, or the hardcoded fallback.
pub fn random_prompt(path: &Path) -> Prompt {
    match read_prompts(path) {
        Some(prompts) => prompts[pick_index(prompts.len())].clone(),
        None => {
            warn!(
                "Could not load prompts from {}, using fallback",
                path.display()
            );
            fallback_prompt()
        }
    }
}
