//! Export layout and rendering seam.
//!
//! The layout engine lays entries onto fixed-height pages with a vertical
//! cursor, the same geometry the journal page used for its PDF export: the
//! cursor starts at [`EXPORT_TOP_MARGIN`], a page breaks once it passes
//! [`EXPORT_BOTTOM_MARGIN`]. Each entry becomes a date heading, wrapped body
//! lines, and an optional mood label (with an "Unknown" fallback for symbols
//! outside the fixed set).
//!
//! The actual drawing library is an external collaborator behind
//! [`ExportBackend`]; the CLI ships a plain-text backend.

use crate::constants::{
    DISPLAY_DATE_FORMAT, EXPORT_BOTTOM_MARGIN, EXPORT_TITLE, EXPORT_TOP_MARGIN,
    EXPORT_WRAP_COLUMNS,
};
use crate::errors::{AppResult, ExportError};
use crate::journal::{mood_label, JournalEntry};
use std::fs;
use std::path::Path;
use tracing::info;

// Vertical advances per block, in the same units as the margins.
const DATE_ADVANCE: f32 = 10.0;
const BODY_LEAD: f32 = 7.0;
const BODY_LINE_ADVANCE: f32 = 7.0;
const BODY_TRAIL: f32 = 5.0;
const MOOD_ADVANCE: f32 = 10.0;

/// One laid-out block on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportBlock {
    /// The document title, on the first page only.
    Title(String),
    /// An entry's formatted date heading.
    DateHeading(String),
    /// One wrapped line of entry body text.
    BodyLine(String),
    /// An entry's mood, already mapped to its label.
    MoodLine(String),
}

/// One fixed-size page of blocks.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExportPage {
    pub blocks: Vec<ExportBlock>,
}

/// The fully laid-out document a backend renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub pages: Vec<ExportPage>,
}

/// Greedy word wrap at the given column width.
///
/// Words longer than the width get a line of their own rather than being
/// split mid-word.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Lays the entries out into pages.
///
/// Entries are rendered in the order given; a page break happens when the
/// vertical cursor has passed the bottom margin before the next entry starts,
/// so an entry never begins at the very bottom of a page.
pub fn layout_document(entries: &[JournalEntry]) -> ExportDocument {
    let mut pages = Vec::new();
    let mut page = ExportPage::default();
    let mut cursor = EXPORT_TOP_MARGIN;

    page.blocks.push(ExportBlock::Title(EXPORT_TITLE.to_string()));

    for entry in entries {
        if cursor > EXPORT_BOTTOM_MARGIN {
            pages.push(std::mem::take(&mut page));
            cursor = EXPORT_TOP_MARGIN;
        }

        cursor += DATE_ADVANCE;
        page.blocks.push(ExportBlock::DateHeading(
            entry.date.format(DISPLAY_DATE_FORMAT).to_string(),
        ));

        let lines = wrap_text(&entry.entry, EXPORT_WRAP_COLUMNS);
        cursor += BODY_LEAD;
        cursor += lines.len() as f32 * BODY_LINE_ADVANCE + BODY_TRAIL;
        for line in lines {
            page.blocks.push(ExportBlock::BodyLine(line));
        }

        if let Some(symbol) = &entry.mood {
            page.blocks
                .push(ExportBlock::MoodLine(mood_label(symbol).to_string()));
            cursor += MOOD_ADVANCE;
        }
    }

    pages.push(page);
    ExportDocument { pages }
}

/// Contract of the external document-rendering library.
pub trait ExportBackend {
    /// Renders the laid-out document to the given path.
    fn render(&self, document: &ExportDocument, path: &Path) -> AppResult<()>;
}

/// Backend that renders the document as plain text.
#[derive(Default)]
pub struct PlainTextBackend;

impl ExportBackend for PlainTextBackend {
    fn render(&self, document: &ExportDocument, path: &Path) -> AppResult<()> {
        let mut out = String::new();
        for (index, page) in document.pages.iter().enumerate() {
            if index > 0 {
                out.push_str("\n--- page break ---\n\n");
            }
            for block in &page.blocks {
                match block {
                    ExportBlock::Title(title) => {
                        out.push_str(title);
                        out.push_str("\n\n");
                    }
                    ExportBlock::DateHeading(date) => {
                        out.push('\n');
                        out.push_str(date);
                        out.push('\n');
                    }
                    ExportBlock::BodyLine(line) => {
                        out.push_str(line);
                        out.push('\n');
                    }
                    ExportBlock::MoodLine(label) => {
                        out.push_str("Mood: ");
                        out.push_str(label);
                        out.push('\n');
                    }
                }
            }
        }

        fs::write(path, out).map_err(|e| ExportError::WriteFailed {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(())
    }
}

/// Lays out and renders the entries through the given backend.
///
/// # Errors
///
/// Returns `ExportError::Empty` when there is nothing to export, or the
/// backend's error when rendering fails. Failures are surfaced for a manual
/// retry, never retried automatically.
pub fn export_entries(
    entries: &[JournalEntry],
    backend: &dyn ExportBackend,
    path: &Path,
) -> AppResult<()> {
    if entries.is_empty() {
        return Err(ExportError::Empty.into());
    }

    let document = layout_document(entries);
    backend.render(&document, path)?;
    info!(
        "Exported {} entries across {} page(s) to {}",
        entries.len(),
        document.pages.len(),
        path.display()
    );
    Ok(())
}
