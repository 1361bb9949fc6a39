//! Notes format implementation
//!
//! "Notes" is the loose plain-text markup used by generated course records in
//! their `study_notes` and `course_summary` fields:
//!
//! | Source                 | IR                                  | HTML                    |
//! |------------------------|-------------------------------------|-------------------------|
//! | blank-line separated   | `Paragraph` (paragraph-aware mode)  | `<p>`                   |
//! | `**text**`             | `InlineContent::Bold`               | `<strong>`              |
//! | `` `text` ``           | `InlineContent::Code`               | `<code>`                |
//! | `- text`               | unordered `List` / `ListItem`       | `<ul><li>`              |
//! | `1. text`              | ordered `List` / `ListItem`         | `<ol><li>`              |
//! | line (line mode)       | `LineGroup` line                    | text joined by `<br/>`  |
//!
//! # Modes
//!
//! Upstream records are inconsistent: some store notes as blank-line separated
//! paragraphs, others as single-spaced line lists. [`Mode::Auto`] picks
//! [`Mode::ParagraphAware`] when the text holds a blank line and
//! [`Mode::LineOriented`] otherwise (see [`detect_mode`]).
//!
//! # Serialization
//!
//! Serializing back to notes produces a canonical form: paragraphs and lists
//! separated by one blank line, ordered items renumbered from 1. Line groups
//! are emitted as plain lines, so a line-oriented document comes back in the
//! paragraph-aware shape.

pub mod inline;
pub mod parser;
mod serializer;

use crate::error::FormatError;
use crate::format::Format;
use crate::ir::nodes::Document;
use std::fmt;
use std::str::FromStr;

pub use parser::{parse_blocks, parse_notes};
pub use serializer::serialize_to_notes;

/// How notes text is split into blocks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Pick per input with [`detect_mode`]
    #[default]
    Auto,
    /// Blank-line separated paragraphs; single list-line blocks become items
    ParagraphAware,
    /// Every line stands alone; text lines are joined by line breaks
    LineOriented,
}

impl Mode {
    /// Resolves `Auto` against the text; concrete modes are returned as-is.
    pub fn resolve(self, text: &str) -> Mode {
        match self {
            Mode::Auto => detect_mode(text),
            concrete => concrete,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Auto => "auto",
            Mode::ParagraphAware => "paragraph",
            Mode::LineOriented => "line",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(Mode::Auto),
            "paragraph" | "paragraph-aware" | "paragraphs" => Ok(Mode::ParagraphAware),
            "line" | "line-oriented" | "lines" => Ok(Mode::LineOriented),
            _ => Err(FormatError::InvalidOption {
                option: "mode".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

/// Picks the parsing mode for a text: a blank line anywhere means the text is
/// written in paragraphs.
pub fn detect_mode(text: &str) -> Mode {
    if parser::has_blank_line(text) {
        Mode::ParagraphAware
    } else {
        Mode::LineOriented
    }
}

/// Format implementation for notes markup
#[derive(Debug, Clone, Copy, Default)]
pub struct NotesFormat {
    mode: Mode,
}

impl NotesFormat {
    pub fn new(mode: Mode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }
}

impl Format for NotesFormat {
    fn name(&self) -> &str {
        "notes"
    }

    fn description(&self) -> &str {
        "Study notes markup (bold, code, bullet and numbered lines)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["notes", "txt"]
    }

    fn supports_parsing(&self) -> bool {
        true
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn parse(&self, source: &str) -> Result<Document, FormatError> {
        Ok(parse_notes(source, self.mode))
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_notes(doc))
    }
}
