//! The notes → HTML entry point used by course pages.
//!
//! [`Formatter::format`] is total: any string, including the empty string and
//! text with unmatched delimiters, produces a best-effort fragment and never an
//! error. It holds no state, so one value can be shared freely across threads.

use crate::formats::html::{serialize_to_html, HtmlOptions};
use crate::formats::notes::{parse_notes, Mode};
use tracing::debug;

/// Formats raw study notes or course summaries into HTML fragments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    pub mode: Mode,
    /// Escape literal text (see [`HtmlOptions::escape`])
    pub escape: bool,
}

impl Default for Formatter {
    fn default() -> Self {
        Self {
            mode: Mode::Auto,
            escape: true,
        }
    }
}

impl Formatter {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_escape(mut self, escape: bool) -> Self {
        self.escape = escape;
        self
    }

    /// Skip escaping: the source is trusted to carry intentional HTML.
    pub fn trusted(self) -> Self {
        self.with_escape(false)
    }

    /// Formats notes text into an HTML fragment.
    pub fn format(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mode = self.mode.resolve(text);
        let doc = parse_notes(text, mode);
        debug!(
            mode = %mode,
            blocks = doc.children.len(),
            escape = self.escape,
            "formatted notes"
        );
        serialize_to_html(&doc, &HtmlOptions::new(self.escape))
    }

    /// Formats an optional field; a missing value yields an empty fragment.
    pub fn format_opt(&self, text: Option<&str>) -> String {
        text.map(|text| self.format(text)).unwrap_or_default()
    }
}

/// Formats notes with the default formatter (auto mode, escaped text).
pub fn format_notes(text: &str) -> String {
    Formatter::default().format(text)
}
