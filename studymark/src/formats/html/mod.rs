//! HTML format implementation
//!
//! Export-only conversion from the notes IR to an HTML fragment meant to be
//! injected straight into a rendered course page.
//!
//! # Element Mapping Table
//!
//! | IR Element       | HTML Equivalent       | Notes                                   |
//! |------------------|-----------------------|-----------------------------------------|
//! | Document         | (none)                | Fragment only, no wrapper               |
//! | Paragraph        | `<p>`                 |                                         |
//! | List             | `<ul>` / `<ol>`       | Adjacent same-kind items share one list |
//! | ListItem         | `<li>`                |                                         |
//! | LineGroup        | lines joined by `<br/>` | No wrapper element                    |
//! | InlineContent:   |                       |                                         |
//! |   Text           | Plain text            | Escaped unless trusted                  |
//! |   Bold           | `<strong>`            |                                         |
//! |   Code           | `<code>`              | Content escaped unless trusted          |
//!
//! # Trust Boundary
//!
//! Generated notes come from our own generation service, but the fragment is
//! injected without further sanitization. Text is therefore escaped by default
//! ([`HtmlOptions::escape`]); callers that rely on raw HTML inside the source
//! text opt out with `escape = false` (the `escape` extra option).

mod serializer;

use crate::error::FormatError;
use crate::format::{parse_bool_option, Format};
use crate::ir::nodes::Document;
use std::collections::HashMap;

pub use serializer::{serialize_to_html, HtmlOptions};

/// Format implementation for HTML
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlFormat {
    options: HtmlOptions,
}

impl HtmlFormat {
    /// Create a new HTML format with the given options
    pub fn new(options: HtmlOptions) -> Self {
        Self { options }
    }

    /// Create an HTML format that does not escape text
    pub fn trusted() -> Self {
        Self::new(HtmlOptions::trusted())
    }

    pub fn options(&self) -> &HtmlOptions {
        &self.options
    }
}

impl Format for HtmlFormat {
    fn name(&self) -> &str {
        "html"
    }

    fn description(&self) -> &str {
        "HTML fragment (p, ul/ol, li, strong, code, br)"
    }

    fn file_extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn supports_serialization(&self) -> bool {
        true
    }

    fn serialize(&self, doc: &Document) -> Result<String, FormatError> {
        Ok(serialize_to_html(doc, &self.options))
    }

    fn serialize_with_options(
        &self,
        doc: &Document,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        let mut html_options = self.options;
        for (key, value) in options {
            match key.as_str() {
                "escape" => html_options.escape = parse_bool_option(key, value)?,
                "trust" | "trusted" => html_options.escape = !parse_bool_option(key, value)?,
                other => {
                    return Err(FormatError::NotSupported(format!(
                        "Format 'html' does not support option '{other}'"
                    )))
                }
            }
        }

        Ok(serialize_to_html(doc, &html_options))
    }
}
