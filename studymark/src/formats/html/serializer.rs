//! HTML serialization (IR → HTML fragment)
//!
//! Pipeline: IR Document → Events → HTML string. The serializer only emits
//! `<p>`, `<ul>`, `<ol>`, `<li>`, `<strong>`, `<code>` and `<br/>`, without
//! attributes or whitespace between tags, so the fragment can be injected into
//! a page as-is.

use crate::common::nested_to_flat::document_to_events;
use crate::ir::events::Event;
use crate::ir::nodes::{Document, InlineContent};
use std::borrow::Cow;

/// Options for HTML serialization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Escape `&`, `<` and `>` in literal text and code content before
    /// structural tags are inserted. Only disable for trusted sources.
    pub escape: bool,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self { escape: true }
    }
}

impl HtmlOptions {
    pub fn new(escape: bool) -> Self {
        Self { escape }
    }

    /// Options for sources whose text may carry raw HTML on purpose.
    pub fn trusted() -> Self {
        Self { escape: false }
    }
}

/// Serialize a document to an HTML fragment
pub fn serialize_to_html(doc: &Document, options: &HtmlOptions) -> String {
    let events = document_to_events(doc);
    render_events(&events, options)
}

/// Render an event stream to HTML
fn render_events(events: &[Event], options: &HtmlOptions) -> String {
    let mut output = String::new();

    for event in events {
        match event {
            Event::StartDocument
            | Event::EndDocument
            | Event::StartLineGroup
            | Event::EndLineGroup => {}

            Event::StartParagraph => output.push_str("<p>"),
            Event::EndParagraph => output.push_str("</p>"),

            Event::StartList { ordered } => output.push_str(list_tag(*ordered, false)),
            Event::EndList { ordered } => output.push_str(list_tag(*ordered, true)),

            Event::StartListItem => output.push_str("<li>"),
            Event::EndListItem => output.push_str("</li>"),

            Event::LineBreak => output.push_str("<br/>"),

            Event::Inline(inline) => write_inline(&mut output, inline, options),
        }
    }

    output
}

fn list_tag(ordered: bool, closing: bool) -> &'static str {
    match (ordered, closing) {
        (false, false) => "<ul>",
        (false, true) => "</ul>",
        (true, false) => "<ol>",
        (true, true) => "</ol>",
    }
}

fn write_inline(output: &mut String, inline: &InlineContent, options: &HtmlOptions) {
    match inline {
        InlineContent::Text(text) => output.push_str(&text_content(text, options)),
        InlineContent::Bold(children) => {
            output.push_str("<strong>");
            for child in children {
                write_inline(output, child, options);
            }
            output.push_str("</strong>");
        }
        InlineContent::Code(code) => {
            output.push_str("<code>");
            output.push_str(&text_content(code, options));
            output.push_str("</code>");
        }
    }
}

fn text_content<'a>(text: &'a str, options: &HtmlOptions) -> Cow<'a, str> {
    if options.escape {
        html_escape::encode_text(text)
    } else {
        Cow::Borrowed(text)
    }
}
