//! CLI-specific transforms
//!
//! This module defines the views `studymark inspect` can print. Each transform
//! is a stage + format combination (e.g., "blocks-json", "events-pprint").
//!
//! ## Transform Pipeline
//!
//! 1. **Classification** - Raw notes → flat block lines
//!    - `blocks-json`, `blocks-simple`
//!
//! 2. **Grouping** - Block lines → IR document (lists, line groups)
//!    - `ir-json`
//!
//! 3. **Flattening** - IR → event stream consumed by serializers
//!    - `events-simple`, `events-pprint`
//!
//! 4. **Rendering** - `html`
//!
//! ## Extra Parameters
//!
//! - `mode`: `auto` (default), `paragraph` or `line`
//! - `escape`: whether the `html` view escapes literal text (default `true`)
//!
//! Example: `studymark inspect notes.txt ir-json --extra-mode line`

use studymark::common::nested_to_flat::document_to_events;
use studymark::format::parse_bool_option;
use studymark::formats::html::{serialize_to_html, HtmlOptions};
use studymark::formats::notes::{parse_blocks, parse_notes, Mode};
use studymark::ir::events::Event;
use studymark::ir::nodes::{FlatBlock, InlineContent};
use std::collections::HashMap;

/// All available CLI transforms (stage + format combinations)
pub const AVAILABLE_TRANSFORMS: &[&str] = &[
    "blocks-json",
    "blocks-simple",
    "ir-json",
    "events-simple",
    "events-pprint",
    "html",
];

pub const DEFAULT_TRANSFORM: &str = "events-pprint";

/// Execute a named transform on notes text with optional extra parameters
///
/// # Examples
///
/// ```ignore
/// let mut params = HashMap::new();
/// params.insert("mode".to_string(), "line".to_string());
/// let output = execute_transform("- a\n- b", "ir-json", &params)?;
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    extra_params: &HashMap<String, String>,
) -> Result<String, String> {
    let mode = match extra_params.get("mode") {
        Some(raw) => raw.parse::<Mode>().map_err(|e| e.to_string())?,
        None => Mode::Auto,
    };
    let mode = mode.resolve(source);
    let escape = match extra_params.get("escape") {
        Some(raw) => parse_bool_option("escape", raw).map_err(|e| e.to_string())?,
        None => true,
    };

    match transform_name {
        "blocks-json" => {
            let blocks = parse_blocks(source, mode);
            serde_json::to_string_pretty(&blocks)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "blocks-simple" => Ok(blocks_to_simple(&parse_blocks(source, mode))),
        "ir-json" => {
            let doc = parse_notes(source, mode);
            serde_json::to_string_pretty(&doc)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "events-simple" => {
            let events = document_to_events(&parse_notes(source, mode));
            Ok(events
                .iter()
                .map(event_name)
                .collect::<Vec<_>>()
                .join("\n"))
        }
        "events-pprint" => Ok(events_to_pprint(&document_to_events(&parse_notes(
            source, mode,
        )))),
        "html" => Ok(serialize_to_html(
            &parse_notes(source, mode),
            &HtmlOptions::new(escape),
        )),
        _ => Err(format!(
            "Unknown transform '{transform_name}'. Available: {}",
            AVAILABLE_TRANSFORMS.join(", ")
        )),
    }
}

fn blocks_to_simple(blocks: &[FlatBlock]) -> String {
    blocks
        .iter()
        .map(|block| match block {
            FlatBlock::Paragraph(_) => "PARAGRAPH",
            FlatBlock::Item { ordered: true, .. } => "ORDERED_ITEM",
            FlatBlock::Item { ordered: false, .. } => "BULLET_ITEM",
            FlatBlock::Line(_) => "LINE",
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn event_name(event: &Event) -> &'static str {
    match event {
        Event::StartDocument => "START_DOCUMENT",
        Event::EndDocument => "END_DOCUMENT",
        Event::StartParagraph => "START_PARAGRAPH",
        Event::EndParagraph => "END_PARAGRAPH",
        Event::StartList { ordered: true } => "START_ORDERED_LIST",
        Event::StartList { ordered: false } => "START_BULLET_LIST",
        Event::EndList { ordered: true } => "END_ORDERED_LIST",
        Event::EndList { ordered: false } => "END_BULLET_LIST",
        Event::StartListItem => "START_LIST_ITEM",
        Event::EndListItem => "END_LIST_ITEM",
        Event::StartLineGroup => "START_LINE_GROUP",
        Event::EndLineGroup => "END_LINE_GROUP",
        Event::LineBreak => "LINE_BREAK",
        Event::Inline(InlineContent::Text(_)) => "TEXT",
        Event::Inline(InlineContent::Bold(_)) => "BOLD",
        Event::Inline(InlineContent::Code(_)) => "CODE",
    }
}

/// One event per line, indented by nesting depth, with inline content shown.
fn events_to_pprint(events: &[Event]) -> String {
    let mut output = String::new();
    let mut depth = 0usize;

    for event in events {
        let closing = matches!(
            event,
            Event::EndDocument
                | Event::EndParagraph
                | Event::EndList { .. }
                | Event::EndListItem
                | Event::EndLineGroup
        );
        if closing {
            depth = depth.saturating_sub(1);
        }

        output.push_str(&"  ".repeat(depth));
        output.push_str(event_name(event));
        if let Event::Inline(inline) = event {
            output.push(' ');
            output.push_str(&inline_summary(inline));
        }
        output.push('\n');

        let opening = matches!(
            event,
            Event::StartDocument
                | Event::StartParagraph
                | Event::StartList { .. }
                | Event::StartListItem
                | Event::StartLineGroup
        );
        if opening {
            depth += 1;
        }
    }

    output
}

fn inline_summary(inline: &InlineContent) -> String {
    match inline {
        InlineContent::Text(text) | InlineContent::Code(text) => format!("{text:?}"),
        InlineContent::Bold(children) => {
            let parts: Vec<String> = children.iter().map(inline_summary).collect();
            format!("[{}]", parts.join(", "))
        }
    }
}
