//! Inline span tokenizer for notes text.
//!
//! Recognises two spans, scanned left to right and matched non-greedily:
//!
//! - `` `code` ``: literal content, never parsed further.
//! - `**bold**`: content may hold code spans but no further bold spans.
//!
//! A span only opens when its closing delimiter appears later on the same line
//! with non-empty content in between. Anything else (odd delimiter counts,
//! `****`, a closer on the next line) is kept as literal text, so an unmatched
//! delimiter never swallows the rest of the input.

use crate::ir::nodes::InlineContent;

const BOLD: &str = "**";
const CODE: &str = "`";

/// Tokenizes a line (or a paragraph) into typed inline spans.
///
/// Adjacent literal fragments are merged into a single `Text` span, and empty
/// input yields no spans at all.
pub fn parse_inlines(text: &str) -> Vec<InlineContent> {
    scan(text, true)
}

fn scan(text: &str, allow_bold: bool) -> Vec<InlineContent> {
    let mut spans = Vec::new();
    let mut literal = String::new();
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix(CODE) {
            if let Some(end) = find_closer(after, CODE) {
                flush(&mut literal, &mut spans);
                spans.push(InlineContent::Code(after[..end].to_string()));
                rest = &after[end + CODE.len()..];
                continue;
            }
        } else if allow_bold {
            if let Some(after) = rest.strip_prefix(BOLD) {
                if let Some(end) = find_closer(after, BOLD) {
                    flush(&mut literal, &mut spans);
                    spans.push(InlineContent::Bold(scan(&after[..end], false)));
                    rest = &after[end + BOLD.len()..];
                    continue;
                }
                // Both asterisks stay literal so the second one cannot open a
                // span with a later pair.
                literal.push_str(BOLD);
                rest = after;
                continue;
            }
        }

        literal.push(ch);
        rest = &rest[ch.len_utf8()..];
    }

    flush(&mut literal, &mut spans);
    spans
}

/// Byte offset of the closing delimiter within the current line, if the span
/// it closes would be non-empty.
fn find_closer(after: &str, delimiter: &str) -> Option<usize> {
    let line = after.find('\n').map_or(after, |newline| &after[..newline]);
    match line.find(delimiter) {
        Some(0) | None => None,
        Some(end) => Some(end),
    }
}

fn flush(literal: &mut String, spans: &mut Vec<InlineContent>) {
    if !literal.is_empty() {
        spans.push(InlineContent::Text(std::mem::take(literal)));
    }
}
