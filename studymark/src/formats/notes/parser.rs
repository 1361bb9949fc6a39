//! Notes parsing (raw notes text → IR)
//!
//! Parsing is split in two stages. The functions here classify the input into
//! flat block lines ([`FlatBlock`]) according to the resolved [`Mode`], and
//! `common::flat_to_nested` groups those into lists and line groups.
//!
//! Paragraph-aware parsing splits on blank lines and turns every block into a
//! paragraph, unless each of its lines is a list line. Line-oriented parsing
//! keeps the input's line structure: list lines become items and every other
//! line is a text line. Whitespace-only lines are blank text lines there, so
//! they carry no text of their own.

use super::inline::parse_inlines;
use super::Mode;
use crate::common::flat_to_nested::blocks_to_tree;
use crate::ir::nodes::{Document, FlatBlock};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

/// A newline followed by one or more whitespace-only lines.
static BLOCK_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\n(?:[ \t]*\n)+").expect("block separator pattern is valid"));

static BULLET_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*-[ \t]+(\S.*)$").expect("bullet pattern is valid"));

static NUMBERED_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[ \t]*\d+\.[ \t]+(\S.*)$").expect("numbered pattern is valid"));

/// Classification of a single source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// `- text`
    Bullet(&'a str),
    /// `12. text`
    Numbered(&'a str),
    Text(&'a str),
}

impl<'a> LineKind<'a> {
    pub fn is_item(&self) -> bool {
        !matches!(self, LineKind::Text(_))
    }

    fn into_block(self) -> FlatBlock {
        match self {
            LineKind::Bullet(content) => FlatBlock::Item {
                ordered: false,
                content: parse_inlines(content),
            },
            LineKind::Numbered(content) => FlatBlock::Item {
                ordered: true,
                content: parse_inlines(content),
            },
            LineKind::Text(content) => FlatBlock::Line(parse_inlines(content)),
        }
    }
}

/// Classifies a line (without its trailing newline).
pub fn classify_line(line: &str) -> LineKind<'_> {
    if let Some(content) = BULLET_LINE.captures(line).and_then(|caps| caps.get(1)) {
        return LineKind::Bullet(content.as_str().trim_end());
    }
    if let Some(content) = NUMBERED_LINE.captures(line).and_then(|caps| caps.get(1)) {
        return LineKind::Numbered(content.as_str().trim_end());
    }
    LineKind::Text(line)
}

/// Whether the text holds a blank-line paragraph separator.
pub fn has_blank_line(text: &str) -> bool {
    BLOCK_SEPARATOR.is_match(&normalize_newlines(text))
}

/// Parses notes into a document, grouping adjacent items into lists.
pub fn parse_notes(source: &str, mode: Mode) -> Document {
    blocks_to_tree(parse_blocks(source, mode))
}

/// Parses notes into flat block lines without grouping them.
///
/// `Mode::Auto` is resolved against the source first.
pub fn parse_blocks(source: &str, mode: Mode) -> Vec<FlatBlock> {
    if source.is_empty() {
        return Vec::new();
    }

    let source = normalize_newlines(source);
    match mode.resolve(&source) {
        Mode::LineOriented => parse_lines(&source),
        Mode::ParagraphAware | Mode::Auto => parse_paragraphs(&source),
    }
}

fn parse_paragraphs(source: &str) -> Vec<FlatBlock> {
    let mut blocks = Vec::new();

    for block in BLOCK_SEPARATOR.split(source) {
        let block = block.trim();
        if block.is_empty() {
            continue;
        }

        let lines: Vec<LineKind<'_>> = block.lines().map(classify_line).collect();
        if lines.iter().all(LineKind::is_item) {
            blocks.extend(lines.into_iter().map(LineKind::into_block));
        } else {
            blocks.push(FlatBlock::Paragraph(parse_inlines(block)));
        }
    }

    blocks
}

fn parse_lines(source: &str) -> Vec<FlatBlock> {
    source
        .split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                FlatBlock::Line(Vec::new())
            } else {
                classify_line(line).into_block()
            }
        })
        .collect()
}

fn normalize_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\r') {
        Cow::Owned(text.replace("\r\n", "\n").replace('\r', "\n"))
    } else {
        Cow::Borrowed(text)
    }
}
