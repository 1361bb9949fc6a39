//! Core data structures for the Intermediate Representation (IR).

use serde::Serialize;

/// A semantic representation of a formatted notes node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DocNode {
    Document(Document),
    Paragraph(Paragraph),
    List(List),
    ListItem(ListItem),
    LineGroup(LineGroup),
    Inline(InlineContent),
}

/// Represents the root of a notes document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document {
    pub children: Vec<DocNode>,
}

impl Document {
    pub fn new(children: Vec<DocNode>) -> Self {
        Self { children }
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// Represents a paragraph of text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paragraph {
    pub content: Vec<InlineContent>,
}

/// Represents a list of items. Items of one list always share the same kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct List {
    pub items: Vec<ListItem>,
    pub ordered: bool,
}

/// Represents an item in a list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListItem {
    pub content: Vec<InlineContent>,
}

/// Consecutive unwrapped text lines, rendered with line breaks between them.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineGroup {
    pub lines: Vec<Vec<InlineContent>>,
}

/// Represents inline content.
///
/// `Bold` children are only ever `Text` or `Code`: bold spans do not nest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum InlineContent {
    Text(String),
    Bold(Vec<InlineContent>),
    Code(String),
}

/// A block-level line as produced by the notes parser, before adjacent
/// items and lines are grouped into containers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FlatBlock {
    Paragraph(Vec<InlineContent>),
    Item {
        ordered: bool,
        content: Vec<InlineContent>,
    },
    Line(Vec<InlineContent>),
}
