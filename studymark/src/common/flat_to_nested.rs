//! Groups the parser's flat block lines into a nested IR document.
//!
//! # The High-Level Concept
//!
//! The notes parser looks at one line (or one blank-line separated block) at a
//! time, so it only knows that a line *is* a list item, never which list it
//! belongs to. Grouping is a single left-to-right pass that keeps the last
//! emitted container open as long as the next block can extend it:
//!
//! ```text
//! Item(unordered) a   ─┐
//! Item(unordered) b    ├─> List { ordered: false, [a, b, c] }
//! Item(unordered) c   ─┘
//! Item(ordered)   d   ───> List { ordered: true,  [d] }      (kind changed)
//! Line x              ─┐
//! Line y              ─┴─> LineGroup [x, y]
//! Paragraph p         ───> Paragraph p
//! ```
//!
//! Lists of different kinds are never merged, and a paragraph always closes
//! whatever was open before it. Blank lines between two items of the same kind
//! do not close the list either: the item joins the open list and the blank
//! lines are dropped. Because grouping happens on typed blocks, the output never
//! contains a closing list tag followed by an opening tag of the same kind.
//!
//! ```text
//! Item(unordered) a   ─┐
//! Line ""              ├─> List { ordered: false, [a, b] }
//! Item(unordered) b   ─┘
//! ```

use crate::ir::nodes::{
    DocNode, Document, FlatBlock, InlineContent, LineGroup, List, ListItem, Paragraph,
};

/// Builds a document from flat blocks, coalescing adjacent same-kind items into
/// one list and adjacent lines into one line group.
pub fn blocks_to_tree(blocks: Vec<FlatBlock>) -> Document {
    let mut children: Vec<DocNode> = Vec::new();

    for block in blocks {
        match block {
            FlatBlock::Paragraph(content) => {
                children.push(DocNode::Paragraph(Paragraph { content }));
            }
            FlatBlock::Item { ordered, content } => push_item(&mut children, ordered, content),
            FlatBlock::Line(content) => push_line(&mut children, content),
        }
    }

    Document::new(children)
}

fn push_item(children: &mut Vec<DocNode>, ordered: bool, content: Vec<InlineContent>) {
    let item = ListItem { content };
    if let [.., DocNode::List(list), DocNode::LineGroup(gap)] = children.as_slice() {
        if list.ordered == ordered && gap.lines.iter().all(Vec::is_empty) {
            children.pop();
        }
    }
    if let Some(DocNode::List(list)) = children.last_mut() {
        if list.ordered == ordered {
            list.items.push(item);
            return;
        }
    }
    children.push(DocNode::List(List {
        items: vec![item],
        ordered,
    }));
}

fn push_line(children: &mut Vec<DocNode>, content: Vec<InlineContent>) {
    if let Some(DocNode::LineGroup(group)) = children.last_mut() {
        group.lines.push(content);
        return;
    }
    children.push(DocNode::LineGroup(LineGroup {
        lines: vec![content],
    }));
}
