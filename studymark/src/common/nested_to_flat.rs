//! Converts a nested IR tree structure into a flat event stream.
//!
//! # The High-Level Concept
//!
//! Traversing the nested document structure in pre-order lets us emit a
//! sequence of start/content/end events. Each container node produces its own
//! start/end markers and then recurses into children, so serializers can walk
//! the stream linearly without tracking the tree.
//!
//! # The Algorithm
//!
//! 1. **Entering Containers:**
//!    - Emit the corresponding `Start*` event
//!    - Emit inline content, if any
//!    - Recurse into child nodes
//!
//! 2. **Line Groups:**
//!    - Emit the inlines of each line, with a `LineBreak` between two lines
//!
//! 3. **Handling Inline Nodes:**
//!    - Inline-only nodes become a single `Inline` event in place
//!
//! 4. **Exiting Containers:**
//!    - Emit the matching `End*` event once children are processed

use crate::ir::events::Event;
use crate::ir::nodes::{
    DocNode, Document, InlineContent, LineGroup, List, ListItem, Paragraph,
};

/// Converts a `DocNode` tree to a flat vector of `Event`s.
pub fn tree_to_events(root_node: &DocNode) -> Vec<Event> {
    let mut events = Vec::new();
    walk_node(root_node, &mut events);
    events
}

/// Converts a document to events without cloning it into a `DocNode` first.
pub fn document_to_events(doc: &Document) -> Vec<Event> {
    let mut events = Vec::new();
    walk_document(doc, &mut events);
    events
}

fn walk_document(doc: &Document, events: &mut Vec<Event>) {
    events.push(Event::StartDocument);
    for child in &doc.children {
        walk_node(child, events);
    }
    events.push(Event::EndDocument);
}

fn walk_node(node: &DocNode, events: &mut Vec<Event>) {
    match node {
        DocNode::Document(doc) => walk_document(doc, events),
        DocNode::Paragraph(Paragraph { content }) => {
            events.push(Event::StartParagraph);
            emit_inlines(content, events);
            events.push(Event::EndParagraph);
        }
        DocNode::List(List { items, ordered }) => {
            events.push(Event::StartList { ordered: *ordered });
            for item in items {
                walk_list_item(item, events);
            }
            events.push(Event::EndList { ordered: *ordered });
        }
        // A stray item outside a list is emitted as-is; serializers decide how
        // to wrap it.
        DocNode::ListItem(item) => walk_list_item(item, events),
        DocNode::LineGroup(LineGroup { lines }) => {
            events.push(Event::StartLineGroup);
            for (index, line) in lines.iter().enumerate() {
                if index > 0 {
                    events.push(Event::LineBreak);
                }
                emit_inlines(line, events);
            }
            events.push(Event::EndLineGroup);
        }
        DocNode::Inline(inline) => events.push(Event::Inline(inline.clone())),
    }
}

fn walk_list_item(item: &ListItem, events: &mut Vec<Event>) {
    events.push(Event::StartListItem);
    emit_inlines(&item.content, events);
    events.push(Event::EndListItem);
}

fn emit_inlines(inlines: &[InlineContent], events: &mut Vec<Event>) {
    for inline in inlines {
        events.push(Event::Inline(inline.clone()));
    }
}
