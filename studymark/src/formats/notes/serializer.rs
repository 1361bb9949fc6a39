//! Notes serialization (IR → canonical notes text)

use crate::ir::nodes::{DocNode, Document, InlineContent, List, ListItem};

/// Serializes a document back into notes markup.
///
/// Blocks are separated by one blank line and the output ends with a newline
/// unless the document is empty.
pub fn serialize_to_notes(doc: &Document) -> String {
    let blocks = collect_blocks(&doc.children);
    if blocks.is_empty() {
        return String::new();
    }
    let mut output = blocks.join("\n\n");
    output.push('\n');
    output
}

fn collect_blocks(nodes: &[DocNode]) -> Vec<String> {
    let mut blocks = Vec::new();
    for node in nodes {
        match node {
            DocNode::Document(doc) => blocks.extend(collect_blocks(&doc.children)),
            DocNode::Paragraph(paragraph) => blocks.push(inlines_to_notes(&paragraph.content)),
            DocNode::List(list) => blocks.push(list_to_notes(list)),
            DocNode::ListItem(item) => blocks.push(item_to_notes(item, None)),
            DocNode::LineGroup(group) => blocks.push(
                group
                    .lines
                    .iter()
                    .map(|line| inlines_to_notes(line))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ),
            DocNode::Inline(inline) => blocks.push(inlines_to_notes(std::slice::from_ref(inline))),
        }
    }
    blocks
}

fn list_to_notes(list: &List) -> String {
    list.items
        .iter()
        .enumerate()
        .map(|(index, item)| item_to_notes(item, list.ordered.then_some(index + 1)))
        .collect::<Vec<_>>()
        .join("\n")
}

fn item_to_notes(item: &ListItem, number: Option<usize>) -> String {
    let content = inlines_to_notes(&item.content);
    match number {
        Some(number) => format!("{number}. {content}"),
        None => format!("- {content}"),
    }
}

fn inlines_to_notes(inlines: &[InlineContent]) -> String {
    let mut output = String::new();
    for inline in inlines {
        match inline {
            InlineContent::Text(text) => output.push_str(text),
            InlineContent::Bold(children) => {
                output.push_str("**");
                output.push_str(&inlines_to_notes(children));
                output.push_str("**");
            }
            InlineContent::Code(code) => {
                output.push('`');
                output.push_str(code);
                output.push('`');
            }
        }
    }
    output
}
