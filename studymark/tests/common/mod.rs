//! Shared helpers: fixture loading and structural checks on HTML output.
//!
//! Output is parsed with html5ever so assertions count real elements rather
//! than substrings.

#![allow(dead_code)]

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name))
        .unwrap_or_else(|e| panic!("failed to read fixture {name}: {e}"))
}

/// Parses a fragment the way a browser would when injected into a page body.
pub fn parse_html(fragment: &str) -> RcDom {
    parse_document(RcDom::default(), Default::default()).one(fragment)
}

fn walk(handle: &Handle, visit: &mut dyn FnMut(&Handle)) {
    visit(handle);
    for child in handle.children.borrow().iter() {
        walk(child, visit);
    }
}

/// Number of `tag` elements in the fragment.
pub fn count_elements(fragment: &str, tag: &str) -> usize {
    let dom = parse_html(fragment);
    let mut count = 0;
    walk(&dom.document, &mut |node| {
        if let NodeData::Element { name, .. } = &node.data {
            if &*name.local == tag {
                count += 1;
            }
        }
    });
    count
}

/// Text of every `tag` element, in document order.
pub fn element_texts(fragment: &str, tag: &str) -> Vec<String> {
    let dom = parse_html(fragment);
    let mut texts = Vec::new();
    walk(&dom.document, &mut |node| {
        if let NodeData::Element { name, .. } = &node.data {
            if &*name.local == tag {
                texts.push(node_text(node));
            }
        }
    });
    texts
}

/// Number of `child` elements directly under each `parent` element.
pub fn child_counts(fragment: &str, parent: &str, child: &str) -> Vec<usize> {
    let dom = parse_html(fragment);
    let mut counts = Vec::new();
    walk(&dom.document, &mut |node| {
        if is_element(node, parent) {
            let children = node.children.borrow();
            counts.push(children.iter().filter(|c| is_element(c, child)).count());
        }
    });
    counts
}

/// Concatenated, decoded text of the whole fragment.
pub fn text_content(fragment: &str) -> String {
    node_text(&parse_html(fragment).document)
}

fn is_element(node: &Handle, tag: &str) -> bool {
    matches!(&node.data, NodeData::Element { name, .. } if &*name.local == tag)
}

fn node_text(handle: &Handle) -> String {
    let mut text = String::new();
    walk(handle, &mut |node| {
        if let NodeData::Text { contents } = &node.data {
            text.push_str(&contents.borrow());
        }
    });
    text
}
