//! Export tests for the HTML format (notes → HTML)
//!
//! These tests check the fragment structure by parsing the output, plus a few
//! exact snapshots of whole fixtures.

use crate::common::{child_counts, count_elements, element_texts, load_fixture};
use insta::assert_snapshot;
use studymark::format::Format;
use studymark::formats::html::HtmlFormat;
use studymark::formats::notes::{NotesFormat, Mode};
use studymark::{format_notes, Formatter};

// ============================================================================
// BASIC ELEMENT TESTS
// ============================================================================

#[test]
fn test_empty_input() {
    assert_eq!(format_notes(""), "");
}

#[test]
fn test_single_bold_span() {
    let html = format_notes("**bold**");

    assert_eq!(count_elements(&html, "strong"), 1);
    assert_eq!(element_texts(&html, "strong"), vec!["bold"]);
    assert!(!html.contains('*'));
}

#[test]
fn test_bullet_lines_share_one_list() {
    let html = Formatter::new(Mode::LineOriented).format("- a\n- b\n- c");

    assert_eq!(count_elements(&html, "ul"), 1);
    assert_eq!(child_counts(&html, "ul", "li"), vec![3]);
    assert_eq!(element_texts(&html, "li"), vec!["a", "b", "c"]);
}

#[test]
fn test_two_paragraphs() {
    let html = format_notes("Para one.\n\nPara two.");

    assert_eq!(count_elements(&html, "p"), 2);
    assert_eq!(element_texts(&html, "p"), vec!["Para one.", "Para two."]);
}

#[test]
fn test_code_span() {
    let html = format_notes("`code`");

    assert_eq!(count_elements(&html, "code"), 1);
    assert_eq!(element_texts(&html, "code"), vec!["code"]);
}

#[test]
fn test_unmatched_bold_stays_literal() {
    let html = format_notes("a ** b");

    assert_eq!(count_elements(&html, "strong"), 0);
    assert_eq!(html, "a ** b");
}

#[test]
fn test_plain_lines_become_breaks() {
    assert_eq!(
        Formatter::new(Mode::LineOriented).format("one\ntwo\nthree"),
        "one<br/>two<br/>three"
    );
    assert_eq!(
        Formatter::new(Mode::ParagraphAware).format("one\ntwo"),
        "<p>one\ntwo</p>"
    );
}

// ============================================================================
// LIST GROUPING
// ============================================================================

#[test]
fn test_blank_separated_items_share_one_list() {
    let html = format_notes("- a\n\n- b\n\n- c");

    assert_eq!(html, "<ul><li>a</li><li>b</li><li>c</li></ul>");
}

#[test]
fn test_list_kinds_never_merge() {
    let html = format_notes("- a\n1. b\n- c");

    assert_eq!(count_elements(&html, "ul"), 2);
    assert_eq!(count_elements(&html, "ol"), 1);
    assert_eq!(
        html,
        "<ul><li>a</li></ul><ol><li>b</li></ol><ul><li>c</li></ul>"
    );
}

#[test]
fn test_no_adjacent_close_and_open_of_same_list() {
    for source in [
        "- a\n- b\n\n- c",
        "1. a\n\n2. b\n3. c",
        "- a\n\n- b\n\ntext\n\n- c",
    ] {
        let html = format_notes(source);
        assert!(!html.contains("</ul><ul>"), "{source:?} → {html}");
        assert!(!html.contains("</ol><ol>"), "{source:?} → {html}");
    }
}

#[test]
fn test_paragraph_splits_lists() {
    let html = format_notes("- a\n\ntext\n\n- b");

    assert_eq!(count_elements(&html, "ul"), 2);
    assert_eq!(html, "<ul><li>a</li></ul><p>text</p><ul><li>b</li></ul>");
}

#[test]
fn test_bold_inside_list_item() {
    let html = format_notes("- **x** marks it");

    assert_eq!(html, "<ul><li><strong>x</strong> marks it</li></ul>");
}

// ============================================================================
// FIXTURES
// ============================================================================

#[test]
fn test_paragraph_fixture() {
    let html = format_notes(&load_fixture("notes_paragraphs.txt"));

    assert_snapshot!(html, @"<p>Ownership is the core idea of <strong>Rust</strong>.</p><p>Key rules:</p><ul><li>Each value has one owner</li><li>Ownership can be <code>moved</code></li></ul><ol><li>Read chapter 4</li><li>Write a small program</li></ol><p>Use <code>clone()</code> only when you need <strong>two <code>owned</code> copies</strong>.</p>");
}

#[test]
fn test_line_fixture() {
    let html = format_notes(&load_fixture("notes_lines.txt"));

    assert_snapshot!(html, @"Summary of the week<ul><li>Ownership</li><li>Borrowing</li></ul><ol><li>Practice</li></ol>Remember: <strong>lifetimes</strong> &amp; <code>&amp;mut</code>");
}

#[test]
fn test_registry_path_matches_formatter() {
    let source = load_fixture("notes_paragraphs.txt");
    let doc = NotesFormat::default().parse(&source).unwrap();
    let html = HtmlFormat::default().serialize(&doc).unwrap();

    assert_eq!(html, format_notes(&source));
}
