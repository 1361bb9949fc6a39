//! The fragment is injected into a page as-is, so literal text must not be
//! able to produce markup unless the formatter is told to trust it.

use crate::common::{count_elements, text_content};
use studymark::{format_notes, Formatter};

#[test]
fn test_script_tags_are_escaped() {
    let html = format_notes("<script>alert(1)</script>");

    assert_eq!(html, "&lt;script&gt;alert(1)&lt;/script&gt;");
    assert_eq!(count_elements(&html, "script"), 0);
    assert_eq!(text_content(&html), "<script>alert(1)</script>");
}

#[test]
fn test_markup_inside_spans_is_escaped() {
    let html = format_notes("**<b>** and `<i>`");

    assert_eq!(
        html,
        "<strong>&lt;b&gt;</strong> and <code>&lt;i&gt;</code>"
    );
    assert_eq!(count_elements(&html, "b"), 0);
    assert_eq!(count_elements(&html, "i"), 0);
}

#[test]
fn test_ampersands_are_escaped_once() {
    assert_eq!(format_notes("Tom & Jerry"), "Tom &amp; Jerry");
    assert_eq!(format_notes("&amp;"), "&amp;amp;");
}

#[test]
fn test_quotes_are_left_alone() {
    assert_eq!(format_notes("say \"hi\" it's"), "say \"hi\" it's");
}

#[test]
fn test_trusted_formatter_keeps_markup() {
    let html = Formatter::default()
        .trusted()
        .format("Watch <em>this</em>\n- <a href=\"#\">link</a>");

    assert_eq!(count_elements(&html, "em"), 1);
    assert_eq!(count_elements(&html, "a"), 1);
    assert_eq!(
        html,
        "Watch <em>this</em><ul><li><a href=\"#\">link</a></li></ul>"
    );
}
