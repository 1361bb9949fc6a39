//! Mode detection and the shape each mode gives the same text.

use crate::common::{count_elements, load_fixture};
use studymark::formats::notes::{parse_notes, Mode};
use studymark::ir::nodes::DocNode;
use studymark::{detect_mode, format_notes, Formatter};

#[test]
fn test_detection_follows_blank_lines() {
    assert_eq!(detect_mode("a\n\nb"), Mode::ParagraphAware);
    assert_eq!(detect_mode("a\n \t \nb"), Mode::ParagraphAware);
    assert_eq!(detect_mode("a\r\n\r\nb"), Mode::ParagraphAware);
    assert_eq!(detect_mode("a\nb"), Mode::LineOriented);
    assert_eq!(detect_mode("single line"), Mode::LineOriented);
    assert_eq!(detect_mode(&load_fixture("notes_paragraphs.txt")), Mode::ParagraphAware);
    assert_eq!(detect_mode(&load_fixture("notes_lines.txt")), Mode::LineOriented);
}

#[test]
fn test_resolve_keeps_concrete_modes() {
    assert_eq!(Mode::Auto.resolve("a\n\nb"), Mode::ParagraphAware);
    assert_eq!(Mode::LineOriented.resolve("a\n\nb"), Mode::LineOriented);
    assert_eq!(Mode::ParagraphAware.resolve("a\nb"), Mode::ParagraphAware);
}

#[test]
fn test_mode_names_parse() {
    assert_eq!("auto".parse::<Mode>().unwrap(), Mode::Auto);
    assert_eq!("paragraph".parse::<Mode>().unwrap(), Mode::ParagraphAware);
    assert_eq!("line".parse::<Mode>().unwrap(), Mode::LineOriented);
    assert!("columns".parse::<Mode>().is_err());
    assert_eq!(Mode::LineOriented.to_string(), "line");
}

#[test]
fn test_same_text_in_both_modes() {
    let source = "Intro line\n- a\n- b";

    let lines = Formatter::new(Mode::LineOriented).format(source);
    assert_eq!(lines, "Intro line<ul><li>a</li><li>b</li></ul>");

    // Mixed block: list markers stay literal inside the paragraph
    let paragraphs = Formatter::new(Mode::ParagraphAware).format(source);
    assert_eq!(paragraphs, "<p>Intro line\n- a\n- b</p>");
    assert_eq!(count_elements(&paragraphs, "li"), 0);
}

#[test]
fn test_many_blank_lines_are_one_break() {
    assert_eq!(
        format_notes("one\n\n\n\n\ntwo"),
        "<p>one</p><p>two</p>"
    );
}

#[test]
fn test_whitespace_only_input() {
    assert_eq!(Formatter::new(Mode::ParagraphAware).format("  \n\n \t "), "");
    assert_eq!(format_notes("\n\n"), "");
}

#[test]
fn test_crlf_input() {
    assert_eq!(
        format_notes("Para one.\r\n\r\nPara two.\r\n"),
        "<p>Para one.</p><p>Para two.</p>"
    );
    assert_eq!(format_notes("- a\r\n- b"), "<ul><li>a</li><li>b</li></ul>");
}

#[test]
fn test_line_mode_keeps_empty_lines_as_breaks() {
    let doc = parse_notes("a\n\nb", Mode::LineOriented);
    assert!(matches!(&doc.children[..], [DocNode::LineGroup(group)] if group.lines.len() == 3));
    assert_eq!(
        Formatter::new(Mode::LineOriented).format("a\n\nb"),
        "a<br/><br/>b"
    );
}

#[test]
fn test_spans_do_not_cross_lines() {
    assert_eq!(format_notes("**a\nb**"), "**a<br/>b**");
    assert_eq!(
        Formatter::new(Mode::ParagraphAware).format("`a\nb`"),
        "<p>`a\nb`</p>"
    );
}

#[test]
fn test_near_miss_list_lines_are_text() {
    assert_eq!(format_notes("-dash\n1.5 litres"), "-dash<br/>1.5 litres");
}
