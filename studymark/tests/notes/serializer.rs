//! Notes → notes conversion produces canonical markup.

use studymark::format::Format;
use studymark::formats::notes::{NotesFormat, Mode};
use studymark::FormatRegistry;

fn normalize(source: &str) -> String {
    let registry = FormatRegistry::default();
    let doc = registry.parse(source, "notes").unwrap();
    registry.serialize(&doc, "notes").unwrap()
}

#[test]
fn test_lists_are_renumbered_and_separated() {
    let output = normalize("Intro\n\n3. c\n7. d\n\n- x\n\n- y");

    assert_eq!(output, "Intro\n\n1. c\n2. d\n\n- x\n- y\n");
}

#[test]
fn test_inline_spans_round_trip() {
    let source = "Use **bold `code`** and `raw`";
    assert_eq!(normalize(source), format!("{source}\n"));
}

#[test]
fn test_line_groups_come_back_as_lines() {
    let format = NotesFormat::new(Mode::LineOriented);
    let doc = format.parse("one\ntwo\n- item").unwrap();

    assert_eq!(format.serialize(&doc).unwrap(), "one\ntwo\n\n- item\n");
}

#[test]
fn test_normalized_notes_format_the_same() {
    let source = "Intro\n\n- a\n- b\n\n1. one\n2. two";
    let normalized = normalize(source);

    assert_eq!(
        studymark::format_notes(&normalized),
        studymark::format_notes(source)
    );
}

#[test]
fn test_empty_document_serializes_to_nothing() {
    assert_eq!(normalize(""), "");
}
