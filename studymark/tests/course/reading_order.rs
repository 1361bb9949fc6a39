//! Course records from a generated course fixture.

use crate::common::{count_elements, load_fixture};
use studymark::course::{Course, ReadingOptions, OVERVIEW_TITLE, SUMMARY_TITLE};
use studymark::{FormatError, Formatter};

fn course() -> Course {
    Course::from_json(&load_fixture("course.json")).expect("fixture to decode")
}

#[test]
fn test_fixture_decodes() {
    let course = course();

    assert_eq!(course.course_title, "Rust Ownership Fundamentals");
    assert_eq!(course.difficulty.as_deref(), Some("Beginner"));
    assert_eq!(course.chapters.len(), 2);
    assert_eq!(course.chapters[0].videos().len(), 1);
    assert_eq!(course.chapters[0].videos()[0].channel_name, "Rust Basics");
    assert!(course.chapters[1].videos().is_empty());

    let summary = course.learning_path_summary.as_ref().unwrap();
    assert_eq!(summary.next_steps.len(), 2);
    assert_eq!(summary.recommended_study_links.len(), 1);
}

#[test]
fn test_reading_order_titles() {
    let titles: Vec<String> = course()
        .reading_order()
        .iter()
        .map(|chapter| chapter.display_title())
        .collect();

    assert_eq!(
        titles,
        vec![
            format!("0. {OVERVIEW_TITLE}"),
            "1. Ownership".to_string(),
            "2. Borrowing".to_string(),
            format!("3. {SUMMARY_TITLE}"),
        ]
    );
}

#[test]
fn test_synthesized_chapters_borrow_content() {
    let course = course();
    let chapters = course.reading_order();

    let overview = &chapters[0];
    assert_eq!(overview.learning_objectives, course.chapters[0].learning_objectives);
    assert_eq!(overview.key_concepts, course.chapters[0].key_concepts);
    assert!(overview.practical_applications.is_empty());

    let summary = &chapters[3];
    assert_eq!(
        summary.practical_applications,
        vec!["Read about lifetimes", "Write a linked list"]
    );
    assert!(summary.learning_objectives.is_empty());
}

#[test]
fn test_reading_options_skip_synthesized_chapters() {
    let course = course();
    let chapters = course.reading_order_with(ReadingOptions {
        include_overview: false,
        ..ReadingOptions::default()
    });

    assert_eq!(chapters.len(), 3);
    assert_eq!(chapters[0].chapter_title, "Ownership");
    assert_eq!(chapters[2].chapter_title, SUMMARY_TITLE);
}

#[test]
fn test_chapter_notes_pick_their_own_mode() {
    let course = course();
    let formatter = Formatter::default();
    let chapters = course.reading_order();

    assert_eq!(chapters[0].notes_html(&formatter), "");
    assert_eq!(
        chapters[1].notes_html(&formatter),
        "<p>Every value has a single <strong>owner</strong>.</p>\
         <p>When the owner goes out of scope the value is dropped.</p>\
         <ul><li>Moves transfer ownership</li><li><code>Copy</code> types are duplicated</li></ul>"
    );
    assert_eq!(
        chapters[2].notes_html(&formatter),
        "References borrow a value\
         <ul><li><code>&amp;T</code> is shared</li><li><code>&amp;mut T</code> is exclusive</li></ul>\
         <ol><li>Borrow</li><li>Release</li></ol>"
    );
    assert_eq!(
        chapters[3].notes_html(&formatter),
        "You now know how <strong>ownership</strong> and borrowing fit together."
    );
}

#[test]
fn test_course_summary_html() {
    let html = course().summary_html(&Formatter::default());

    assert_eq!(count_elements(&html, "p"), 2);
    assert_eq!(count_elements(&html, "ol"), 1);
    assert_eq!(
        html,
        "<p>This course covered the ownership model.</p>\
         <ol><li>Ownership</li><li>Borrowing</li></ol>\
         <p>Keep practicing with <code>cargo</code>.</p>"
    );
}

#[test]
fn test_missing_summary_is_empty() {
    let course = Course::from_json(r#"{"course_title": "Empty"}"#).unwrap();

    assert_eq!(course.summary_text(), None);
    assert_eq!(course.summary_html(&Formatter::default()), "");
    assert_eq!(course.reading_order().len(), 2);
}

#[test]
fn test_search_matches_title_and_description() {
    let course = course();

    assert!(course.matches("ownership"));
    assert!(course.matches("LIFETIMES"));
    assert!(!course.matches("haskell"));
}

#[test]
fn test_invalid_course_reports_parse_error() {
    let err = Course::from_json(r#"{"chapters": "nope"}"#).unwrap_err();

    assert!(matches!(err, FormatError::ParseError(_)));
    assert!(err.to_string().starts_with("Parse error:"));
}
