//! Course records
//!
//! A generated course arrives as one JSON document: a title, a description,
//! chapters with their study notes and a closing learning path summary. The
//! free-text fields (`study_notes`, `course_summary`) are what [`Formatter`]
//! turns into HTML; everything else is carried through untouched.
//!
//! [`Course::reading_order`] reproduces how a course is presented: a
//! synthesized "Course Overview" chapter first, the generated chapters, then a
//! synthesized "Course Summary" chapter.

use crate::error::FormatError;
use crate::formatter::Formatter;
use serde::{Deserialize, Serialize};
use tracing::debug;

pub const OVERVIEW_TITLE: &str = "Course Overview";
pub const SUMMARY_TITLE: &str = "Course Summary";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Course {
    pub course_title: String,
    pub description: String,
    pub difficulty: Option<String>,
    pub category: Option<String>,
    pub chapters: Vec<Chapter>,
    pub learning_path_summary: Option<LearningPathSummary>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chapter {
    pub chapter_number: u32,
    pub chapter_title: String,
    pub learning_objectives: Vec<String>,
    pub key_concepts: Vec<KeyConcept>,
    pub practical_applications: Vec<String>,
    pub study_notes: Option<String>,
    pub videos: Option<VideoList>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConcept {
    pub title: String,
    pub explanation: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoList {
    pub videos: Vec<Video>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Video {
    pub video_id: String,
    pub video_title: String,
    pub channel_name: String,
    pub video_link: String,
    pub thumbnail: String,
}

/// Closing section of a course
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningPathSummary {
    pub overview: Option<String>,
    /// Free text rendered on the summary page
    pub course_summary: Option<String>,
    pub next_steps: Vec<String>,
    pub recommended_study_links: Vec<String>,
}

/// Which synthesized chapters [`Course::reading_order_with`] adds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingOptions {
    pub include_overview: bool,
    pub include_summary: bool,
}

impl Default for ReadingOptions {
    fn default() -> Self {
        Self {
            include_overview: true,
            include_summary: true,
        }
    }
}

impl Course {
    /// Decode a course from its JSON document
    pub fn from_json(source: &str) -> Result<Self, FormatError> {
        let course: Course =
            serde_json::from_str(source).map_err(|e| FormatError::ParseError(e.to_string()))?;
        debug!(
            title = %course.course_title,
            chapters = course.chapters.len(),
            "decoded course"
        );
        Ok(course)
    }

    pub fn to_json(&self) -> Result<String, FormatError> {
        serde_json::to_string_pretty(self).map_err(|e| FormatError::SerializationError(e.to_string()))
    }

    /// Chapters as presented, with both synthesized chapters
    pub fn reading_order(&self) -> Vec<Chapter> {
        self.reading_order_with(ReadingOptions::default())
    }

    pub fn reading_order_with(&self, options: ReadingOptions) -> Vec<Chapter> {
        let mut chapters = Vec::with_capacity(self.chapters.len() + 2);

        if options.include_overview {
            chapters.push(self.overview_chapter());
        }
        chapters.extend(self.chapters.iter().cloned());
        if options.include_summary {
            chapters.push(self.summary_chapter());
        }

        chapters
    }

    /// Objectives and key concepts come from the first chapter.
    fn overview_chapter(&self) -> Chapter {
        let first = self.chapters.first();
        Chapter {
            chapter_number: 0,
            chapter_title: OVERVIEW_TITLE.to_string(),
            learning_objectives: first
                .map(|c| c.learning_objectives.clone())
                .unwrap_or_default(),
            key_concepts: first.map(|c| c.key_concepts.clone()).unwrap_or_default(),
            study_notes: Some(String::new()),
            ..Chapter::default()
        }
    }

    fn summary_chapter(&self) -> Chapter {
        let summary = self.learning_path_summary.as_ref();
        Chapter {
            chapter_number: self.chapters.len() as u32 + 1,
            chapter_title: SUMMARY_TITLE.to_string(),
            practical_applications: summary.map(|s| s.next_steps.clone()).unwrap_or_default(),
            study_notes: Some(
                summary
                    .and_then(|s| s.overview.clone())
                    .unwrap_or_default(),
            ),
            ..Chapter::default()
        }
    }

    pub fn summary_text(&self) -> Option<&str> {
        self.learning_path_summary
            .as_ref()
            .and_then(|s| s.course_summary.as_deref())
    }

    /// The course summary as an HTML fragment (empty when absent)
    pub fn summary_html(&self, formatter: &Formatter) -> String {
        formatter.format_opt(self.summary_text())
    }

    /// Case-insensitive match against the title and description.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.course_title.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

impl Chapter {
    pub fn notes_text(&self) -> Option<&str> {
        self.study_notes.as_deref()
    }

    pub fn notes_html(&self, formatter: &Formatter) -> String {
        formatter.format_opt(self.notes_text())
    }

    pub fn display_title(&self) -> String {
        format!("{}. {}", self.chapter_number, self.chapter_title)
    }

    pub fn videos(&self) -> &[Video] {
        self.videos
            .as_ref()
            .map(|list| list.videos.as_slice())
            .unwrap_or_default()
    }
}
