//! Shared configuration loader for the studymark toolchain.
//!
//! `defaults/studymark.default.toml` is embedded into every binary so that docs
//! and runtime behavior stay in sync. Applications layer user-specific files on
//! top of those defaults via [`Loader`] before deserializing into
//! [`StudymarkConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::Path;
use studymark::course::ReadingOptions;
use studymark::{Formatter, Mode};

const DEFAULT_TOML: &str = include_str!("../defaults/studymark.default.toml");

/// File picked up from the working directory when present.
pub const LOCAL_CONFIG_FILE: &str = "studymark.toml";

/// Top-level configuration consumed by studymark applications.
#[derive(Debug, Clone, Deserialize)]
pub struct StudymarkConfig {
    pub formatting: FormattingConfig,
    pub course: CourseConfig,
}

/// Mirrors the knobs exposed by [`Formatter`].
#[derive(Debug, Clone, Deserialize)]
pub struct FormattingConfig {
    pub mode: ModeSetting,
    pub escape_text: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    Auto,
    Paragraph,
    Line,
}

impl From<ModeSetting> for Mode {
    fn from(setting: ModeSetting) -> Self {
        match setting {
            ModeSetting::Auto => Mode::Auto,
            ModeSetting::Paragraph => Mode::ParagraphAware,
            ModeSetting::Line => Mode::LineOriented,
        }
    }
}

impl From<Mode> for ModeSetting {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Auto => ModeSetting::Auto,
            Mode::ParagraphAware => ModeSetting::Paragraph,
            Mode::LineOriented => ModeSetting::Line,
        }
    }
}

impl From<&FormattingConfig> for Formatter {
    fn from(config: &FormattingConfig) -> Self {
        Formatter::new(config.mode.into()).with_escape(config.escape_text)
    }
}

impl From<FormattingConfig> for Formatter {
    fn from(config: FormattingConfig) -> Self {
        Formatter::from(&config)
    }
}

/// Which synthesized chapters a course listing shows.
#[derive(Debug, Clone, Deserialize)]
pub struct CourseConfig {
    pub include_overview: bool,
    pub include_summary: bool,
}

impl From<&CourseConfig> for ReadingOptions {
    fn from(config: &CourseConfig) -> Self {
        ReadingOptions {
            include_overview: config.include_overview,
            include_summary: config.include_summary,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<StudymarkConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<StudymarkConfig, ConfigError> {
    Loader::new().build()
}
