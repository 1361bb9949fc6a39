//! Lookup of formats by name or file extension
//!
//! The CLI never names `NotesFormat` or `HtmlFormat` directly when converting; it asks the
//! registry for whatever was registered under `--from` / `--to`. Registering a second format
//! under an existing name swaps it out, which is how configured modes and escaping replace the
//! stock instances.

use crate::error::FormatError;
use crate::format::Format;
use crate::formats::html::HtmlFormat;
use crate::formats::notes::NotesFormat;
use crate::ir::nodes::Document;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use tracing::debug;

/// Named set of formats, kept in name order.
///
/// ```ignore
/// let mut registry = FormatRegistry::default();
/// registry.register(NotesFormat::new(Mode::LineOriented));
///
/// let doc = registry.parse("- a\n- b", "notes")?;
/// let html = registry.serialize(&doc, "html")?;
/// ```
pub struct FormatRegistry {
    formats: BTreeMap<String, Box<dyn Format>>,
}

#[derive(Clone, Copy)]
enum Direction {
    Parse,
    Serialize,
}

impl FormatRegistry {
    /// An empty registry. Most callers want [`FormatRegistry::with_defaults`].
    pub fn new() -> Self {
        FormatRegistry {
            formats: BTreeMap::new(),
        }
    }

    /// The stock notes (auto mode) and html (escaping) formats.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(NotesFormat::default());
        registry.register(HtmlFormat::default());
        registry
    }

    /// Adds `format` under its own name, replacing any previous holder of that name.
    pub fn register<F: Format + 'static>(&mut self, format: F) {
        let name = format.name().to_string();
        let replaced = self.formats.insert(name.clone(), Box::new(format)).is_some();
        debug!(format = %name, replaced, "registered format");
    }

    pub fn get(&self, name: &str) -> Result<&dyn Format, FormatError> {
        match self.formats.get(name) {
            Some(format) => Ok(format.as_ref()),
            None => Err(FormatError::FormatNotFound(name.to_string())),
        }
    }

    pub fn has(&self, name: &str) -> bool {
        self.formats.contains_key(name)
    }

    /// Registered names, alphabetically.
    pub fn list_formats(&self) -> Vec<String> {
        self.formats.keys().cloned().collect()
    }

    /// Maps `chapter.notes` to `notes`, `page.html` to `html`. Extensions compare
    /// case-insensitively; a path without a known extension gives `None`.
    pub fn detect_format_from_filename(&self, filename: &str) -> Option<String> {
        let extension = Path::new(filename).extension()?.to_str()?.to_ascii_lowercase();
        self.formats
            .iter()
            .find(|(_, format)| format.file_extensions().contains(&extension.as_str()))
            .map(|(name, _)| name.clone())
    }

    pub fn parse(&self, source: &str, format: &str) -> Result<Document, FormatError> {
        self.capable(format, Direction::Parse)?.parse(source)
    }

    pub fn serialize(&self, doc: &Document, format: &str) -> Result<String, FormatError> {
        self.capable(format, Direction::Serialize)?.serialize(doc)
    }

    /// Like [`FormatRegistry::serialize`], passing `options` (the CLI's `--extra-*` pairs)
    /// through to the format.
    pub fn serialize_with_options(
        &self,
        doc: &Document,
        format: &str,
        options: &HashMap<String, String>,
    ) -> Result<String, FormatError> {
        self.capable(format, Direction::Serialize)?
            .serialize_with_options(doc, options)
    }

    fn capable(&self, name: &str, direction: Direction) -> Result<&dyn Format, FormatError> {
        let format = self.get(name)?;
        let (supported, verb) = match direction {
            Direction::Parse => (format.supports_parsing(), "parsing"),
            Direction::Serialize => (format.supports_serialization(), "serialization"),
        };
        if supported {
            Ok(format)
        } else {
            Err(FormatError::NotSupported(format!(
                "Format '{name}' does not support {verb}"
            )))
        }
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
