//! Study notes to HTML
//!
//!     This crate turns the free-text fields of a generated course (chapter study notes and the
//!     course summary) into small HTML fragments: paragraphs, bullet and numbered lists, bold
//!     spans, inline code and line breaks. Nothing more is recognized, and anything that does not
//!     parse is kept as literal text. Formatting never fails.
//!
//!     This is a pure lib, that is, it powers the studymark cli but is shell agnostic: no code
//!     here prints or touches the filesystem.
//!
//! Architecture
//!
//!     Formatting is a two stage pipeline, tokenize then render:
//!
//!     raw text ─(formats::notes)→ [FlatBlock] ─(common::flat_to_nested)→ Document
//!              ─(common::nested_to_flat)→ [Event] ─(formats::html)→ fragment
//!
//!     The notes parser only classifies lines and tokenizes inline spans. Grouping adjacent list
//!     items into one list (never across list kinds) lives in common, as does flattening the tree
//!     back into events for serializers. The HTML serializer is the only place that knows about
//!     tags and escaping.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── format.rs               # Format trait definition
//!     ├── registry.rs             # FormatRegistry for discovery and selection
//!     ├── formatter.rs            # Formatter, the notes → HTML entry point
//!     ├── course.rs               # Course records and reading order
//!     ├── formats
//!     │   ├── notes               # Mode detection, line/inline parsing, notes serializer
//!     │   └── html                # HTML fragment serializer
//!     ├── ir                      # Intermediate Representation
//!     └── common                  # Grouping and flattening
//!
//! Modes
//!
//!     Notes come in two shapes. Paragraph-aware mode splits on blank lines and wraps each
//!     block in a paragraph; line-oriented mode treats every line on its own and joins text lines
//!     with breaks. `Mode::Auto` picks paragraph-aware exactly when the text holds a blank line
//!     (see [`detect_mode`]).
//!
//! Escaping
//!
//!     Literal text is HTML-escaped by default before tags are inserted, so model output can't
//!     inject markup into a page. Trusted sources opt out with [`Formatter::trusted`].
//!
//! Testing
//!     tests
//!     └── <area>
//!         ├── <testname>.rs
//!         └── fixtures
//!
//!     Note that rust does not by default discover tests in subdirectories, so these are
//!     included from tests/lib.rs.
//!
pub mod course;
pub mod error;
pub mod format;
pub mod formats;
pub mod formatter;
pub mod registry;

pub mod common;
pub mod ir;

pub use course::{Chapter, Course, ReadingOptions};
pub use error::FormatError;
pub use format::Format;
pub use formats::{detect_mode, Mode};
pub use formatter::{format_notes, Formatter};
pub use registry::FormatRegistry;
