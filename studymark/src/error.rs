//! Error types for format operations
//!
//! Formatting notes into HTML is total and never produces one of these. They
//! come from the surrounding plumbing: registry lookups, course record decoding
//! and option parsing.

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error while decoding an input document
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error while encoding an output document
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// An option was given a value it does not understand
    #[error("Invalid value '{value}' for option '{option}'")]
    InvalidOption { option: String, value: String },
}
