//! Format implementations
//!
//! This module contains all format implementations that convert between
//! the notes IR and various text representations.

pub mod html;
pub mod notes;

pub use html::{HtmlFormat, HtmlOptions};
pub use notes::{detect_mode, Mode, NotesFormat};
