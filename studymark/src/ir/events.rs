//! Defines the flat event stream representation of a document.

use crate::ir::nodes::InlineContent;

/// Represents a single event in the document stream.
///
/// Serializers walk this flat sequence instead of the nested tree, so every
/// container produces a matching start/end pair.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    StartDocument,
    EndDocument,
    StartParagraph,
    EndParagraph,
    StartList { ordered: bool },
    EndList { ordered: bool },
    StartListItem,
    EndListItem,
    StartLineGroup,
    EndLineGroup,
    /// Separates two lines of a line group
    LineBreak,
    Inline(InlineContent),
}
