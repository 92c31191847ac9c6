use crate::parsing::rope::span::Span;

use super::{content::ContentLine, kinds::FenceKind};

/// The kind detected for a raw block candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawBlockKind {
    Heading {
        level: u8,
    },
    BlockQuote,
    UnorderedList,
    OrderedList,
    FencedCode {
        kind: FenceKind,
        language: Option<String>,
        /// False when the input ended before a closing fence.
        closed: bool,
    },
    Table,
    Paragraph,
}

/// A segmented block region that has not been inline parsed yet.
#[derive(Debug, Clone)]
pub struct RawBlock {
    pub kind: RawBlockKind,
    /// Source span from the first line's start to the last line's end,
    /// excluding the final line ending.
    pub span: Span,
    /// One entry per content line. For fenced code these are the interior
    /// lines only.
    pub lines: Vec<ContentLine>,
}
