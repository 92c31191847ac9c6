//! Per-line content projection for raw block candidates.
//!
//! Each line of a candidate keeps its marker prefix (`> `, `- `, `1. `,
//! `## `) separate from the text the block builder consumes.

use xi_rope::Rope;

use crate::parsing::rope::{slice::slice_to_string, span::Span};

/// A single line's content projection within a block.
///
/// # Invariants
///
/// - `prefix` and `content` are within `raw_line`
/// - `prefix.end <= content.start`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentLine {
    /// Physical line span in the rope, without the line ending.
    pub raw_line: Span,
    /// Indentation plus block marker on this line.
    pub prefix: Span,
    /// Remainder after the marker.
    pub content: Span,
}

impl ContentLine {
    /// A line whose whole text is content (fenced code interiors).
    pub fn verbatim(raw_line: Span) -> Self {
        Self {
            raw_line,
            prefix: Span::new(raw_line.start, raw_line.start),
            content: raw_line,
        }
    }
}

/// Slices each line's content and joins them with `sep`.
pub fn join_content(rope: &Rope, lines: &[ContentLine], sep: &str) -> String {
    lines
        .iter()
        .map(|line| slice_to_string(rope, line.content))
        .collect::<Vec<_>>()
        .join(sep)
}
