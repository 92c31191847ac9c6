use xi_rope::Rope;

use super::span::Span;

/// A single source line with its byte spans.
#[derive(Debug, Clone)]
pub struct LineRef {
    /// Byte span of the whole line, including the line ending if present.
    pub span: Span,
    /// Byte span of the line without its `\n` / `\r\n` ending.
    pub content: Span,
    /// The line text without its line ending.
    pub text: String,
}

/// Iterates the rope's lines with their byte spans.
///
/// Uses `lines_raw` so the running offset accounts for line endings; the
/// endings themselves are stripped from `text` and `content`.
pub fn lines_with_spans(rope: &Rope) -> impl Iterator<Item = LineRef> + '_ {
    let mut offset = 0usize;
    rope.lines_raw(..).map(move |line| {
        let start = offset;
        offset += line.len();
        let text = line.trim_end_matches(['\n', '\r']).to_string();
        LineRef {
            span: Span { start, end: offset },
            content: Span {
                start,
                end: start + text.len(),
            },
            text,
        }
    })
}
