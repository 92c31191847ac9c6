/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the fallback when no other rule
/// matches a chunk. Their lines are trimmed and joined with one space.
pub struct Paragraph;

impl Paragraph {
    pub const LINE_JOIN: &'static str = " ";

    pub fn join<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
        lines
            .into_iter()
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(Self::LINE_JOIN)
    }
}
