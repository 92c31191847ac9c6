/// Blockquote line syntax.
pub struct BlockQuote;

impl BlockQuote {
    pub const PREFIX: char = '>';
    pub const MARKER: &'static str = "> ";

    /// Returns the byte offset where quoted content starts in an
    /// already-trimmed line: after `> `, or after a lone `>`.
    ///
    /// `>text` (no space) is not a quote line.
    pub fn strip_marker(trimmed: &str) -> Option<usize> {
        if trimmed.starts_with(Self::MARKER) {
            Some(Self::MARKER.len())
        } else if trimmed.len() == 1 && trimmed.starts_with(Self::PREFIX) {
            Some(1)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_no_quote() {
        assert_eq!(BlockQuote::strip_marker("hello"), None);
    }

    #[test]
    fn strip_single_quote() {
        assert_eq!(BlockQuote::strip_marker("> hello"), Some(2));
    }

    #[test]
    fn lone_marker_is_empty_quote_line() {
        assert_eq!(BlockQuote::strip_marker(">"), Some(1));
    }

    #[test]
    fn marker_without_space_is_not_a_quote() {
        assert_eq!(BlockQuote::strip_marker(">hello"), None);
        assert_eq!(BlockQuote::strip_marker(">> nested"), None);
    }

    #[test]
    fn spaced_nesting_keeps_inner_marker() {
        let line = "> > nested";
        let at = BlockQuote::strip_marker(line).unwrap();
        assert_eq!(&line[at..], "> nested");
    }
}
