use crate::parsing::rope::{lines::LineRef, span::Span};

use super::kinds::{CodeFence, FenceSig, Heading, HeadingSig};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of block parsing: each line is classified independently
/// without reference to surrounding context.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// Full byte span of this line, including its line ending.
    pub line: Span,
    /// Byte span without the line ending.
    pub content: Span,
    /// Line text without the line ending.
    pub text: String,
    /// Bytes of leading whitespace.
    pub indent: usize,
    /// Whether the line is blank (whitespace only).
    pub is_blank: bool,
    /// If the line looks like a fence opener/closer.
    pub fence_sig: Option<FenceSig>,
    /// If the line is an ATX heading.
    pub heading: Option<HeadingSig>,
}

impl LineClass {
    /// The line with surrounding whitespace removed.
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Byte span of [`LineClass::trimmed`].
    pub fn trimmed_span(&self) -> Span {
        let start = self.content.start + self.indent;
        let end = self.content.start + self.text.trim_end().len();
        Span {
            start,
            end: end.max(start),
        }
    }
}

/// Classifies individual lines for the block segmentation phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    pub fn classify(&self, lr: &LineRef) -> LineClass {
        let indent = lr.text.len() - lr.text.trim_start().len();
        let is_blank = lr.text.trim().is_empty();

        LineClass {
            line: lr.span,
            content: lr.content,
            text: lr.text.clone(),
            indent,
            is_blank,
            fence_sig: CodeFence::sig(&lr.text),
            heading: if is_blank {
                None
            } else {
                Heading::sig(lr.text.trim())
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::blocks::kinds::FenceKind;

    fn classify(text: &str) -> LineClass {
        let lr = LineRef {
            span: Span::new(10, 10 + text.len() + 1),
            content: Span::new(10, 10 + text.len()),
            text: text.to_string(),
        };
        MarkdownLineClassifier.classify(&lr)
    }

    #[test]
    fn blank_line() {
        let c = classify("   \t");
        assert!(c.is_blank);
        assert!(c.heading.is_none());
        assert_eq!(c.trimmed_span(), Span::new(14, 14));
    }

    #[test]
    fn indented_heading() {
        let c = classify("  ## Title  ");
        assert_eq!(c.heading.map(|h| h.level), Some(2));
        assert_eq!(c.indent, 2);
        assert_eq!(c.trimmed(), "## Title");
        assert_eq!(c.trimmed_span(), Span::new(12, 20));
    }

    #[test]
    fn fence_line() {
        let c = classify("```python");
        assert_eq!(c.fence_sig.map(|s| s.kind), Some(FenceKind::Backticks));
        assert!(c.heading.is_none());
    }
}
