use serde::{Deserialize, Serialize};

/// A styled span of inline content.
///
/// Bold and italic own their children, so an inline tree is a plain owned
/// hierarchy with no shared nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InlineElement {
    Text(String),
    Bold(Vec<InlineElement>),
    Italic(Vec<InlineElement>),
    /// Raw code span content; never parsed further.
    Code(String),
    /// `[text](url)`; the display text is kept verbatim.
    Link { text: String, url: String },
}

/// An ordered run of inline elements, e.g. the text of a paragraph.
///
/// Encodes as a bare array of elements. Decoding also accepts the wrapped
/// `{"elements": [...]}` shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<InlineElement>", from = "InlineTextRepr")]
pub struct InlineText {
    pub elements: Vec<InlineElement>,
}

impl InlineText {
    pub fn new(elements: Vec<InlineElement>) -> Self {
        Self { elements }
    }

    /// A single unstyled text element.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            elements: vec![InlineElement::Text(text.into())],
        }
    }
}

impl From<Vec<InlineElement>> for InlineText {
    fn from(elements: Vec<InlineElement>) -> Self {
        Self { elements }
    }
}

impl From<InlineText> for Vec<InlineElement> {
    fn from(text: InlineText) -> Self {
        text.elements
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InlineTextRepr {
    Bare(Vec<InlineElement>),
    Wrapped { elements: Vec<InlineElement> },
}

impl From<InlineTextRepr> for InlineText {
    fn from(repr: InlineTextRepr) -> Self {
        match repr {
            InlineTextRepr::Bare(elements) | InlineTextRepr::Wrapped { elements } => {
                Self { elements }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_constructor_wraps_single_text() {
        assert_eq!(
            InlineText::plain("x").elements,
            vec![InlineElement::Text("x".into())]
        );
    }
}
