use crate::models::InlineElement;

/// Star-delimited emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Bold,
    Italic,
}

impl Emphasis {
    pub const STAR: u8 = b'*';

    pub fn delimiter(self) -> &'static str {
        match self {
            Emphasis::Bold => "**",
            Emphasis::Italic => "*",
        }
    }

    pub fn wrap(self, children: Vec<InlineElement>) -> InlineElement {
        match self {
            Emphasis::Bold => InlineElement::Bold(children),
            Emphasis::Italic => InlineElement::Italic(children),
        }
    }
}
