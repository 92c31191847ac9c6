use serde::{Deserialize, Serialize};

use super::{inline::InlineText, table::Table};
use crate::error::EngineError;

/// A top-level structural unit of a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(InlineText),
    Header {
        level: u8,
        text: InlineText,
    },
    UnorderedList(Vec<InlineText>),
    OrderedList(Vec<InlineText>),
    /// Fenced code; `code` is the verbatim interior and is never inline parsed.
    CodeBlock {
        language: Option<String>,
        code: String,
    },
    Blockquote(InlineText),
    Table(Table),
}

impl Block {
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Block::Table(table) => Some(table),
            _ => None,
        }
    }
}

/// A parsed markdown document: blocks in reading order.
///
/// Encodes as a bare array of blocks. Decoding also accepts the wrapped
/// `{"blocks": [...]}` shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "Vec<Block>", from = "DocumentRepr")]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Parses markdown text. Never fails; see [`crate::parse`].
    pub fn parse(markdown: &str) -> Self {
        crate::parse(markdown)
    }

    /// Parses markdown from raw bytes, rejecting invalid UTF-8.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, EngineError> {
        crate::parse_bytes(bytes)
    }

    /// Renders the document back to canonical markdown.
    pub fn to_markdown(&self) -> String {
        crate::serialize(self)
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

impl From<Vec<Block>> for Document {
    fn from(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }
}

impl From<Document> for Vec<Block> {
    fn from(doc: Document) -> Self {
        doc.blocks
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DocumentRepr {
    Bare(Vec<Block>),
    Wrapped { blocks: Vec<Block> },
}

impl From<DocumentRepr> for Document {
    fn from(repr: DocumentRepr) -> Self {
        match repr {
            DocumentRepr::Bare(blocks) | DocumentRepr::Wrapped { blocks } => Self { blocks },
        }
    }
}
