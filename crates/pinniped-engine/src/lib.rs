//! Markdown document engine: parse markdown into a typed [`Document`],
//! serialize it back, and address cells inside its tables.
//!
//! Every operation is a pure function of its inputs, so all of them are
//! safe to call from any number of threads at once.

pub mod codec;
pub mod error;
pub mod io;
pub mod models;
pub mod parsing;
pub mod serialize;
pub mod table;

use xi_rope::Rope;

// Re-export key types for easier usage
pub use error::{EngineError, InvalidPosition};
pub use io::*;
pub use models::{
    Block, CellPosition, Direction, Document, InlineElement, InlineText, Table, is_separator_row,
};

/// Parses markdown text. Never fails: anything unrecognised becomes a
/// paragraph of plain text.
pub fn parse(markdown: &str) -> Document {
    let rope = Rope::from(markdown);
    let doc = parsing::parse_document(&rope);
    log::debug!("parsed {} bytes into {} blocks", markdown.len(), doc.len());
    doc
}

/// Parses markdown from raw bytes; invalid UTF-8 is a boundary decode error.
pub fn parse_bytes(bytes: &[u8]) -> Result<Document, EngineError> {
    let text = std::str::from_utf8(bytes).map_err(|e| EngineError::decode(e.to_string()))?;
    Ok(parse(text))
}

/// Renders a document as canonical markdown.
pub fn serialize(doc: &Document) -> String {
    serialize::serialize(doc)
}

/// Moves a table cursor one step. See [`table::navigate`].
pub fn navigate_table(
    doc: &Document,
    block_index: usize,
    row: usize,
    col: usize,
    direction: Direction,
) -> Result<CellPosition, EngineError> {
    table::navigate(doc, block_index, row, col, direction)
}

/// Looks up the text of one logical table cell.
pub fn get_table_cell(
    doc: &Document,
    block_index: usize,
    row: usize,
    col: usize,
) -> Result<&str, EngineError> {
    table::get_cell(doc, block_index, row, col)
}
