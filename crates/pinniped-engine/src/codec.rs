//! # Boundary Codec
//!
//! JSON encoding for values crossing the binding boundary. Every variant is
//! encoded under a single key named after it:
//!
//! ```json
//! [{"Header": {"level": 1, "text": [{"Text": "Hello"}]}},
//!  {"Paragraph": [{"Text": "World"}]}]
//! ```
//!
//! Errors encode as `{"error": message}`, positions as
//! `{"row", "col", "valid"}` and cell lookups as `{"content"}`.

use serde::Serialize;
use serde_json::json;

use crate::{
    error::EngineError,
    models::{CellPosition, Direction, Document},
};

#[derive(Serialize)]
struct CellContent<'a> {
    content: &'a str,
}

pub fn encode_document(doc: &Document) -> String {
    encode(doc)
}

/// Decodes a document from either the bare array or the wrapped
/// `{"blocks": [...]}` shape.
pub fn decode_document(json: &str) -> Result<Document, EngineError> {
    serde_json::from_str(json).map_err(|e| EngineError::decode(e.to_string()))
}

pub fn encode_position(position: &CellPosition) -> String {
    encode(position)
}

pub fn encode_cell(content: &str) -> String {
    encode(&CellContent { content })
}

pub fn encode_error(err: &impl std::fmt::Display) -> String {
    json!({ "error": err.to_string() }).to_string()
}

/// Like [`encode_document`] but indented for people to read.
pub fn encode_document_pretty(doc: &Document) -> String {
    serde_json::to_string_pretty(doc).unwrap_or_else(|e| encode_error(&e))
}

fn encode<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| encode_error(&e))
}

impl Direction {
    /// Numeric direction codes used by the C boundary.
    pub fn from_code(code: i32) -> Result<Self, EngineError> {
        match code {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Down),
            2 => Ok(Direction::Left),
            3 => Ok(Direction::Right),
            other => Err(EngineError::decode(format!(
                "unknown direction code {other}"
            ))),
        }
    }
}
