//! Bindings for the pinniped markdown engine.
//!
//! Two surfaces over the same four engine operations:
//!
//! - UniFFI objects and records for the Kotlin and Swift apps
//! - a C ABI (`c_api`) that exchanges JSON through library-owned buffers

use pinniped_engine::{CellPosition, Direction, Document, EngineError, codec};

pub mod c_api;

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Decode error: {reason}")]
    DecodeError { reason: String },
    #[error("Invalid position: {reason}")]
    InvalidPosition { reason: String },
}

impl From<EngineError> for FfiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::BoundaryDecode { reason } => FfiError::DecodeError { reason },
            EngineError::InvalidPosition(pos) => FfiError::InvalidPosition {
                reason: pos.to_string(),
            },
        }
    }
}

// ============ Document Handle ============

/// A handle to a parsed markdown document.
///
/// The document is immutable, so the handle needs no lock and can be shared
/// across threads by the foreign side.
#[derive(uniffi::Object)]
pub struct DocumentHandle {
    inner: Document,
}

#[uniffi::export]
impl DocumentHandle {
    /// Parse markdown content. Never fails.
    #[uniffi::constructor]
    pub fn from_markdown(markdown: String) -> Self {
        Self {
            inner: pinniped_engine::parse(&markdown),
        }
    }

    /// Decode a document previously produced by `to_json`.
    #[uniffi::constructor]
    pub fn from_json(json: String) -> Result<Self, FfiError> {
        let inner = codec::decode_document(&json).inspect_err(|e| log::warn!("{e}"))?;
        Ok(Self { inner })
    }

    pub fn to_markdown(&self) -> String {
        pinniped_engine::serialize(&self.inner)
    }

    pub fn to_json(&self) -> String {
        codec::encode_document(&self.inner)
    }

    pub fn block_count(&self) -> u32 {
        u32::try_from(self.inner.len()).unwrap_or(u32::MAX)
    }

    /// Move a table cursor. Leaving the grid is reported through
    /// `valid == false`, not as an error.
    pub fn navigate_table(
        &self,
        block_index: u32,
        row: u32,
        col: u32,
        direction: NavDirection,
    ) -> Result<CellPositionDto, FfiError> {
        let position = pinniped_engine::navigate_table(
            &self.inner,
            block_index as usize,
            row as usize,
            col as usize,
            direction.into(),
        )?;
        Ok(CellPositionDto::from_engine(position))
    }

    pub fn get_table_cell(&self, block_index: u32, row: u32, col: u32) -> Result<String, FfiError> {
        let cell = pinniped_engine::get_table_cell(
            &self.inner,
            block_index as usize,
            row as usize,
            col as usize,
        )?;
        Ok(cell.to_string())
    }
}

// ============ DTOs ============

/// A logical table coordinate and whether it is addressable.
#[derive(Debug, PartialEq, Eq, uniffi::Record)]
pub struct CellPositionDto {
    pub row: u32,
    pub col: u32,
    pub valid: bool,
}

impl CellPositionDto {
    fn from_engine(position: CellPosition) -> Self {
        Self {
            row: u32::try_from(position.row).unwrap_or(u32::MAX),
            col: u32::try_from(position.col).unwrap_or(u32::MAX),
            valid: position.valid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, uniffi::Enum)]
pub enum NavDirection {
    Up,
    Down,
    Left,
    Right,
}

impl From<NavDirection> for Direction {
    fn from(direction: NavDirection) -> Self {
        match direction {
            NavDirection::Up => Direction::Up,
            NavDirection::Down => Direction::Down,
            NavDirection::Left => Direction::Left,
            NavDirection::Right => Direction::Right,
        }
    }
}

// ============ Standalone Functions ============

/// Parse markdown straight to its JSON encoding.
#[uniffi::export]
pub fn parse_markdown_json(markdown: String) -> String {
    codec::encode_document(&pinniped_engine::parse(&markdown))
}

/// Render a JSON-encoded document back to markdown.
#[uniffi::export]
pub fn render_markdown_json(json: String) -> Result<String, FfiError> {
    let doc = codec::decode_document(&json).inspect_err(|e| log::warn!("{e}"))?;
    Ok(pinniped_engine::serialize(&doc))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const TABLE_DOC: &str = "# Stock\n\n| Item | Qty |\n|---|---|\n| Apples | 3 |";

    #[test]
    fn test_document_round_trip() {
        let content = "# Hello World\n\n- Item 1\n- Item 2";
        let doc = DocumentHandle::from_markdown(content.to_string());
        assert_eq!(doc.to_markdown(), content);
        assert_eq!(doc.block_count(), 2);
    }

    #[test]
    fn test_json_handle_round_trip() {
        let doc = DocumentHandle::from_markdown(TABLE_DOC.to_string());
        let copy = DocumentHandle::from_json(doc.to_json()).unwrap();
        assert_eq!(copy.to_markdown(), doc.to_markdown());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = DocumentHandle::from_json("not json".to_string()).err().unwrap();
        assert!(matches!(err, FfiError::DecodeError { .. }));
    }

    #[test]
    fn test_navigate_and_get_cell() {
        let doc = DocumentHandle::from_markdown(TABLE_DOC.to_string());
        assert_eq!(
            doc.navigate_table(1, 0, 0, NavDirection::Down).unwrap(),
            CellPositionDto {
                row: 1,
                col: 0,
                valid: true
            }
        );
        assert_eq!(
            doc.navigate_table(1, 1, 0, NavDirection::Down).unwrap(),
            CellPositionDto {
                row: 1,
                col: 0,
                valid: false
            }
        );
        assert_eq!(doc.get_table_cell(1, 1, 0).unwrap(), "Apples");
    }

    #[test]
    fn test_invalid_position_errors() {
        let doc = DocumentHandle::from_markdown(TABLE_DOC.to_string());
        assert!(matches!(
            doc.navigate_table(0, 0, 0, NavDirection::Up),
            Err(FfiError::InvalidPosition { .. })
        ));
        assert!(matches!(
            doc.get_table_cell(1, 0, 5),
            Err(FfiError::InvalidPosition { .. })
        ));
    }

    #[test]
    fn test_standalone_json_functions() {
        let json = parse_markdown_json("Some *text*".to_string());
        assert_eq!(json, r#"[{"Paragraph":[{"Text":"Some "},{"Italic":[{"Text":"text"}]}]}]"#);
        assert_eq!(render_markdown_json(json).unwrap(), "Some *text*");
        assert!(render_markdown_json("{}".to_string()).is_err());
    }
}
