use thiserror::Error;

/// Errors returned by the engine's boundary operations.
///
/// Parsing markdown never produces one of these; malformed markdown degrades
/// to paragraphs and plain text instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The encoded document or call arguments could not be decoded.
    #[error("Boundary decode error: {reason}")]
    BoundaryDecode { reason: String },

    #[error("Invalid position: {0}")]
    InvalidPosition(#[from] InvalidPosition),
}

impl EngineError {
    pub fn decode(reason: impl Into<String>) -> Self {
        EngineError::BoundaryDecode {
            reason: reason.into(),
        }
    }
}

/// Why a block/row/column triple does not address a table cell.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidPosition {
    #[error("block index {index} out of range for a document with {len} blocks")]
    BlockOutOfRange { index: usize, len: usize },

    #[error("block {index} is not a table")]
    NotATable { index: usize },

    #[error("cell ({row}, {col}) is outside the table grid")]
    CellOutOfRange { row: usize, col: usize },

    /// A coordinate arrived as a negative integer from a C caller.
    #[error("{name} must not be negative, got {value}")]
    Negative { name: &'static str, value: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_position_converts_into_engine_error() {
        let err: EngineError = InvalidPosition::NotATable { index: 3 }.into();
        assert_eq!(err.to_string(), "Invalid position: block 3 is not a table");
    }

    #[test]
    fn decode_error_message_includes_reason() {
        let err = EngineError::decode("expected value at line 1 column 1");
        assert_eq!(
            err.to_string(),
            "Boundary decode error: expected value at line 1 column 1"
        );
    }
}
