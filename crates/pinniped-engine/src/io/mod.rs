use std::fs;
use std::path::{Path, PathBuf};

use crate::{error::EngineError, models::Document};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: EngineError,
    },
}

/// Read and parse a markdown file.
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    Document::from_bytes(&bytes).map_err(|source| IoError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a document to a markdown file, ending it with a newline.
pub fn write_document(path: &Path, doc: &Document) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut content = doc.to_markdown();
    if !content.is_empty() {
        content.push('\n');
    }
    fs::write(path, content)?;
    Ok(())
}
