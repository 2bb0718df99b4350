//! File acquisition: read a document file and parse it as one JSON value.
//!
//! A failure here is fatal for the invocation and is reported with the path;
//! the pipeline is never invoked on unparsed input.

use std::fs;
use std::path::Path;

use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{path} is empty")]
    Empty { path: String },
    #[error("failed to parse {path} as JSON: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

pub fn load_document(path: &Path) -> Result<Value, LoadError> {
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Err(LoadError::Empty {
            path: path.display().to_string(),
        });
    }
    serde_json::from_str(&text).map_err(|source| LoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}
