use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised while loading, parsing or rendering bookmarks
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// Input text is not JSON at all
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// JSON is well-formed but a node lacks a required field or has it with the wrong type
    #[error("malformed bookmark at {path}: field `{field}` {expected}")]
    MalformedInput { path: String, field: String, expected: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

impl BookmarkError {
    pub(crate) fn malformed(path: &str, field: &str, expected: impl Into<String>) -> Self {
        Self::MalformedInput {
            path: path.to_string(),
            field: field.to_string(),
            expected: expected.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BookmarkError>;
