//! Storage error types.
//!
//! Used by the JSON document stores and callers of storage APIs.

use thiserror::Error;

/// Errors that can occur when persisting a JSON document.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
