//! Library error types

use std::io;
use std::path::PathBuf;

/// Failure to retrieve a section's data file
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("resource path escapes the site root: {0}")]
    OutsideRoot(String),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Failure anywhere in the fetch/decode/render pipeline of one section
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("malformed {file}: {source}")]
    Json {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to render markdown: {0}")]
    Markdown(String),
}

/// Failure reading or writing the persisted preference file
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}
