//! Error types for snippet generation.

use std::path::PathBuf;

/// Failures that abort a generation run.
///
/// Generation itself never fails; only fetching the document and writing the
/// output do.
#[derive(Debug, thiserror::Error)]
pub enum SnippetError {
    /// The HTTP request could not be completed.
    #[error("failed to fetch resource specification: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("resource specification request to {url} returned {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status.
        status: reqwest::StatusCode,
    },

    /// The response body is not a valid resource specification.
    #[error("malformed resource specification: {0}")]
    Parse(#[source] serde_json::Error),

    /// The snippet set could not be serialized.
    #[error("failed to serialize snippets: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Output path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for snippet operations.
pub type SnippetResult<T> = Result<T, SnippetError>;
