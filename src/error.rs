// Error taxonomy for the ranking pipeline.
//
// The library returns typed errors so callers can tell a missing paper apart
// from a flaky network. The binary wraps everything in anyhow at the edge.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, CiteRankError>;

#[derive(Debug, Error)]
pub enum CiteRankError {
    /// The index returned no candidate publication for the query.
    #[error("No publication found for query \"{query}\"")]
    NotFound { query: String },

    /// A publication lacks a field the pipeline cannot work without.
    #[error("Publication \"{title}\" has no {field}")]
    MissingField { field: &'static str, title: String },

    /// Talking to the scholarly index failed.
    #[error(transparent)]
    Retrieval(#[from] RetrievalError),

    /// Reading or writing the persisted snapshot failed.
    #[error("Snapshot {}: {source}", .path.display())]
    Snapshot {
        path: PathBuf,
        #[source]
        source: SnapshotError,
    },

    /// Writing the tabular export failed.
    #[error("Export {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// `rank` was asked to rank against a document that isn't in the corpus.
    #[error("Anchor index {index} is outside a corpus of {len} documents")]
    AnchorOutOfRange { index: usize, len: usize },
}

/// What went wrong with a snapshot file.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Failures while fetching from the scholarly index.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("{context}: {source}")]
    Http {
        context: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{endpoint} returned {status}: {body}")]
    Status {
        endpoint: String,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("Failed to decode {endpoint} response: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// The index handed back a record we can't follow up on (e.g. no paper id).
    #[error("Unusable record from index: {0}")]
    Unusable(String),
}

impl CiteRankError {
    /// True when a substitute snapshot may stand in for the failed operation.
    pub fn is_retrieval(&self) -> bool {
        matches!(self, CiteRankError::Retrieval(_))
    }
}
