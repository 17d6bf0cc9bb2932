// ABOUTME: Error types for document loading and query parsing.
// ABOUTME: Provides the ElementsError enum and the crate-wide Result alias.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised around the query library.
///
/// The traversal functions themselves never fail: a missing attribute is
/// `""`, no matches is an empty `Vec`, and a missing id is `None`.
#[derive(Debug, Error)]
pub enum ElementsError {
    /// Reading an HTML file from disk failed.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A query string was not `#id`, `.class` or a bare tag name.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A `NodeId` did not resolve inside the document it was used with.
    #[error("node does not belong to this document")]
    UnknownNode,
}

impl ElementsError {
    /// Creates a Read error for the given path.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ElementsError::Read {
            path: path.into(),
            source,
        }
    }

    /// Creates an InvalidQuery error with a custom message.
    pub fn invalid_query(msg: impl Into<String>) -> Self {
        ElementsError::InvalidQuery(msg.into())
    }

    /// Returns true if this is a Read error.
    pub fn is_read(&self) -> bool {
        matches!(self, ElementsError::Read { .. })
    }

    /// Returns true if this is an InvalidQuery error.
    pub fn is_invalid_query(&self) -> bool {
        matches!(self, ElementsError::InvalidQuery(_))
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ElementsError>;
