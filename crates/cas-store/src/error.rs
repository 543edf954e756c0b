//! Error types for store client operations.

use thiserror::Error;

/// Errors surfaced by a [`StoreClient`](crate::traits::StoreClient).
///
/// Only two kinds exist at this seam: a path that is simply absent, and
/// everything else. Callers that can recover from absence (the
/// aggregate-vs-traversal fallback in ref discovery) match on
/// [`StoreError::NotFound`]; all other failures are transport failures.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The path does not exist in the store.
    #[error("not found: {path}")]
    NotFound { path: String },

    /// Any failure that is not plain absence: network errors, permission
    /// problems, interrupted streams.
    #[error("transport failure on {path}: {source}")]
    Transport {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    /// Returns `true` if this error is [`StoreError::NotFound`].
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }

    /// Classify an I/O error at `path`: `NotFound` kinds map to
    /// [`StoreError::NotFound`], everything else to
    /// [`StoreError::Transport`].
    pub fn from_io(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            StoreError::NotFound { path }
        } else {
            StoreError::Transport { path, source }
        }
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
