//! Error types for tree traversal.

use cas_store::StoreError;
use thiserror::Error;

/// Errors surfaced by [`walk`](crate::walk).
#[derive(Debug, Error)]
pub enum WalkError {
    /// A store operation failed and the visitor chose to propagate it.
    #[error("walk failed at {path}: {source}")]
    Store {
        path: String,
        #[source]
        source: StoreError,
    },

    /// The visitor asked to skip the subtree of something that is not a
    /// directory.
    #[error("cannot skip subtree of non-directory {path}")]
    SkipNonDirectory { path: String },
}

/// Result alias for walk operations.
pub type WalkResult<T> = Result<T, WalkError>;
