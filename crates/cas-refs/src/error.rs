//! Error types for ref discovery.

use cas_store::StoreError;
use cas_walk::WalkError;
use thiserror::Error;

/// Errors that can occur while discovering refs or resolving HEAD.
#[derive(Debug, Error)]
pub enum DiscoverError {
    /// The aggregate refs listing (`info/refs`) is absent.
    ///
    /// This is the only recoverable discovery error: the driver may
    /// fall back to walking the `refs/` tree.
    #[error("no refs listing at {path}")]
    RefsNotFound { path: String },

    /// A store operation failed.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Walking the `refs/` tree failed.
    #[error(transparent)]
    Traversal(#[from] WalkError),

    /// A record in `info/refs` is not `<oid>\t<refname>`.
    #[error("malformed record in {path}: {record:?}")]
    MalformedRefsFile { path: String, record: String },

    /// `HEAD` does not begin with `ref: `.
    #[error("malformed HEAD at {path}: {contents:?}")]
    MalformedHead { path: String, contents: String },

    /// Symbolic HEAD points at a ref that was not discovered.
    #[error("HEAD points at unknown ref {target:?}")]
    UnknownHead { target: String },
}

/// Convenience type alias for discovery operations.
pub type Result<T> = std::result::Result<T, DiscoverError>;
