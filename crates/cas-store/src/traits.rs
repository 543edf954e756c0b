//! The [`StoreClient`] trait defining the store access interface.

use std::io::Read;

use crate::entry::StoreEntry;
use crate::error::StoreResult;

/// Read-only view over a remote, filesystem-like store namespace.
///
/// Paths are slash-separated and relative to the client's root; the
/// empty string names the root itself. Implementations make no
/// atomicity promise across `list` and `open` — if the tree mutates
/// mid-traversal, callers see whatever error the store reports.
pub trait StoreClient: Send + Sync {
    /// Enumerate the immediate children of a directory.
    ///
    /// Fails with [`StoreError::NotFound`](crate::StoreError::NotFound)
    /// if the path is absent, [`StoreError::Transport`](crate::StoreError::Transport)
    /// on any other failure.
    fn list(&self, path: &str) -> StoreResult<Vec<StoreEntry>>;

    /// Open a path for a byte-stream read.
    ///
    /// The caller owns the reader and drops it when done; stream errors
    /// surface through the `Read` implementation.
    fn open(&self, path: &str) -> StoreResult<Box<dyn Read>>;
}
