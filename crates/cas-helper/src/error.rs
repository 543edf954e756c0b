//! Error types for the helper process.

use cas_refs::DiscoverError;
use thiserror::Error;

/// Fatal errors the helper reports to git by closing the pipe with a
/// non-zero exit.
#[derive(Debug, Error)]
pub enum HelperError {
    /// `GIT_DIR` is unset or empty.
    #[error("GIT_DIR environment variable is not set")]
    MissingGitDir,

    /// The remote URL is not `<scheme>://<store-id>`.
    #[error("malformed remote url {url:?}: expected <scheme>://<store-id>")]
    BadRemoteUrl { url: String },

    /// Both discovery strategies produced an empty ref index.
    #[error("no refs found")]
    NoRefs,

    /// No `HEAD` was published and no ref qualified for the
    /// default-branch guess.
    #[error("could not determine HEAD")]
    NoHead,

    /// Ref discovery or HEAD resolution failed.
    #[error(transparent)]
    Discover(#[from] DiscoverError),

    /// Reading a command or writing a response failed.
    #[error("protocol i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for helper operations.
pub type Result<T> = std::result::Result<T, HelperError>;
