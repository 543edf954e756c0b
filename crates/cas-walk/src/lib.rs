//! Recursive pre-order traversal over a [`StoreClient`](cas_store::StoreClient)
//! namespace.
//!
//! The walker mirrors the classic filesystem-walk idiom: a visitor
//! callback receives every entry in pre-order and may prune a directory
//! subtree by returning [`Visit::SkipSubtree`]. Listing failures are
//! handed to the visitor rather than swallowed, so the caller decides
//! whether a missing or unreadable directory is fatal.

pub mod error;
pub mod walk;

pub use error::{WalkError, WalkResult};
pub use walk::{join_path, walk, Visit};
