//! Ref discovery for repositories published through a content-addressed
//! store.
//!
//! A published repository keeps an ordinary git directory layout in the
//! store. This crate reconstructs the `(refname, object id)` pairs it
//! advertises and resolves the symbolic `HEAD`:
//!
//! - the *aggregate* strategy parses `info/refs` when present;
//! - the *traversal* strategy walks the `refs/` tree and reads each
//!   leaf;
//! - [`resolve_head`] follows the `ref: ` pointer in `HEAD` into the
//!   discovered index.
//!
//! Object ids are opaque trimmed bytes here; nothing validates or
//! re-encodes them.
//!
//! # Modules
//!
//! - [`error`] — [`DiscoverError`] and the [`Result`] alias
//! - [`index`] — the per-command [`RefIndex`]
//! - [`discover`] — [`from_info_refs`] and [`from_refs_tree`]
//! - [`head`] — [`resolve_head`]

pub mod discover;
pub mod error;
pub mod head;
pub mod index;

pub use discover::{from_info_refs, from_refs_tree};
pub use error::{DiscoverError, Result};
pub use head::resolve_head;
pub use index::RefIndex;
