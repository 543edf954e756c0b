//! Read-only client abstraction over a content-addressed store.
//!
//! A published repository lives in the store under an ordinary git
//! directory layout (`HEAD`, `info/refs`, `refs/…`, `objects/…`). This
//! crate defines the minimal capability set the rest of the helper needs
//! to consume that layout: enumerate the children of a path, open a path
//! for reading, and tell directories apart from files.
//!
//! # Modules
//!
//! - [`error`] — [`StoreError`] and the [`StoreResult`] alias
//! - [`entry`] — [`StoreEntry`] and [`EntryKind`]
//! - [`traits`] — the [`StoreClient`] trait
//! - [`memory`] — [`InMemoryStore`] for tests
//! - [`fs`] — [`FsStore`] over a locally mounted store root

pub mod entry;
pub mod error;
pub mod fs;
pub mod memory;
pub mod traits;

pub use entry::{EntryKind, StoreEntry};
pub use error::{StoreError, StoreResult};
pub use fs::FsStore;
pub use memory::InMemoryStore;
pub use traits::StoreClient;
