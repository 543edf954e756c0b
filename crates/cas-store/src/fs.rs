//! Filesystem-backed store client.
//!
//! [`FsStore`] serves a store namespace that is mounted (or copied)
//! into a local directory, e.g. via a FUSE gateway for the underlying
//! content-addressed store. Store-identity resolution and transport
//! authentication live outside this crate; by the time an `FsStore` is
//! constructed the namespace is just a directory tree.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::entry::{EntryKind, StoreEntry};
use crate::error::{StoreError, StoreResult};
use crate::traits::StoreClient;

/// A [`StoreClient`] rooted at a local directory.
#[derive(Clone, Debug)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    /// Create a store client over the directory at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory this client is rooted at.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn locate(&self, path: &str) -> PathBuf {
        if path.is_empty() {
            self.root.clone()
        } else {
            self.root.join(path)
        }
    }
}

impl StoreClient for FsStore {
    fn list(&self, path: &str) -> StoreResult<Vec<StoreEntry>> {
        let dir = self.locate(path);
        let read_dir = std::fs::read_dir(&dir).map_err(|e| StoreError::from_io(path, e))?;

        let mut entries = Vec::new();
        for item in read_dir {
            let item = item.map_err(|e| StoreError::from_io(path, e))?;
            let file_type = item
                .file_type()
                .map_err(|e| StoreError::from_io(path, e))?;
            let kind = if file_type.is_dir() {
                EntryKind::Directory
            } else {
                // Symlinks and special files traverse as files; a later
                // open decides whether they are readable.
                EntryKind::File
            };
            entries.push(StoreEntry {
                name: item.file_name().to_string_lossy().into_owned(),
                kind,
            });
        }
        // read_dir order is platform-dependent; keep listings stable.
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn open(&self, path: &str) -> StoreResult<Box<dyn Read>> {
        let file = File::open(self.locate(path)).map_err(|e| StoreError::from_io(path, e))?;
        Ok(Box::new(file))
    }
}
