//! In-memory store for tests.
//!
//! [`InMemoryStore`] holds file contents in a `BTreeMap` keyed by
//! slash-separated path. Directories are implied by the paths of the
//! files beneath them; empty directories can be added explicitly.
//! Individual paths can be poisoned to simulate transport failures and
//! interrupted streams.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Cursor, Read};

use crate::entry::{EntryKind, StoreEntry};
use crate::error::{StoreError, StoreResult};
use crate::traits::StoreClient;

/// An in-memory implementation of [`StoreClient`].
///
/// Populated up front via [`put`](InMemoryStore::put) and then used
/// read-only, matching how the helper consumes a real store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    files: BTreeMap<String, Vec<u8>>,
    dirs: BTreeSet<String>,
    poisoned: BTreeSet<String>,
    interrupted: BTreeSet<String>,
}

impl InMemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file at `path` with the given contents. Parent directories
    /// are implied.
    pub fn put(&mut self, path: impl Into<String>, contents: impl Into<Vec<u8>>) -> &mut Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Add an empty directory at `path`.
    pub fn put_dir(&mut self, path: impl Into<String>) -> &mut Self {
        self.dirs.insert(path.into());
        self
    }

    /// Make `list` and `open` on exactly `path` fail with a transport
    /// error.
    pub fn poison(&mut self, path: impl Into<String>) -> &mut Self {
        self.poisoned.insert(path.into());
        self
    }

    /// Make `open` on `path` succeed but the returned stream fail once
    /// its contents are exhausted, simulating a mid-read transport
    /// failure.
    pub fn interrupt_stream(&mut self, path: impl Into<String>) -> &mut Self {
        self.interrupted.insert(path.into());
        self
    }

    fn check_poison(&self, path: &str) -> StoreResult<()> {
        if self.poisoned.contains(path) {
            return Err(StoreError::Transport {
                path: path.to_string(),
                source: io::Error::new(io::ErrorKind::BrokenPipe, "poisoned path"),
            });
        }
        Ok(())
    }

    fn is_dir(&self, path: &str) -> bool {
        if path.is_empty() || self.dirs.contains(path) {
            return true;
        }
        let prefix = format!("{path}/");
        self.files.keys().any(|k| k.starts_with(&prefix))
            || self.dirs.iter().any(|d| d.starts_with(&prefix))
    }
}

impl StoreClient for InMemoryStore {
    fn list(&self, path: &str) -> StoreResult<Vec<StoreEntry>> {
        self.check_poison(path)?;
        if !self.is_dir(path) {
            return Err(StoreError::NotFound {
                path: path.to_string(),
            });
        }

        let prefix = if path.is_empty() {
            String::new()
        } else {
            format!("{path}/")
        };

        // First path segment below the prefix, deduplicated; a segment
        // is a directory when anything lives deeper than it.
        let mut children: BTreeMap<&str, EntryKind> = BTreeMap::new();
        for key in self.files.keys().chain(self.dirs.iter()) {
            let Some(rest) = key.strip_prefix(&prefix) else {
                continue;
            };
            if rest.is_empty() {
                continue;
            }
            match rest.split_once('/') {
                Some((seg, _)) => {
                    children.insert(seg, EntryKind::Directory);
                }
                None => {
                    let kind = if self.dirs.contains(key) {
                        EntryKind::Directory
                    } else {
                        EntryKind::File
                    };
                    children.entry(rest).or_insert(kind);
                }
            }
        }

        Ok(children
            .into_iter()
            .map(|(name, kind)| StoreEntry {
                name: name.to_string(),
                kind,
            })
            .collect())
    }

    fn open(&self, path: &str) -> StoreResult<Box<dyn Read>> {
        self.check_poison(path)?;
        match self.files.get(path) {
            Some(contents) => {
                if self.interrupted.contains(path) {
                    Ok(Box::new(InterruptedReader {
                        data: Cursor::new(contents.clone()),
                    }))
                } else {
                    Ok(Box::new(Cursor::new(contents.clone())))
                }
            }
            None => Err(StoreError::NotFound {
                path: path.to_string(),
            }),
        }
    }
}

/// Yields its data, then fails instead of reporting end-of-stream.
struct InterruptedReader {
    data: Cursor<Vec<u8>>,
}

impl Read for InterruptedReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.data.read(buf)?;
        if n == 0 && !buf.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionReset,
                "stream interrupted",
            ));
        }
        Ok(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> InMemoryStore {
        let mut store = InMemoryStore::new();
        store
            .put("HEAD", "ref: refs/heads/main\n")
            .put("info/refs", "oid\trefs/heads/main\n")
            .put("refs/heads/main", "oid\n")
            .put("refs/tags/v1", "oid\n");
        store
    }

    // ---- Listing ----

    #[test]
    fn list_root() {
        let store = sample();
        let entries = store.list("").unwrap();
        assert_eq!(
            entries,
            vec![
                StoreEntry::file("HEAD"),
                StoreEntry::directory("info"),
                StoreEntry::directory("refs"),
            ]
        );
    }

    #[test]
    fn list_nested_directory() {
        let store = sample();
        let entries = store.list("refs").unwrap();
        assert_eq!(
            entries,
            vec![
                StoreEntry::directory("heads"),
                StoreEntry::directory("tags"),
            ]
        );
    }

    #[test]
    fn list_missing_directory_is_not_found() {
        let store = sample();
        let err = store.list("objects").unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn list_empty_root() {
        let store = InMemoryStore::new();
        assert!(store.list("").unwrap().is_empty());
    }

    #[test]
    fn list_explicit_empty_directory() {
        let mut store = InMemoryStore::new();
        store.put_dir("refs");
        assert!(store.list("refs").unwrap().is_empty());
        let entries = store.list("").unwrap();
        assert_eq!(entries, vec![StoreEntry::directory("refs")]);
    }

    // ---- Opening ----

    #[test]
    fn open_reads_contents() {
        let store = sample();
        let mut reader = store.open("HEAD").unwrap();
        let mut buf = String::new();
        reader.read_to_string(&mut buf).unwrap();
        assert_eq!(buf, "ref: refs/heads/main\n");
    }

    #[test]
    fn open_missing_is_not_found() {
        let store = sample();
        // The Ok side (a reader) has no Debug impl, so take the error out
        // without formatting the success variant.
        let err = store.open("config").err().expect("open should fail");
        assert!(err.is_not_found());
    }

    // ---- Failure injection ----

    #[test]
    fn poisoned_path_fails_list_and_open() {
        let mut store = sample();
        store.poison("refs/heads").poison("HEAD");
        assert!(matches!(
            store.list("refs/heads").unwrap_err(),
            StoreError::Transport { .. }
        ));
        assert!(matches!(
            store.open("HEAD").err(),
            Some(StoreError::Transport { .. })
        ));
    }

    #[test]
    fn interrupted_stream_fails_after_contents() {
        let mut store = sample();
        store.interrupt_stream("info/refs");
        let mut reader = store.open("info/refs").unwrap();
        let mut buf = Vec::new();
        let err = reader.read_to_end(&mut buf).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::ConnectionReset);
        // The contents before the failure were still delivered.
        assert_eq!(buf, b"oid\trefs/heads/main\n");
    }
}
