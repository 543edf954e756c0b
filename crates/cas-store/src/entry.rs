//! Directory entries as reported by a store listing.

/// Classification of a listed child.
///
/// Stores may know about more exotic kinds (symlinks, special nodes);
/// anything that is not a directory is reported as [`EntryKind::File`]
/// and traversed as a file. If a later `open` fails, that failure is
/// propagated as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryKind {
    /// A directory with children of its own.
    Directory,
    /// A readable leaf.
    File,
}

impl EntryKind {
    /// Returns `true` for [`EntryKind::Directory`].
    pub fn is_directory(self) -> bool {
        matches!(self, EntryKind::Directory)
    }
}

/// One immediate child of a listed directory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreEntry {
    /// The child's name, without any path separators.
    pub name: String,
    /// Directory or file.
    pub kind: EntryKind,
}

impl StoreEntry {
    /// Create a directory entry.
    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::Directory,
        }
    }

    /// Create a file entry.
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: EntryKind::File,
        }
    }
}
