//! Pre-order traversal of a store subtree.

use cas_store::{StoreClient, StoreEntry, StoreError};
use tracing::debug;

use crate::error::{WalkError, WalkResult};

/// What the visitor wants the walker to do next.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Visit {
    /// Keep going; descend into directories.
    Continue,
    /// Do not descend into this directory's children.
    ///
    /// Returning this for a non-directory is an error
    /// ([`WalkError::SkipNonDirectory`]).
    SkipSubtree,
}

/// Join `base` and `name` with forward-slash semantics.
///
/// The empty base names the store root, so joining against it yields
/// `name` unchanged.
pub fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base.trim_end_matches('/'), name)
    }
}

/// Walk the subtree rooted at `root` in pre-order.
///
/// The visitor is invoked once per entry with `(path, entry, error)`:
///
/// - For every child discovered, with the entry and no error.
/// - If listing `root` itself fails, once with no entry and the listing
///   error; whatever the visitor returns is the walk's result.
/// - If listing a nested directory fails, with that directory's entry
///   and the listing error; the visitor's result is propagated and the
///   subtree is abandoned either way.
///
/// Traversal stops at the first error the visitor returns.
pub fn walk<C, F>(client: &C, root: &str, visitor: &mut F) -> WalkResult<()>
where
    C: StoreClient + ?Sized,
    F: FnMut(&str, Option<&StoreEntry>, Option<StoreError>) -> WalkResult<Visit>,
{
    let entries = match client.list(root) {
        Ok(entries) => entries,
        Err(err) => {
            debug!(path = root, error = %err, "listing walk root failed");
            return visitor(root, None, Some(err)).map(|_| ());
        }
    };
    for entry in &entries {
        let path = join_path(root, &entry.name);
        walk_entry(client, &path, entry, visitor)?;
    }
    Ok(())
}

fn walk_entry<C, F>(client: &C, path: &str, entry: &StoreEntry, visitor: &mut F) -> WalkResult<()>
where
    C: StoreClient + ?Sized,
    F: FnMut(&str, Option<&StoreEntry>, Option<StoreError>) -> WalkResult<Visit>,
{
    match visitor(path, Some(entry), None)? {
        Visit::Continue => {}
        Visit::SkipSubtree => {
            if entry.kind.is_directory() {
                return Ok(());
            }
            return Err(WalkError::SkipNonDirectory {
                path: path.to_string(),
            });
        }
    }
    if !entry.kind.is_directory() {
        return Ok(());
    }

    let children = match client.list(path) {
        Ok(children) => children,
        Err(err) => {
            debug!(path, error = %err, "listing nested directory failed");
            return visitor(path, Some(entry), Some(err)).map(|_| ());
        }
    };
    for child in &children {
        let child_path = join_path(path, &child.name);
        walk_entry(client, &child_path, child, visitor)?;
    }
    Ok(())
}
