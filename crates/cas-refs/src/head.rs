//! Symbolic HEAD resolution.

use std::io::Read;

use cas_store::{StoreClient, StoreError};
use cas_walk::join_path;

use crate::error::{DiscoverError, Result};
use crate::index::RefIndex;

/// Resolve `<root>/HEAD` against a discovered [`RefIndex`].
///
/// `HEAD` must begin with the five bytes `ref: `; the remainder,
/// trimmed of surrounding whitespace, names the target ref. Returns
/// `Ok(None)` when the file is absent — the caller may then fall back
/// to guessing a default branch. A peeled HEAD (a bare object id) is
/// rejected as malformed.
pub fn resolve_head<C>(client: &C, root: &str, index: &RefIndex) -> Result<Option<Vec<u8>>>
where
    C: StoreClient + ?Sized,
{
    let path = join_path(root, "HEAD");
    let mut reader = match client.open(&path) {
        Ok(reader) => reader,
        Err(err) if err.is_not_found() => return Ok(None),
        Err(err) => return Err(err.into()),
    };

    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .map_err(|source| StoreError::Transport {
            path: path.clone(),
            source,
        })?;

    let Some(target) = contents.strip_prefix("ref: ") else {
        return Err(DiscoverError::MalformedHead { path, contents });
    };
    let target = target.trim();
    match index.get(target) {
        Some(oid) => Ok(Some(oid.to_vec())),
        None => Err(DiscoverError::UnknownHead {
            target: target.to_string(),
        }),
    }
}
