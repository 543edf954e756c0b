//! The two ref-discovery strategies.
//!
//! A published repository advertises its refs either through the
//! aggregate `info/refs` file (one `<oid>\t<refname>` record per line)
//! or, when that file is absent, through the `refs/` tree itself, whose
//! leaves each hold a single object id. Object ids pass through as the
//! bytes read from the store, never re-encoded.

use std::io::Read;

use cas_store::{StoreClient, StoreError};
use cas_walk::{join_path, walk, Visit, WalkError};
use tracing::trace;

use crate::error::{DiscoverError, Result};
use crate::index::RefIndex;

/// Aggregate strategy: parse `<root>/info/refs` into a [`RefIndex`].
///
/// Fails with [`DiscoverError::RefsNotFound`] when the file is absent
/// so the caller can fall back to [`from_refs_tree`]. Any record
/// without a horizontal tab is a protocol error; records are split on
/// the first tab only, and the object id keeps its bytes as read.
pub fn from_info_refs<C>(client: &C, root: &str) -> Result<RefIndex>
where
    C: StoreClient + ?Sized,
{
    let path = join_path(root, "info/refs");
    let mut reader = match client.open(&path) {
        Ok(reader) => reader,
        Err(err) if err.is_not_found() => return Err(DiscoverError::RefsNotFound { path }),
        Err(err) => return Err(err.into()),
    };

    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|source| StoreError::Transport {
            path: path.clone(),
            source,
        })?;

    let mut index = RefIndex::new();
    let body = data.strip_suffix(b"\n").unwrap_or(&data);
    if !data.is_empty() {
        for record in body.split(|&b| b == b'\n') {
            let record = record.strip_suffix(b"\r").unwrap_or(record);
            let Some(tab) = record.iter().position(|&b| b == b'\t') else {
                return Err(DiscoverError::MalformedRefsFile {
                    path,
                    record: String::from_utf8_lossy(record).into_owned(),
                });
            };
            let (oid, name) = (&record[..tab], &record[tab + 1..]);
            let name = String::from_utf8_lossy(name).into_owned();
            trace!(name = %name, "aggregate ref record");
            index.insert(name, oid);
        }
    }
    Ok(index)
}

/// Traversal strategy: walk `<root>/refs/` and read every leaf.
///
/// Each leaf's content, trimmed of surrounding whitespace, becomes the
/// object id; the ref name is the leaf's path relative to the store
/// root. An absent `refs/` directory yields an empty index (the caller
/// then decides whether "no refs at all" is fatal); any other store
/// failure terminates discovery.
pub fn from_refs_tree<C>(client: &C, root: &str) -> Result<RefIndex>
where
    C: StoreClient + ?Sized,
{
    let refs_root = join_path(root, "refs");
    let mut index = RefIndex::new();
    walk(client, &refs_root, &mut |path, entry, err| {
        if let Some(err) = err {
            if entry.is_none() && err.is_not_found() {
                // The refs/ root itself does not exist: empty tree.
                return Ok(Visit::Continue);
            }
            return Err(WalkError::Store {
                path: path.to_string(),
                source: err,
            });
        }
        match entry {
            Some(entry) if !entry.kind.is_directory() => {
                let oid = read_trimmed(client, path)?;
                let name = relative_name(root, path);
                trace!(name, "walked ref leaf");
                index.insert(name, oid);
            }
            _ => {}
        }
        Ok(Visit::Continue)
    })?;
    Ok(index)
}

/// Read all of `path` and trim surrounding ASCII whitespace, keeping
/// the remaining bytes as-is.
fn read_trimmed<C>(client: &C, path: &str) -> std::result::Result<Vec<u8>, WalkError>
where
    C: StoreClient + ?Sized,
{
    let store_err = |source: StoreError| WalkError::Store {
        path: path.to_string(),
        source,
    };
    let mut reader = client.open(path).map_err(store_err)?;
    let mut data = Vec::new();
    reader.read_to_end(&mut data).map_err(|source| {
        store_err(StoreError::Transport {
            path: path.to_string(),
            source,
        })
    })?;
    Ok(data.trim_ascii().to_vec())
}

/// Strip the store-root prefix so the name begins with `refs/`.
fn relative_name<'a>(root: &str, path: &'a str) -> &'a str {
    if root.is_empty() {
        return path;
    }
    path.strip_prefix(root)
        .map(|rest| rest.trim_start_matches('/'))
        .unwrap_or(path)
}
