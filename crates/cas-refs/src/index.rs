//! The in-memory ref index built during discovery.

use std::collections::BTreeMap;

/// Mapping from ref name (e.g. `refs/heads/main`) to object id.
///
/// Object ids are kept as the raw bytes read from the store, so a leaf
/// that is not valid UTF-8 round-trips to the protocol output without
/// re-encoding. Built once per `list` command and discarded after the
/// response is emitted. Iteration is sorted by ref name so output is
/// deterministic; duplicate inserts overwrite silently.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RefIndex {
    refs: BTreeMap<String, Vec<u8>>,
}

impl RefIndex {
    /// Create a new empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite a ref, returning the displaced object id if
    /// the name was already present.
    pub fn insert(&mut self, name: impl Into<String>, oid: impl Into<Vec<u8>>) -> Option<Vec<u8>> {
        self.refs.insert(name.into(), oid.into())
    }

    /// Look up the object id for a ref name.
    pub fn get(&self, name: &str) -> Option<&[u8]> {
        self.refs.get(name).map(Vec::as_slice)
    }

    /// Number of refs in the index.
    pub fn len(&self) -> usize {
        self.refs.len()
    }

    /// Returns `true` if no refs were discovered.
    pub fn is_empty(&self) -> bool {
        self.refs.is_empty()
    }

    /// Iterate `(name, oid)` pairs in ref-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.refs.iter().map(|(n, o)| (n.as_str(), o.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut index = RefIndex::new();
        assert!(index.insert("refs/heads/main", "aaa").is_none());
        assert_eq!(index.get("refs/heads/main"), Some(b"aaa".as_slice()));
        assert_eq!(index.get("refs/heads/other"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn duplicate_insert_overwrites() {
        let mut index = RefIndex::new();
        index.insert("refs/heads/main", "aaa");
        let displaced = index.insert("refs/heads/main", "bbb");
        assert_eq!(displaced.as_deref(), Some(b"aaa".as_slice()));
        assert_eq!(index.get("refs/heads/main"), Some(b"bbb".as_slice()));
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn iteration_is_sorted_by_name() {
        let mut index = RefIndex::new();
        index.insert("refs/tags/v1", "ccc");
        index.insert("refs/heads/main", "aaa");
        index.insert("refs/heads/dev", "bbb");
        let names: Vec<&str> = index.iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec!["refs/heads/dev", "refs/heads/main", "refs/tags/v1"]
        );
    }

    #[test]
    fn oid_bytes_need_not_be_utf8() {
        let mut index = RefIndex::new();
        index.insert("refs/heads/main", vec![0xc3, 0x28]);
        assert_eq!(index.get("refs/heads/main"), Some(&[0xc3, 0x28][..]));
    }

    #[test]
    fn empty_index() {
        let index = RefIndex::new();
        assert!(index.is_empty());
        assert_eq!(index.iter().count(), 0);
    }
}
