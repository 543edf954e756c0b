//! The remote-helper protocol driver.
//!
//! git drives the helper with one command per line on stdin and reads
//! newline-terminated responses on stdout; an empty line terminates a
//! multi-line response. Only the ref-discovery commands are supported:
//! `capabilities`, `list`, and `list for-push`. End-of-input is a clean
//! exit.

use std::io::{BufRead, Write};

use cas_refs::{from_info_refs, from_refs_tree, resolve_head, DiscoverError, RefIndex};
use cas_store::StoreClient;
use tracing::debug;

use crate::error::{HelperError, Result};

/// One protocol session over an injected store client.
///
/// `root` is the store path of the published repository (the remote
/// "git directory"); the empty string names the client's own root.
pub struct Driver<'a, C: StoreClient + ?Sized> {
    client: &'a C,
    root: String,
}

impl<'a, C: StoreClient + ?Sized> Driver<'a, C> {
    /// Create a driver over `client`, rooted at `root`.
    pub fn new(client: &'a C, root: impl Into<String>) -> Self {
        Self {
            client,
            root: root.into(),
        }
    }

    /// Run the command loop until end-of-input.
    ///
    /// Each command runs to completion and its response is flushed
    /// before the next line is read. The first fatal error aborts the
    /// loop without emitting a partial response.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> Result<()> {
        for line in input.lines() {
            let line = line?;
            debug!(command = %line, "got line");
            match line.as_str() {
                "capabilities" => {
                    output.write_all(b"fetch\npush\n\n")?;
                    output.flush()?;
                }
                "list" | "list for-push" => {
                    let response = self.list_response(line.ends_with("for-push"))?;
                    output.write_all(&response)?;
                    output.flush()?;
                }
                _ => {
                    // fetch/push batches are outside the ref-discovery
                    // core; unrecognized lines are ignored.
                    debug!(command = %line, "ignoring unsupported command");
                }
            }
        }
        Ok(())
    }

    /// Build a complete `list` response: one `<oid> <refname>` line per
    /// discovered ref, a HEAD line, and the empty terminator.
    ///
    /// The response is buffered so a failure never leaves a partial
    /// response on the wire.
    fn list_response(&self, for_push: bool) -> Result<Vec<u8>> {
        let mut head = None;
        let index = match from_info_refs(self.client, &self.root) {
            Ok(index) => {
                // The aggregate listing parsed; consult HEAD right
                // away so a bad or dangling HEAD is reported even
                // when the listing is empty.
                head = resolve_head(self.client, &self.root, &index)?;
                index
            }
            Err(DiscoverError::RefsNotFound { path }) if for_push => {
                // Pushing to a repository that never published
                // info/refs: continue with an empty index, which the
                // no-refs check below makes fatal.
                debug!(path = %path, "no aggregate refs listing for push");
                RefIndex::new()
            }
            Err(DiscoverError::RefsNotFound { path }) => {
                debug!(path = %path, "no aggregate refs listing, walking refs/");
                let index = from_refs_tree(self.client, &self.root)?;
                if !index.is_empty() {
                    head = resolve_head(self.client, &self.root, &index)?;
                }
                index
            }
            Err(err) => return Err(err.into()),
        };
        if index.is_empty() {
            return Err(HelperError::NoRefs);
        }

        let mut response = Vec::new();
        for (name, oid) in index.iter() {
            if head.is_none() && name.ends_with("master") {
                // No HEAD published: adopt the first ref that looks
                // like a default branch. First match wins.
                head = Some(oid.to_vec());
            }
            // Object ids are emitted byte-for-byte as read.
            response.extend_from_slice(oid);
            response.push(b' ');
            response.extend_from_slice(name.as_bytes());
            response.push(b'\n');
        }
        let head = head.ok_or(HelperError::NoHead)?;
        response.extend_from_slice(&head);
        response.extend_from_slice(b" HEAD\n\n");
        Ok(response)
    }
}
