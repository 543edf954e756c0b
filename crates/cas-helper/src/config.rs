//! Per-invocation configuration assembled from arguments and environment.

use std::path::{Path, PathBuf};

use crate::cli::Cli;
use crate::error::{HelperError, Result};

/// Everything the helper needs for one git session.
#[derive(Clone, Debug)]
pub struct Config {
    /// Remote name as git passed it.
    pub remote_name: String,
    /// Local mount of the store namespace, extracted from the URL.
    pub store_root: PathBuf,
    /// The local git directory (`GIT_DIR`). Read-only for ref
    /// discovery; object transfer will need it.
    pub git_dir: PathBuf,
}

impl Config {
    /// Build a config from raw parts. Pure, for testability; see
    /// [`Config::from_env`] for the process-level entry point.
    pub fn new(remote: &str, url: &str, git_dir: Option<&str>, cwd: &Path) -> Result<Self> {
        let git_dir = match git_dir {
            None | Some("") => return Err(HelperError::MissingGitDir),
            // git sets GIT_DIR=.git when run from the worktree root.
            Some(".git") => cwd.join(".git"),
            Some(dir) => PathBuf::from(dir),
        };

        let store_id = url
            .split_once("://")
            .map(|(_, id)| id)
            .filter(|id| !id.is_empty())
            .ok_or_else(|| HelperError::BadRemoteUrl {
                url: url.to_string(),
            })?;

        Ok(Self {
            remote_name: remote.to_string(),
            store_root: PathBuf::from(store_id),
            git_dir,
        })
    }

    /// Build the config for this process from the parsed CLI, `GIT_DIR`,
    /// and the current working directory.
    pub fn from_env(cli: &Cli) -> Result<Self> {
        let git_dir = std::env::var("GIT_DIR").ok();
        let cwd = std::env::current_dir()?;
        Self::new(&cli.remote, &cli.url, git_dir.as_deref(), &cwd)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CWD: &str = "/work/project";

    #[test]
    fn extracts_store_id_from_url() {
        let config = Config::new("origin", "cas:///mnt/store", Some("/g"), Path::new(CWD)).unwrap();
        assert_eq!(config.store_root, PathBuf::from("/mnt/store"));
        assert_eq!(config.remote_name, "origin");
        assert_eq!(config.git_dir, PathBuf::from("/g"));
    }

    #[test]
    fn rewrites_bare_dot_git() {
        let config = Config::new("origin", "cas://id", Some(".git"), Path::new(CWD)).unwrap();
        assert_eq!(config.git_dir, PathBuf::from("/work/project/.git"));
    }

    #[test]
    fn missing_git_dir_is_fatal() {
        let err = Config::new("origin", "cas://id", None, Path::new(CWD)).unwrap_err();
        assert!(matches!(err, HelperError::MissingGitDir));
    }

    #[test]
    fn empty_git_dir_is_fatal() {
        let err = Config::new("origin", "cas://id", Some(""), Path::new(CWD)).unwrap_err();
        assert!(matches!(err, HelperError::MissingGitDir));
    }

    #[test]
    fn url_without_scheme_separator_is_fatal() {
        let err = Config::new("origin", "not-a-url", Some("/g"), Path::new(CWD)).unwrap_err();
        assert!(matches!(err, HelperError::BadRemoteUrl { url } if url == "not-a-url"));
    }

    #[test]
    fn url_with_empty_store_id_is_fatal() {
        let err = Config::new("origin", "cas://", Some("/g"), Path::new(CWD)).unwrap_err();
        assert!(matches!(err, HelperError::BadRemoteUrl { .. }));
    }
}
