use clap::Parser;

/// git remote helper for content-addressed stores.
///
/// git spawns this binary when a remote URL uses the `cas://` scheme
/// and drives it over stdin/stdout; it is not meant to be invoked by
/// hand.
#[derive(Debug, Parser)]
#[command(name = "git-remote-cas", version)]
pub struct Cli {
    /// Remote name (or the URL again for anonymous remotes).
    pub remote: String,

    /// Remote URL of the form cas://<store-id>.
    pub url: String,
}
