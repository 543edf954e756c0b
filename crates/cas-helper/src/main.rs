use clap::Parser;
use tracing::debug;

use cas_store::FsStore;

mod cli;
mod config;
mod driver;
mod error;

fn main() -> anyhow::Result<()> {
    // stdout belongs to the protocol; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();
    let config = config::Config::from_env(&cli)?;
    debug!(
        remote = %config.remote_name,
        store = %config.store_root.display(),
        git_dir = %config.git_dir.display(),
        "helper configured"
    );

    let store = FsStore::new(config.store_root.clone());
    let driver = driver::Driver::new(&store, "");
    driver.run(std::io::stdin().lock(), std::io::stdout().lock())?;
    Ok(())
}
