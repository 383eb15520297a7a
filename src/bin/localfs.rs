use anyhow::{Context, Result};
use clap::Parser;
use localfs::cli::{LocalFsCli, LocalFsCliImpl};
use tracing::debug;

fn main() -> Result<()> {
    let cli = LocalFsCli::parse();

    // Logs go to stderr so `cat` output on stdout stays clean
    let level = match cli.verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    debug!("Starting localfs v{}", env!("CARGO_PKG_VERSION"));

    let runner = LocalFsCliImpl::from_cli(&cli).context("Failed to load configuration")?;
    runner.execute(&cli.command)?;

    Ok(())
}
