//! EPG Coverage Checker CLI
//!
//! A command-line tool for verifying EPG data freshness across IPTV backends.

use clap::Parser;
use epg_coverage::cli::{args::Cli, commands::check};
use epg_coverage::models::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    // Resolve the endpoint list and check options
    let mut config = Config::resolve(cli.urls, cli.config.as_deref())?;
    if cli.detailed {
        config.detailed = true;
    }
    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    check::check(&config).await?;

    Ok(())
}

/// Initialize the logging system.
fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = if verbose {
        EnvFilter::new("epg_coverage=debug")
    } else {
        EnvFilter::new("epg_coverage=info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
