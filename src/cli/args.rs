//! Command line argument definitions.

use clap::Parser;
use std::path::PathBuf;

/// EPG Coverage Checker - verify EPG data freshness across IPTV backends
#[derive(Parser, Debug)]
#[command(name = "epg-coverage")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// EPG backend base URLs to check (overrides config file and env)
    #[arg(value_name = "URL")]
    pub urls: Vec<String>,

    /// Path to a TOML config file listing endpoints
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Also fetch the channel-name list and report the total channel count
    #[arg(short, long)]
    pub detailed: bool,

    /// HTTP request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
