//! Binary crate for the `citytemp` command-line dashboard.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Driving the fetch pipeline
//! - Human-friendly table and summary output

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod render;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Failures still show up live on stderr; RUST_LOG=info adds per-city
    // progress lines.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
