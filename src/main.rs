//! likes-export - export liked music from Yandex Music.
//!
//! Fetches liked artists, albums, tracks and playlists, resolves track
//! details and playlist covers, and writes everything to a JSON or YAML
//! file with a chosen sort order.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod remote;
pub mod subject;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("likes_export=info".parse()?))
        .init();

    cli::run_command(&args)
}
