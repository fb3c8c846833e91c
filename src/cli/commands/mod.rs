//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `export`: Fetch liked music and write it to a JSON or YAML file
//! - `inspect`: Summarize an existing export
//! - `configure`: Store the token and export defaults in the config file

mod configure;
mod export;
mod inspect;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tokio::runtime::Runtime;

use crate::config::{self, Config};
use crate::subject::{SortBy, SubjectKind};

pub use configure::cmd_configure;
pub use export::cmd_export;
pub use inspect::cmd_inspect;

/// Export liked music from Yandex Music
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Export liked artists, albums, tracks and playlists
    Export {
        /// OAuth token (or set YM_TOKEN env var)
        #[arg(short, long, env = "YM_TOKEN", hide_env_values = true)]
        token: Option<String>,
        /// Subjects to export; repeat to pick several (default: all)
        #[arg(short, long = "subjects", alias = "subject", value_enum)]
        subjects: Vec<SubjectKind>,
        /// Output file; the suffix picks the format (.json, .yaml, .yml)
        #[arg(short, long)]
        output: PathBuf,
        /// Order of exported items (default: from config, then oldest)
        #[arg(long, value_enum)]
        sort: Option<SortBy>,
        /// Requested playlist cover size, e.g. 400x400
        #[arg(long)]
        cover_size: Option<String>,
    },
    /// Print a summary of an existing export file
    Inspect {
        /// Path to a .json or .yaml export
        path: PathBuf,
    },
    /// Store the token and export defaults in the config file
    Configure {
        /// OAuth token to store
        #[arg(short, long)]
        token: Option<String>,
        /// Default sort policy
        #[arg(long, value_enum)]
        sort: Option<SortBy>,
        /// Default cover size
        #[arg(long)]
        cover_size: Option<String>,
    },
}

/// Run the specified CLI command.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Export {
            token,
            subjects,
            output,
            sort,
            cover_size,
        } => {
            let rt = Runtime::new()?;
            let config = load_config(cli);
            cmd_export(
                &rt,
                &config,
                token.as_deref(),
                subjects,
                output,
                *sort,
                cover_size.as_deref(),
            )
        }
        Commands::Inspect { path } => cmd_inspect(path),
        Commands::Configure {
            token,
            sort,
            cover_size,
        } => cmd_configure(
            cli.config.as_deref(),
            token.as_deref(),
            *sort,
            cover_size.as_deref(),
        ),
    }
}

fn load_config(cli: &Cli) -> Config {
    match &cli.config {
        Some(path) => config::load_from(path),
        None => config::load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_export_flags() {
        let cli = Cli::try_parse_from([
            "likes-export",
            "export",
            "-o",
            "out.yaml",
            "--subjects",
            "tracks",
            "--subject",
            "playlists",
            "--sort",
            "lexical-desc",
        ])
        .unwrap();

        match cli.command {
            Commands::Export {
                subjects,
                output,
                sort,
                cover_size,
                ..
            } => {
                assert_eq!(subjects, vec![SubjectKind::Tracks, SubjectKind::Playlists]);
                assert_eq!(output, PathBuf::from("out.yaml"));
                assert_eq!(sort, Some(SortBy::LexicalDesc));
                assert!(cover_size.is_none());
            }
            _ => panic!("expected export command"),
        }
    }

    #[test]
    fn test_export_requires_output() {
        assert!(Cli::try_parse_from(["likes-export", "export"]).is_err());
    }
}
