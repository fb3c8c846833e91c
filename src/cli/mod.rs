//! Command-line interface for likes-export.
//!
//! This module provides CLI commands for exporting liked music, inspecting
//! existing exports, and storing defaults in the config file.

mod commands;

pub use commands::{Cli, Commands, run_command};
