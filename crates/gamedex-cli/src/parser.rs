//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use clap::Parser;

use crate::commands::Commands;

/// Command-line interface definition for the manifest catalog browser.
///
/// This is the top-level parser that handles global options and dispatches
/// to subcommands.
#[derive(Parser)]
#[command(name = "gamedex")]
#[command(about = "Browse downloadable game packages described by JSON manifests")]
#[command(version)]
pub struct Cli {
    /// Directory holding the source manifests
    #[arg(long = "sources-dir", global = true, default_value = "sources")]
    pub sources_dir: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
