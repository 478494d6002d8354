//! Main commands enum and primary subcommands.
//!
//! This module defines the available commands for the CLI tool.

use clap::{Subcommand, ValueEnum};
use gamedex_core::SortMode;

/// Available commands for the catalog browser.
#[derive(Subcommand)]
pub enum Commands {
    /// List catalog items, optionally filtered and sorted
    List {
        /// Retain only items whose title or collection contains this text
        #[arg(short, long)]
        search: Option<String>,
        /// Result ordering
        #[arg(long, value_enum, default_value_t = SortArg::TitleAsc)]
        sort: SortArg,
        /// Load only the multiplayer (primary) source
        #[arg(short, long)]
        multiplayer: bool,
    },

    /// Show full details for one item, including its download links
    Show {
        /// Exact item title (case-insensitive)
        title: String,
        /// Load only the multiplayer (primary) source
        #[arg(short, long)]
        multiplayer: bool,
    },

    /// List loaded source collections and any load diagnostics
    Sources {
        /// Load only the multiplayer (primary) source
        #[arg(short, long)]
        multiplayer: bool,
    },
}

/// CLI-facing sort selector, mapped onto the core [`SortMode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    /// Title A-Z
    TitleAsc,
    /// Title Z-A
    TitleDesc,
    /// Upload date, newest first
    DateNewest,
    /// Upload date, oldest first
    DateOldest,
    /// Size label, descending
    SizeDesc,
    /// Size label, ascending
    SizeAsc,
}

impl From<SortArg> for SortMode {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::TitleAsc => Self::TitleAsc,
            SortArg::TitleDesc => Self::TitleDesc,
            SortArg::DateNewest => Self::DateNewest,
            SortArg::DateOldest => Self::DateOldest,
            SortArg::SizeDesc => Self::SizeDesc,
            SortArg::SizeAsc => Self::SizeAsc,
        }
    }
}
