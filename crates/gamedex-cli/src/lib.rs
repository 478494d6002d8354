//! gamedex-cli: presentation adapter over the gamedex-core pipeline.
//!
//! Owns a [`gamedex_core::Catalog`], sequences reload and query calls from
//! the parsed command line, and renders the result views. All filtering and
//! ordering lives in the core; this crate is format-only.
#![deny(unsafe_code)]

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use commands::{Commands, SortArg};
pub use parser::Cli;
