//! CLI entry point - the composition root.
//!
//! Builds the catalog from the sources directory, reloads it under the
//! requested source mode, and dispatches to command handlers. Handlers
//! only format output; the pipeline lives in gamedex-core.

use clap::Parser;

use gamedex_cli::{Cli, Commands, handlers};
use gamedex_core::{Catalog, SourceMode};

fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG still wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();

    // Dispatch to appropriate handler
    let Some(command) = cli.command else {
        // No command provided - show help
        use clap::CommandFactory;
        Cli::command().print_help()?;
        return Ok(());
    };

    let mut catalog = Catalog::new(&cli.sources_dir);

    match command {
        Commands::List {
            search,
            sort,
            multiplayer,
        } => {
            catalog.reload(source_mode(multiplayer));
            handlers::list::execute(&catalog, search.as_deref(), sort.into())
        }
        Commands::Show { title, multiplayer } => {
            catalog.reload(source_mode(multiplayer));
            handlers::show::execute(&catalog, &title)
        }
        Commands::Sources { multiplayer } => {
            catalog.reload(source_mode(multiplayer));
            handlers::sources::execute(&catalog)
        }
    }
}

const fn source_mode(multiplayer: bool) -> SourceMode {
    if multiplayer {
        SourceMode::PrimaryOnly
    } else {
        SourceMode::AllSources
    }
}
