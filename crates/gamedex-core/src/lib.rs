//! gamedex-core: manifest catalog ingestion and query pipeline.
//!
//! Reads a directory of JSON manifests describing downloadable game
//! packages, flattens them into one queryable catalog, and derives
//! filtered/sorted views plus a status summary. Presentation layers (CLI,
//! GUI) only sequence these calls and render the results.
//!
//! The pipeline is synchronous and in-memory: every query is a full
//! recomputation over the base set, which stays cheap at catalog scale
//! (a few thousand records).

pub mod domain;
pub mod loader;
pub mod query;
pub mod services;
pub mod status;

// Re-export commonly used types for convenience
pub use domain::{CatalogItem, Collection, DownloadRecord, flatten};
pub use loader::{LoadOutcome, LoadWarning, PRIMARY_SOURCE_FILE, SourceMode, load_sources};
pub use query::{QueryResult, SortMode, run_query};
pub use services::Catalog;
pub use status::render_status;
