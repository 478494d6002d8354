//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (filesystem, rendering, etc.).
//!
//! # Structure
//!
//! - `manifest` - Manifest wire types (`DownloadRecord`, `Collection`)
//! - `catalog` - Flattened catalog projection (`CatalogItem`, `flatten`)

pub mod catalog;
pub mod manifest;

// Re-export domain types at the domain level for convenience
pub use catalog::{CatalogItem, flatten};
pub use manifest::{Collection, DownloadRecord};
