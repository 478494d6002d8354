//! Catalog service - owns the base catalog set and sequences the pipeline.
//!
//! The service only sequences Loader -> Flattener -> Query Engine calls and
//! holds the immutable base set between reloads. Records are never mutated
//! in place; every query derives a fresh view.

use std::path::{Path, PathBuf};

use crate::domain::{CatalogItem, flatten};
use crate::loader::{LoadWarning, SourceMode, load_sources};
use crate::query::{QueryResult, SortMode, run_query};

/// Owned catalog state for one sources directory.
pub struct Catalog {
    source_dir: PathBuf,
    mode: SourceMode,
    items: Vec<CatalogItem>,
    warnings: Vec<LoadWarning>,
}

impl Catalog {
    /// Create an empty catalog for `source_dir`. Nothing is loaded until
    /// [`Catalog::reload`] runs.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        Self {
            source_dir: source_dir.into(),
            mode: SourceMode::default(),
            items: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Rebuild the base set from disk: load under `mode`, then flatten.
    ///
    /// Replaces the previous base set and warnings wholesale. Load failures
    /// surface as [`Catalog::warnings`], never as an error.
    pub fn reload(&mut self, mode: SourceMode) {
        let outcome = load_sources(&self.source_dir, mode);
        self.mode = mode;
        self.items = flatten(&outcome.collections);
        self.warnings = outcome.warnings;
    }

    /// Derive the visible view for `query` under `sort`.
    pub fn run_query(&self, query: &str, sort: SortMode) -> QueryResult<'_> {
        run_query(&self.items, query, sort)
    }

    /// The sources directory this catalog reads from.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// Mode of the most recent reload.
    pub fn mode(&self) -> SourceMode {
        self.mode
    }

    /// The flattened base set, in load order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Size of the base set.
    pub fn total(&self) -> usize {
        self.items.len()
    }

    /// Diagnostics from the most recent reload.
    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    /// Look up an item by title, case-insensitively. First match wins in
    /// base-set order.
    pub fn find_by_title(&self, title: &str) -> Option<&CatalogItem> {
        let needle = title.to_lowercase();
        self.items
            .iter()
            .find(|item| item.record.title.to_lowercase() == needle)
    }
}
