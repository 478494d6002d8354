//! Flattened catalog projection.
//!
//! The query pipeline does not operate on collections directly; it operates
//! on a flat sequence of (collection name, record) pairs produced here.

use super::manifest::{Collection, DownloadRecord};

/// One record of the flattened catalog, tagged with its owning collection.
///
/// Read-only to all downstream consumers; the query engine hands out
/// references into this set, never copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogItem {
    /// Name of the collection the record came from.
    pub collection: String,
    /// The record itself.
    pub record: DownloadRecord,
}

/// Flatten collections into the base catalog set.
///
/// Pure concatenation: per-collection record order is preserved and
/// collections appear in input order. Empty input yields empty output.
pub fn flatten(collections: &[Collection]) -> Vec<CatalogItem> {
    collections
        .iter()
        .flat_map(|collection| {
            collection.records.iter().map(|record| CatalogItem {
                collection: collection.name.clone(),
                record: record.clone(),
            })
        })
        .collect()
}
