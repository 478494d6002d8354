//! Query engine: filter + ordered view over the flattened catalog.
//!
//! Every call recomputes the full result from the base set; there is no
//! incremental diffing. Results are references into the base set, never
//! copies.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::domain::CatalogItem;
use crate::status::render_status;

/// Selectable result ordering.
///
/// Title comparisons are case-sensitive codepoint order (`str::cmp`). Size
/// comparisons are raw lexicographic order on the human-readable label; the
/// manifests carry no byte counts, so this coarse ordering is the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Title A-Z (the initial mode).
    #[default]
    TitleAsc,
    /// Title Z-A.
    TitleDesc,
    /// Upload date, newest first. Malformed dates sort after all valid ones.
    DateNewest,
    /// Upload date, oldest first. Malformed dates sort before all valid ones.
    DateOldest,
    /// Size label, descending.
    SizeDesc,
    /// Size label, ascending.
    SizeAsc,
}

impl SortMode {
    /// Compare two catalog items under this mode.
    ///
    /// Malformed upload dates behave as infinitely old: equal to each other
    /// (preserving stable order), older than every parseable date. All
    /// comparator branches return `Equal` on ties so the stable sort keeps
    /// the original relative order.
    pub fn compare(self, a: &CatalogItem, b: &CatalogItem) -> Ordering {
        match self {
            Self::TitleAsc => a.record.title.cmp(&b.record.title),
            Self::TitleDesc => b.record.title.cmp(&a.record.title),
            Self::DateNewest => compare_dates(b.record.parsed_date(), a.record.parsed_date()),
            Self::DateOldest => compare_dates(a.record.parsed_date(), b.record.parsed_date()),
            Self::SizeDesc => b.record.file_size.cmp(&a.record.file_size),
            Self::SizeAsc => a.record.file_size.cmp(&b.record.file_size),
        }
    }
}

/// Ascending date compare with `None` (malformed) below every valid date.
fn compare_dates(a: Option<NaiveDate>, b: Option<NaiveDate>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

/// The filtered, sorted, render-ready view over the base catalog set.
///
/// Transient: superseded wholesale by the next query, never mutated.
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    /// Matching items in comparator order.
    pub items: Vec<&'a CatalogItem>,
    /// Size of the base set the filter ran against.
    pub total: usize,
}

impl QueryResult<'_> {
    /// Number of items in the view.
    pub fn shown(&self) -> usize {
        self.items.len()
    }

    /// Human-readable "shown vs. total" summary for a status area.
    pub fn status_line(&self) -> String {
        render_status(self.shown(), self.total)
    }
}

/// Run a query over the base set.
///
/// An empty `query` keeps the full base set in base order; otherwise items
/// are retained when the title or the collection name contains `query` as a
/// case-insensitive substring. The retained items are then stably sorted
/// under `sort`. This never fails: malformed data degrades into comparator
/// decisions.
pub fn run_query<'a>(base: &'a [CatalogItem], query: &str, sort: SortMode) -> QueryResult<'a> {
    let needle = query.to_lowercase();
    let mut items: Vec<&CatalogItem> = if needle.is_empty() {
        base.iter().collect()
    } else {
        base.iter()
            .filter(|item| {
                item.record.title.to_lowercase().contains(&needle)
                    || item.collection.to_lowercase().contains(&needle)
            })
            .collect()
    };

    items.sort_by(|a, b| sort.compare(a, b));

    QueryResult {
        items,
        total: base.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DownloadRecord;

    fn item(collection: &str, title: &str, date: &str, size: &str) -> CatalogItem {
        CatalogItem {
            collection: collection.to_string(),
            record: DownloadRecord {
                title: title.to_string(),
                uris: vec![],
                upload_date: date.to_string(),
                file_size: size.to_string(),
            },
        }
    }

    fn titles<'a>(result: &'a QueryResult<'_>) -> Vec<&'a str> {
        result
            .items
            .iter()
            .map(|i| i.record.title.as_str())
            .collect()
    }

    #[test]
    fn test_empty_query_returns_base_in_base_order() {
        let base = vec![
            item("G", "bbb", "", ""),
            item("G", "aaa", "", ""),
            item("G", "ccc", "", ""),
        ];
        // Default mode would reorder; use a mode where all keys tie instead.
        let result = run_query(&base, "", SortMode::DateNewest);
        assert_eq!(titles(&result), vec!["bbb", "aaa", "ccc"]);
        assert_eq!(result.total, 3);
    }

    #[test]
    fn test_filter_is_case_insensitive_substring() {
        let base = vec![
            item("G", "Warframe", "", ""),
            item("G", "Starwars Edition", "", ""),
            item("G", "Peace Sim", "", ""),
        ];
        let result = run_query(&base, "war", SortMode::TitleAsc);
        assert_eq!(titles(&result), vec!["Starwars Edition", "Warframe"]);
    }

    #[test]
    fn test_filter_matches_collection_name_too() {
        let base = vec![
            item("Warzone Pack", "Something Else", "", ""),
            item("Calm Pack", "Nothing Here", "", ""),
        ];
        let result = run_query(&base, "war", SortMode::TitleAsc);
        assert_eq!(titles(&result), vec!["Something Else"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let base = vec![
            item("G", "Warframe", "", ""),
            item("G", "Peace Sim", "", ""),
        ];
        let once = run_query(&base, "war", SortMode::TitleAsc);
        let again: Vec<CatalogItem> = once.items.iter().map(|i| (*i).clone()).collect();
        let twice = run_query(&again, "war", SortMode::TitleAsc);
        assert_eq!(titles(&twice), titles(&once));
    }

    #[test]
    fn test_title_sort_both_directions() {
        let base = vec![
            item("G", "beta", "", ""),
            item("G", "alpha", "", ""),
            item("G", "gamma", "", ""),
        ];
        let asc = run_query(&base, "", SortMode::TitleAsc);
        assert_eq!(titles(&asc), vec!["alpha", "beta", "gamma"]);
        let desc = run_query(&base, "", SortMode::TitleDesc);
        assert_eq!(titles(&desc), vec!["gamma", "beta", "alpha"]);
    }

    #[test]
    fn test_date_tie_break_newest_first() {
        let base = vec![
            item("G", "valid-new", "2024-01-01", ""),
            item("G", "broken", "<malformed>", ""),
            item("G", "valid-old", "2023-06-15", ""),
        ];
        let result = run_query(&base, "", SortMode::DateNewest);
        assert_eq!(titles(&result), vec!["valid-new", "valid-old", "broken"]);
    }

    #[test]
    fn test_date_tie_break_oldest_first() {
        let base = vec![
            item("G", "valid-new", "2024-01-01", ""),
            item("G", "broken", "<malformed>", ""),
            item("G", "valid-old", "2023-06-15", ""),
        ];
        let result = run_query(&base, "", SortMode::DateOldest);
        assert_eq!(titles(&result), vec!["broken", "valid-old", "valid-new"]);
    }

    #[test]
    fn test_two_malformed_dates_keep_relative_order() {
        let base = vec![
            item("G", "broken-1", "???", ""),
            item("G", "broken-2", "n/a", ""),
            item("G", "valid", "2024-05-05", ""),
        ];
        let newest = run_query(&base, "", SortMode::DateNewest);
        assert_eq!(titles(&newest), vec!["valid", "broken-1", "broken-2"]);
        let oldest = run_query(&base, "", SortMode::DateOldest);
        assert_eq!(titles(&oldest), vec!["broken-1", "broken-2", "valid"]);
    }

    #[test]
    fn test_size_sort_is_lexicographic_on_label() {
        // "12 GB" < "3 GB" lexicographically; that ordering is the contract.
        let base = vec![
            item("G", "small-label", "", "12 GB"),
            item("G", "big-label", "", "3 GB"),
        ];
        let asc = run_query(&base, "", SortMode::SizeAsc);
        assert_eq!(titles(&asc), vec!["small-label", "big-label"]);
        let desc = run_query(&base, "", SortMode::SizeDesc);
        assert_eq!(titles(&desc), vec!["big-label", "small-label"]);
    }

    #[test]
    fn test_sort_is_stable_on_equal_keys() {
        let base = vec![
            item("first", "same", "2024-01-01", "1 GB"),
            item("second", "same", "2024-01-01", "1 GB"),
            item("third", "same", "2024-01-01", "1 GB"),
        ];
        for mode in [
            SortMode::TitleAsc,
            SortMode::TitleDesc,
            SortMode::DateNewest,
            SortMode::DateOldest,
            SortMode::SizeDesc,
            SortMode::SizeAsc,
        ] {
            let result = run_query(&base, "", mode);
            let collections: Vec<&str> =
                result.items.iter().map(|i| i.collection.as_str()).collect();
            assert_eq!(collections, vec!["first", "second", "third"]);
        }
    }

    #[test]
    fn test_no_match_is_an_empty_view_not_an_error() {
        let base = vec![item("G", "Warframe", "", "")];
        let result = run_query(&base, "zzz", SortMode::TitleAsc);
        assert!(result.items.is_empty());
        assert_eq!(result.status_line(), "0/1 items");
    }
}
