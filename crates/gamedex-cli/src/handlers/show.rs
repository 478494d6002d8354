//! Show command handler.
//!
//! Displays full details for one catalog item: metadata plus its download
//! links. Links are only displayed, never fetched.

use anyhow::Result;
use gamedex_core::{Catalog, CatalogItem};

use crate::presentation::print_separator;

/// Execute the show command.
///
/// Looks the item up by exact (case-insensitive) title and prints the
/// detail view the GUI dialog used to show.
///
/// # Errors
///
/// Returns an error if no item with the given title exists.
pub fn execute(catalog: &Catalog, title: &str) -> Result<()> {
    let Some(item) = catalog.find_by_title(title) else {
        anyhow::bail!(
            "No item titled '{title}' in the catalog ({} item(s) loaded)",
            catalog.total()
        );
    };

    println!("{}", item.record.title);
    print_separator(item.record.title.len().max(20));
    for line in detail_lines(item) {
        println!("{line}");
    }

    Ok(())
}

/// Detail-view lines for one item.
///
/// The upload date is shown as the raw manifest string here; only the list
/// table reformats dates for display.
fn detail_lines(item: &CatalogItem) -> Vec<String> {
    let mut lines = vec![
        format!("{:<12} {}", "Collection:", item.collection),
        format!("{:<12} {}", "Size:", item.record.file_size),
        format!("{:<12} {}", "Uploaded:", item.record.upload_date),
    ];

    if item.record.uris.is_empty() {
        lines.push(format!("{:<12} none", "Links:"));
    } else {
        lines.push("Links:".to_string());
        for uri in &item.record.uris {
            lines.push(format!("  {uri}"));
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamedex_core::DownloadRecord;

    fn item(date: &str, uris: Vec<String>) -> CatalogItem {
        CatalogItem {
            collection: "GameA".to_string(),
            record: DownloadRecord {
                title: "Alpha Build".to_string(),
                uris,
                upload_date: date.to_string(),
                file_size: "1.2 GB".to_string(),
            },
        }
    }

    #[test]
    fn test_detail_shows_raw_upload_date() {
        // Valid dates are NOT reformatted in the detail view.
        let lines = detail_lines(&item("2023-01-01", vec![]));
        assert!(lines.contains(&"Uploaded:    2023-01-01".to_string()));
    }

    #[test]
    fn test_detail_lists_every_link() {
        let lines = detail_lines(&item(
            "2023-01-01",
            vec!["https://a.example".to_string(), "https://b.example".to_string()],
        ));
        assert!(lines.contains(&"Links:".to_string()));
        assert!(lines.contains(&"  https://b.example".to_string()));
    }

    #[test]
    fn test_detail_without_links_says_none() {
        let lines = detail_lines(&item("2023-01-01", vec![]));
        assert!(lines.iter().any(|l| l.starts_with("Links:") && l.ends_with("none")));
    }

    #[test]
    fn test_execute_fails_for_unknown_title() {
        let catalog = Catalog::new("/nonexistent/sources");
        let err = execute(&catalog, "Missing Game").unwrap_err();
        assert!(err.to_string().contains("Missing Game"));
    }
}
