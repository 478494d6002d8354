//! List command handler.
//!
//! Displays the filtered, sorted catalog in a formatted table with a
//! status line underneath.

use anyhow::Result;
use gamedex_core::{Catalog, SortMode};

use crate::presentation::{print_separator, print_warnings, truncate_string};

/// Execute the list command.
///
/// Runs one query over the loaded catalog and renders the result view:
/// title, owning collection, size label, and upload date per item.
pub fn execute(catalog: &Catalog, search: Option<&str>, sort: SortMode) -> Result<()> {
    let result = catalog.run_query(search.unwrap_or(""), sort);

    if result.items.is_empty() {
        if catalog.total() == 0 {
            println!("No catalog items loaded.");
            println!(
                "Place manifest files under '{}' and run 'gamedex list' again.",
                catalog.source_dir().display()
            );
        } else {
            println!("No items match the current search.");
        }
        println!("{}", result.status_line());
        print_warnings(catalog.warnings());
        return Ok(());
    }

    println!(
        "{:<40} {:<20} {:<10} {:<12}",
        "Title", "Collection", "Size", "Uploaded"
    );
    print_separator(84);

    for item in &result.items {
        println!(
            "{:<40} {:<20} {:<10} {:<12}",
            truncate_string(&item.record.title, 39),
            truncate_string(&item.collection, 19),
            truncate_string(&item.record.file_size, 9),
            item.record.display_date()
        );
    }

    print_separator(84);
    println!("{}", result.status_line());
    print_warnings(catalog.warnings());

    Ok(())
}
