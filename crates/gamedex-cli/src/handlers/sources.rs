//! Sources command handler.
//!
//! Lists the loaded collections with their record counts, plus any
//! diagnostics the loader produced. This is the operator-facing view of
//! "what could be loaded".

use std::collections::HashMap;

use anyhow::Result;
use gamedex_core::Catalog;

use crate::presentation::{print_separator, print_warnings, truncate_string};

/// Execute the sources command.
pub fn execute(catalog: &Catalog) -> Result<()> {
    // The base set is flat; regroup by collection in first-seen (load) order.
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for item in catalog.items() {
        let name = item.collection.as_str();
        if !counts.contains_key(name) {
            order.push(name);
        }
        *counts.entry(name).or_insert(0) += 1;
    }

    if order.is_empty() {
        println!(
            "No collections loaded from '{}'.",
            catalog.source_dir().display()
        );
        print_warnings(catalog.warnings());
        return Ok(());
    }

    println!("{:<30} {:>8}", "Collection", "Items");
    print_separator(39);
    for name in &order {
        println!("{:<30} {:>8}", truncate_string(name, 29), counts[name]);
    }
    print_separator(39);
    println!("{} collection(s), {} item(s)", order.len(), catalog.total());
    print_warnings(catalog.warnings());

    Ok(())
}
