//! Status projection: "shown vs. total" summary for a status area.

/// Render the catalog status line.
///
/// When every item is shown only the total is reported; otherwise the
/// shown/total ratio. An empty result (`0/N`) is a normal state here, not
/// an error.
pub fn render_status(shown: usize, total: usize) -> String {
    if shown == total {
        format!("{total} items")
    } else {
        format!("{shown}/{total} items")
    }
}
