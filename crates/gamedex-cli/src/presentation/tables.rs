//! Table formatting utilities for CLI output.

use gamedex_core::LoadWarning;

/// Truncates a string to a maximum length, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use gamedex_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Hello", 10), "Hello");
/// assert_eq!(truncate_string("Hello World", 8), "Hello...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    // Titles are not ASCII-only; back the cut up to a char boundary so the
    // slice never lands inside a multibyte character.
    let mut cut = max_len.saturating_sub(3);
    while !s.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &s[..cut])
}

/// Print a horizontal separator line.
pub fn print_separator(width: usize) {
    println!("{}", "-".repeat(width));
}

/// Print load diagnostics as a status area, one warning per line.
///
/// Warnings are non-fatal; this surfaces them next to the results instead
/// of leaving them only on the log stream.
pub fn print_warnings(warnings: &[LoadWarning]) {
    if warnings.is_empty() {
        return;
    }
    println!();
    println!("Load warnings ({}):", warnings.len());
    for warning in warnings {
        println!("  ! {warning}");
    }
}
