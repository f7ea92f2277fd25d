//! Styled output helpers for CLI diagnostics.
//!
//! Diagnostics go to stderr so stdout carries only query results.

use console::style;

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("{} {}", style("✗").red().bold(), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!("{} {}", style("!").yellow().bold(), message);
}

/// Print a section rule.
pub fn rule() {
    println!("{}", style("=".repeat(80)).dim());
}

/// Print a header/section title.
pub fn header(message: &str) {
    println!("{}", style(message).bold());
}
