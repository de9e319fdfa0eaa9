//! Colored status lines for the terminal.
//!
//! Thin wrappers so the commands agree on how informational, success and
//! failure lines look.

use colored::Colorize;

/// Print an informational line.
pub fn info(text: &str) {
    println!("{}", text.blue());
}

/// Print a success line.
pub fn ok(text: &str) {
    println!("{}", text.green());
}

/// Print a warning line.
pub fn warn(text: &str) {
    println!("{}", text.yellow());
}

/// Print a failure line to stderr.
pub fn error(text: &str) {
    eprintln!("{}", text.red());
}
