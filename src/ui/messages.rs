//! Colored one-line messages for the terminal.

use crate::utils::colors::{CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

const BOLD: &str = "\x1b[1m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{CYAN}{BOLD}{ICON_INFO}{RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}{ICON_OK}{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}{ICON_WARN}{RESET} {msg}");
}

/// Errors go to stderr so that scripted sessions keep a clean stdout.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}{ICON_ERR}{RESET} {msg}");
}

/// Section header, e.g. `==== Bi-Weekly Pay Details`.
pub fn header<T: fmt::Display>(msg: T) {
    println!("\n{CYAN}{BOLD}==================== {msg}{RESET}\n");
}
