//! ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Tile color: green when the day counts toward pay, red otherwise.
pub fn color_for_tile(included: bool) -> &'static str {
    if included { GREEN } else { RED }
}

/// Amount color:
/// \>0 → reset
/// \<0 → red (inverted interval)
/// 0 → grey
pub fn color_for_amount(value: f64) -> &'static str {
    if value < 0.0 {
        RED
    } else if value == 0.0 {
        GREY
    } else {
        RESET
    }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
