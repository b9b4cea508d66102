/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Colored rendering of an optional time cell; missing values show as
/// greyed-out "--:--".
pub fn colorize_time_cell(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => format!("{GREEN}{v}{RESET}"),
        _ => format!("{GREY}--:--{RESET}"),
    }
}
