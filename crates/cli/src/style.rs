//! ANSI styling for the interactive session.
//!
//! The escape markers are purely cosmetic; nothing parses them back and
//! tests match on the text between them.

pub const RED: &str = "\x1b[91m";
pub const GREEN: &str = "\x1b[92m";
pub const DARK_GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[93m";
pub const CYAN: &str = "\x1b[96m";
pub const BLUE: &str = "\x1b[34m";
pub const RESET: &str = "\x1b[0m";

/// Error messages (rejected input, missing records).
pub fn error(text: &str) -> String {
    paint(RED, text)
}

/// Warnings and continue prompts.
pub fn warn(text: &str) -> String {
    paint(YELLOW, text)
}

/// Success reports.
pub fn success(text: &str) -> String {
    paint(GREEN, text)
}

/// Short status lines preceding a success block.
pub fn status(text: &str) -> String {
    paint(DARK_GREEN, text)
}

/// Section headings.
pub fn heading(text: &str) -> String {
    paint(CYAN, text)
}

/// Neutral informational lines.
pub fn info(text: &str) -> String {
    paint(BLUE, text)
}

fn paint(code: &str, text: &str) -> String {
    format!("{code}{text}{RESET}")
}
