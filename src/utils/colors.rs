/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const LIME: &str = "\x1b[92m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Week progress color:
/// 100 → lime
/// \>0 → yellow
/// 0 → grey
pub fn color_for_progress(percentage: u32) -> &'static str {
    if percentage >= 100 {
        LIME
    } else if percentage > 0 {
        YELLOW
    } else {
        GREY
    }
}

/// Grey placeholder for values the user has not entered yet.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() {
        format!("{GREY}--{RESET}")
    } else {
        value.to_string()
    }
}

/// Remove ANSI escape sequences, used to measure the visible width.
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            for c2 in chars.by_ref() {
                if c2 == 'm' {
                    break;
                }
            }
        } else {
            out.push(c);
        }
    }
    out
}
