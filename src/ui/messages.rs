//! User-facing console output. Diagnostics go through `log` instead.

use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use std::fmt;
use std::io::{self, Write};

const BOLD: &str = "\x1b[1m";

const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

fn line(color: &str, icon: &str, msg: impl fmt::Display) -> String {
    format!("{color}{BOLD}{icon}{RESET} {msg}")
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", line(CYAN, ICON_INFO, msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", line(GREEN, ICON_OK, msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", line(YELLOW, ICON_WARN, msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", line(RED, ICON_ERR, msg));
}

/// Title of a screen, e.g. the day being trained.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{CYAN}{BOLD}── {msg} ──{RESET}");
}

/// Secondary detail under a header.
pub fn hint<T: fmt::Display>(msg: T) {
    println!("{GREY}{msg}{RESET}");
}

/// Rewrite the current terminal line (live timer display).
pub fn status_line<T: fmt::Display>(msg: T) {
    print!("\r\x1b[2K{msg}");
    io::stdout().flush().ok();
}
