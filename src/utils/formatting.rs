//! Formatting utilities used for CLI and export outputs.

use super::colors::{GREEN, GREY, RESET};

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

/// Whole numbers without a trailing `.0`, everything else with one decimal.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Text progress bar, e.g. `[#####.....]  50%`.
pub fn progress_bar(percentage: u32, width: usize) -> String {
    let pct = percentage.min(100) as usize;
    let filled = pct * width / 100;
    let color = if pct == 100 { GREEN } else { RESET };
    format!(
        "{color}[{}{GREY}{}{color}]{RESET} {:>3}%",
        "#".repeat(filled),
        ".".repeat(width - filled),
        pct
    )
}

/// Check mark column for done/not done.
pub fn check_mark(done: bool) -> String {
    if done {
        format!("{GREEN}✓{RESET}")
    } else {
        format!("{GREY}·{RESET}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1000.0), "1000");
        assert_eq!(format_amount(2.4), "2.4");
    }

    #[test]
    fn test_progress_bar_fill() {
        let bar = progress_bar(50, 10);
        assert!(bar.contains("#####"));
        assert!(bar.contains(" 50%"));
        assert!(progress_bar(250, 4).contains("100%"));
    }
}
