//! Time utilities: timer display, session elapsed display, "MM:SS" parsing.

/// Timer display `MM:SS`. Minutes keep growing past 59, there is no hour field.
pub fn format_time(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Session display `HH:MM:SS`.
pub fn format_elapsed(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds % 60)
}

/// Parse a logged time such as `"24:30"` or `"1:02:03"` into seconds.
pub fn parse_clock(value: &str) -> Option<u64> {
    let parts: Vec<&str> = value.trim().split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }

    let mut total = 0u64;
    for (i, p) in parts.iter().enumerate() {
        let n: u64 = p.trim().parse().ok()?;
        // every field after the first is base 60
        if i > 0 && n >= 60 {
            return None;
        }
        total = total * 60 + n;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(65), "01:05");
        assert_eq!(format_time(3600), "60:00");
        assert_eq!(format_time(6001), "100:01");
    }

    #[test]
    fn test_format_time_matches_pad_rule() {
        for t in [0u64, 1, 59, 60, 61, 599, 600, 3599, 7322] {
            let expected = format!("{:02}:{:02}", t / 60, t % 60);
            assert_eq!(format_time(t), expected);
        }
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(0), "00:00:00");
        assert_eq!(format_elapsed(3725), "01:02:05");
    }

    #[test]
    fn test_parse_clock() {
        assert_eq!(parse_clock("24:30"), Some(1470));
        assert_eq!(parse_clock("1:02:03"), Some(3723));
        assert_eq!(parse_clock("12"), None);
        assert_eq!(parse_clock("4:75"), None);
        assert_eq!(parse_clock("ab:cd"), None);
    }
}
