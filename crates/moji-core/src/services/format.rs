/// Format a relevance score for display on a tile
/// Always two decimal places, e.g. 0.5 -> "Score: 0.50"
pub fn format_score(score: f64) -> String {
    format!("Score: {:.2}", score)
}

/// Format a duration in milliseconds for log lines
pub fn format_elapsed(millis: u128) -> String {
    if millis < 1000 {
        format!("{}ms", millis)
    } else {
        format!("{:.1}s", millis as f64 / 1000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_score_pads() {
        assert_eq!(format_score(0.5), "Score: 0.50");
        assert_eq!(format_score(1.0), "Score: 1.00");
        assert_eq!(format_score(0.0), "Score: 0.00");
    }

    #[test]
    fn test_format_score_rounds() {
        assert_eq!(format_score(0.123), "Score: 0.12");
        assert_eq!(format_score(0.996), "Score: 1.00");
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(42), "42ms");
        assert_eq!(format_elapsed(1500), "1.5s");
    }
}
