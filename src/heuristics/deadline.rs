// src/heuristics/deadline.rs
//
// Deadline lead-in scan. Heuristic: it finds the first
// "deadline / due by / apply by / application deadline" phrase followed by a
// month-name or slash date and returns the date text as written. It does not
// validate dates and misses any other phrasing.

use std::sync::LazyLock;

use regex::Regex;

static DEADLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)(?:deadline|due by|apply by|application deadline):?\s*([a-zA-Z]+\s+\d{1,2}(?:st|nd|rd|th)?(?:,\s*\d{4})?|\d{1,2}/\d{1,2}(?:/\d{2,4})?)",
    )
    .expect("deadline pattern is valid")
});

/// Date text of the first lead-in match, if any.
pub fn extract_deadline(text: &str) -> Option<String> {
    DEADLINE_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| s!(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_name_with_ordinal_and_year() {
        assert_eq!(
            extract_deadline("Apply by March 1st, 2025 for priority").as_deref(),
            Some("March 1st, 2025")
        );
    }

    #[test]
    fn slash_dates_and_colon() {
        assert_eq!(extract_deadline("Deadline: 12/01/24.").as_deref(), Some("12/01/24"));
        assert_eq!(extract_deadline("due by 3/15").as_deref(), Some("3/15"));
    }

    #[test]
    fn first_match_only() {
        let text = "Due by January 5. Final deadline February 20, 2026.";
        assert_eq!(extract_deadline(text).as_deref(), Some("January 5"));
    }

    #[test]
    fn no_lead_in() {
        assert_eq!(extract_deadline("Awarded every March 1st, 2025"), None);
        assert_eq!(extract_deadline(""), None);
    }
}
