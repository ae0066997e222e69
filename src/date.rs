//! Long-form date lines ("March 03, 2025").

use chrono::{Local, NaiveDate};
use regex::Regex;

/// `chrono` format string producing the long-form date line.
pub const DATE_FORMAT: &str = "%B %d, %Y";

/// Pattern for a long-form date at the start of a trimmed line.
///
/// Only the start is anchored, so trailing text after the year still counts.
pub const DATE_PATTERN: &str = r"^[A-Z][a-z]+ \d{1,2}, \d{4}";

/// Matcher for long-form date lines.
#[derive(Debug, Clone)]
pub struct DateMatcher {
    regex: Regex,
}

impl DateMatcher {
    /// Create a matcher for [`DATE_PATTERN`].
    pub fn new() -> Self {
        Self {
            regex: Regex::new(DATE_PATTERN).expect("date pattern is a valid regex"),
        }
    }

    /// Check whether the trimmed line starts with a long-form date.
    pub fn is_date_line(&self, line: &str) -> bool {
        self.regex.is_match(line.trim())
    }
}

impl Default for DateMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Format a date the way generated letters state it.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Today's date as a letter date line, in local time.
pub fn today_line() -> String {
    format_date(Local::now().date_naive())
}
