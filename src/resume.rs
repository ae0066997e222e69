//! Minimal helpers over extracted resume text.

use regex::Regex;

/// Placeholder used when no name can be found.
pub const DEFAULT_NAME: &str = "Your Name";

/// Number of leading lines searched for a name.
const NAME_SEARCH_LINES: usize = 5;

/// Guess the candidate's name from the top of a resume.
///
/// Returns the first of the leading lines that has one to three words made
/// only of letters, spaces, dots and hyphens, or [`DEFAULT_NAME`].
pub fn extract_name(resume_text: &str) -> String {
    let name_chars = Regex::new(r"^[A-Za-z\s.\-]+$").expect("name pattern is a valid regex");

    resume_text
        .split('\n')
        .take(NAME_SEARCH_LINES)
        .map(str::trim)
        .find(|line| {
            let words = line.split_whitespace().count();
            (1..=3).contains(&words) && name_chars.is_match(line)
        })
        .map(str::to_string)
        .unwrap_or_else(|| {
            log::debug!("No name found in the first {} resume lines", NAME_SEARCH_LINES);
            DEFAULT_NAME.to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_on_first_line() {
        assert_eq!(extract_name("Jane Doe\njane@example.com\n"), "Jane Doe");
    }

    #[test]
    fn test_skips_contact_lines() {
        let resume = "jane@example.com\n+1 555 0100\n\nMary-Jane O. Smith\nEngineer";
        assert_eq!(extract_name(resume), "Mary-Jane O. Smith");
    }

    #[test]
    fn test_too_many_words() {
        assert_eq!(
            extract_name("Senior Software Engineer Resume\n2019 - 2024"),
            DEFAULT_NAME
        );
    }

    #[test]
    fn test_only_first_five_lines() {
        let resume = "1\n2\n3\n4\n5\nJane Doe";
        assert_eq!(extract_name(resume), DEFAULT_NAME);
    }

    #[test]
    fn test_empty_resume() {
        assert_eq!(extract_name(""), DEFAULT_NAME);
    }
}
