//! Single-pass structuring of generated letter text.
//!
//! Every line is classified exactly once, walking a three-state machine:
//!
//! ```text
//! SeekingDate --date line--------------> InBody
//! SeekingDate --paragraph text---------> InBody
//! SeekingDate --closing token----------> InSignature
//! InBody      --closing token----------> InSignature
//! InSignature --(any line)-------------> InSignature
//! ```
//!
//! Blank lines never change state; outside the signature block they close
//! the paragraph being accumulated.

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

use crate::date::DateMatcher;
use crate::model::StructuredDocument;

use super::ParseOptions;

/// Parser state while walking the lines of a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseState {
    /// Top of the letter, a date line may still be captured
    SeekingDate,
    /// Body content has started (or the date was captured)
    InBody,
    /// Closing block reached; never left
    InSignature,
}

/// How a single input line was classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// The captured date line
    Date,
    /// Part of a body paragraph
    Paragraph,
    /// Part of the signature block (blank lines inside it included)
    Signature,
    /// Paragraph separator
    Blank,
}

/// Turns raw letter text into a [`StructuredDocument`].
#[derive(Debug, Clone)]
pub struct LetterStructurer {
    options: ParseOptions,
    dates: DateMatcher,
}

impl LetterStructurer {
    /// Create a structurer with the given options.
    pub fn new(options: ParseOptions) -> Self {
        Self {
            options,
            dates: DateMatcher::new(),
        }
    }

    /// Get the structuring options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Structure a letter. Never fails: missing regions come back empty.
    pub fn structure(&self, text: &str) -> StructuredDocument {
        self.run(text).0
    }

    /// Classify every line of the input, in order.
    ///
    /// The returned vector has one entry per `\n`-separated line.
    pub fn classify(&self, text: &str) -> Vec<LineKind> {
        self.run(text).1
    }

    fn run(&self, text: &str) -> (StructuredDocument, Vec<LineKind>) {
        let text: Cow<'_, str> = if self.options.normalize_unicode {
            Cow::Owned(text.nfc().collect())
        } else {
            Cow::Borrowed(text)
        };

        let mut pass = Pass::new();
        let kinds: Vec<LineKind> = text.split('\n').map(|line| self.step(&mut pass, line)).collect();
        let doc = pass.finish();

        log::debug!(
            "Structured letter: {} lines, date={}, {} paragraphs, {} signature lines",
            kinds.len(),
            doc.has_date(),
            doc.paragraph_count(),
            doc.signature_lines().len()
        );
        if !doc.has_signature() && doc.paragraph_count() > 0 {
            log::warn!("No closing block found; signature region will be empty");
        }

        (doc, kinds)
    }

    fn step(&self, pass: &mut Pass, line: &str) -> LineKind {
        let trimmed = line.trim();

        if pass.state == ParseState::SeekingDate
            && self.options.detect_date
            && self.dates.is_date_line(trimmed)
        {
            pass.date_line = trimmed.to_string();
            pass.state = ParseState::InBody;
            return LineKind::Date;
        }

        if pass.state == ParseState::InSignature || self.options.is_closing_line(line) {
            pass.state = ParseState::InSignature;
            if !trimmed.is_empty() {
                pass.signature_lines.push(trimmed.to_string());
            }
            return LineKind::Signature;
        }

        if trimmed.is_empty() {
            pass.flush();
            return LineKind::Blank;
        }

        pass.state = ParseState::InBody;
        pass.buffer.push(trimmed.to_string());
        LineKind::Paragraph
    }
}

impl Default for LetterStructurer {
    fn default() -> Self {
        Self::new(ParseOptions::default())
    }
}

/// Mutable state of one structuring pass.
struct Pass {
    state: ParseState,
    date_line: String,
    paragraphs: Vec<String>,
    signature_lines: Vec<String>,
    buffer: Vec<String>,
}

impl Pass {
    fn new() -> Self {
        Self {
            state: ParseState::SeekingDate,
            date_line: String::new(),
            paragraphs: Vec::new(),
            signature_lines: Vec::new(),
            buffer: Vec::new(),
        }
    }

    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            self.paragraphs.push(self.buffer.join(" "));
            self.buffer.clear();
        }
    }

    fn finish(mut self) -> StructuredDocument {
        self.flush();
        StructuredDocument::new(self.date_line, self.paragraphs, self.signature_lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure(text: &str) -> StructuredDocument {
        LetterStructurer::default().structure(text)
    }

    #[test]
    fn test_full_letter() {
        let doc = structure(
            "March 03, 2025\n\nDear Hiring Manager,\n\nI am excited to apply.\n\nSincerely,\nJane Doe",
        );
        assert_eq!(doc.date_line(), "March 03, 2025");
        assert_eq!(
            doc.paragraphs(),
            ["Dear Hiring Manager,", "I am excited to apply."]
        );
        assert_eq!(doc.signature_lines(), ["Sincerely,", "Jane Doe"]);
    }

    #[test]
    fn test_blank_line_separates_paragraphs() {
        let doc = structure("Hello there\n\nContinuing thought.");
        assert_eq!(doc.date_line(), "");
        assert_eq!(doc.paragraphs(), ["Hello there", "Continuing thought."]);
        assert!(doc.signature_lines().is_empty());
    }

    #[test]
    fn test_empty_input() {
        let doc = structure("");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_lines_within_paragraph_are_joined() {
        let doc = structure("  first line  \nsecond line\n\nnext");
        assert_eq!(doc.paragraphs(), ["first line second line", "next"]);
    }

    #[test]
    fn test_crlf_input() {
        let doc = structure("March 03, 2025\r\n\r\nBody one\r\nBody two\r\n\r\nRegards,\r\nJane\r\n");
        assert_eq!(doc.date_line(), "March 03, 2025");
        assert_eq!(doc.paragraphs(), ["Body one Body two"]);
        assert_eq!(doc.signature_lines(), ["Regards,", "Jane"]);
    }

    #[test]
    fn test_late_date_is_paragraph_text() {
        let doc = structure("Dear team,\nMarch 03, 2025\n\nBody");
        assert_eq!(doc.date_line(), "");
        assert_eq!(doc.paragraphs(), ["Dear team, March 03, 2025", "Body"]);
    }

    #[test]
    fn test_date_after_leading_blank_lines() {
        let doc = structure("\n\nMarch 03, 2025\nBody");
        assert_eq!(doc.date_line(), "March 03, 2025");
        assert_eq!(doc.paragraphs(), ["Body"]);
    }

    #[test]
    fn test_only_first_date_captured() {
        let doc = structure("March 03, 2025\nApril 04, 2025\n\nBody");
        assert_eq!(doc.date_line(), "March 03, 2025");
        assert_eq!(doc.paragraphs(), ["April 04, 2025", "Body"]);
    }

    #[test]
    fn test_signature_is_sticky() {
        let doc = structure("Body\n\nBest Regards,\n\nJane Doe\nMarch 03, 2025\nSincerely again");
        assert_eq!(doc.paragraphs(), ["Body"]);
        assert_eq!(
            doc.signature_lines(),
            ["Best Regards,", "Jane Doe", "March 03, 2025", "Sincerely again"]
        );
    }

    #[test]
    fn test_paragraph_without_trailing_blank_before_signature() {
        let doc = structure("Thanks for reading.\nSincerely,\nJane");
        assert_eq!(doc.paragraphs(), ["Thanks for reading."]);
        assert_eq!(doc.signature_lines(), ["Sincerely,", "Jane"]);
    }

    #[test]
    fn test_closing_token_before_any_body() {
        let doc = structure("Sincerely,\nMarch 03, 2025");
        assert_eq!(doc.date_line(), "");
        assert!(doc.paragraphs().is_empty());
        assert_eq!(doc.signature_lines(), ["Sincerely,", "March 03, 2025"]);
    }

    #[test]
    fn test_date_detection_disabled() {
        let structurer = LetterStructurer::new(ParseOptions::new().without_date_detection());
        let doc = structurer.structure("March 03, 2025\n\nBody");
        assert_eq!(doc.date_line(), "");
        assert_eq!(doc.paragraphs(), ["March 03, 2025", "Body"]);
    }

    #[test]
    fn test_custom_closing_token() {
        let structurer = LetterStructurer::new(ParseOptions::new().with_closing_token("Cheers"));
        let doc = structurer.structure("Body\n\nCheers,\nJane");
        assert_eq!(doc.signature_lines(), ["Cheers,", "Jane"]);
    }

    #[test]
    fn test_unicode_normalization() {
        let decomposed = "Cafe\u{301} owner";
        let plain = LetterStructurer::default().structure(decomposed);
        assert_eq!(plain.paragraphs(), ["Cafe\u{301} owner"]);

        let structurer =
            LetterStructurer::new(ParseOptions::new().with_unicode_normalization(true));
        let doc = structurer.structure(decomposed);
        assert_eq!(doc.paragraphs(), ["Caf\u{e9} owner"]);
    }

    #[test]
    fn test_classify_trace() {
        let kinds = LetterStructurer::default()
            .classify("March 03, 2025\n\nHello\n\nSincerely,\n\nJane");
        assert_eq!(
            kinds,
            vec![
                LineKind::Date,
                LineKind::Blank,
                LineKind::Paragraph,
                LineKind::Blank,
                LineKind::Signature,
                LineKind::Signature,
                LineKind::Signature,
            ]
        );
    }
}
