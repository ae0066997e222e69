//! Document-level types.

use serde::{Deserialize, Serialize};

/// A cover letter split into its structural regions.
///
/// Built once by the structurer and read-only afterwards: the fields are
/// private and only exposed through accessors. Deserialization goes through
/// [`StructuredDocument::new`], so documents read back from JSON obey the
/// same rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDocument")]
pub struct StructuredDocument {
    /// Long-form date line ("March 03, 2025"), empty if none was found
    date_line: String,

    /// Body paragraphs in input order, line breaks collapsed to spaces
    paragraphs: Vec<String>,

    /// Closing block lines (valediction and signer), in input order
    signature_lines: Vec<String>,
}

impl StructuredDocument {
    /// Create a document from already-classified regions.
    ///
    /// Blank paragraphs and blank signature lines are dropped so the
    /// "never store empty entries" rule holds for hand-built documents too.
    pub fn new(
        date_line: impl Into<String>,
        paragraphs: Vec<String>,
        signature_lines: Vec<String>,
    ) -> Self {
        Self {
            date_line: date_line.into(),
            paragraphs: paragraphs
                .into_iter()
                .filter(|p| !p.trim().is_empty())
                .collect(),
            signature_lines: signature_lines
                .into_iter()
                .filter(|l| !l.trim().is_empty())
                .collect(),
        }
    }

    /// Create an empty document.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The captured date line (empty if none).
    pub fn date_line(&self) -> &str {
        &self.date_line
    }

    /// Body paragraphs in order.
    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    /// Signature block lines in order.
    pub fn signature_lines(&self) -> &[String] {
        &self.signature_lines
    }

    /// Check if a date line was captured.
    pub fn has_date(&self) -> bool {
        !self.date_line.is_empty()
    }

    /// Check if a signature block was captured.
    pub fn has_signature(&self) -> bool {
        !self.signature_lines.is_empty()
    }

    /// Number of body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if no region holds any content.
    pub fn is_empty(&self) -> bool {
        self.date_line.is_empty() && self.paragraphs.is_empty() && self.signature_lines.is_empty()
    }

    /// Approximate word count across all regions.
    pub fn word_count(&self) -> usize {
        self.regions()
            .map(|text| text.split_whitespace().count())
            .sum()
    }

    /// Character count across all regions, excluding whitespace.
    pub fn char_count(&self) -> usize {
        self.regions()
            .map(|text| text.chars().filter(|c| !c.is_whitespace()).count())
            .sum()
    }

    /// Get plain text content of the document.
    ///
    /// Date, each paragraph and the signature block are separated by a
    /// blank line; signature lines stay on consecutive lines.
    pub fn plain_text(&self) -> String {
        let mut blocks: Vec<String> = Vec::new();

        if self.has_date() {
            blocks.push(self.date_line.clone());
        }
        blocks.extend(self.paragraphs.iter().cloned());
        if self.has_signature() {
            blocks.push(self.signature_lines.join("\n"));
        }

        blocks.join("\n\n")
    }

    fn regions(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.date_line.as_str())
            .chain(self.paragraphs.iter().map(String::as_str))
            .chain(self.signature_lines.iter().map(String::as_str))
    }
}

/// Wire form of a document, before blank entries are dropped.
#[derive(Default, Deserialize)]
#[serde(default)]
struct RawDocument {
    date_line: String,
    paragraphs: Vec<String>,
    signature_lines: Vec<String>,
}

impl From<RawDocument> for StructuredDocument {
    fn from(raw: RawDocument) -> Self {
        StructuredDocument::new(raw.date_line, raw.paragraphs, raw.signature_lines)
    }
}
