//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

use crate::model::StructuredDocument;

/// Result of rendering a letter, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Statistics about the rendered letter
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: RenderStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics about a structured letter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Whether a date line was rendered
    pub has_date: bool,

    /// Number of body paragraphs
    pub paragraph_count: u32,

    /// Number of signature lines
    pub signature_line_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics from a document.
    pub fn from_document(doc: &StructuredDocument) -> Self {
        let mut stats = Self::new();
        stats.count_document(doc);
        stats
    }

    /// Record the regions of a document.
    pub fn count_document(&mut self, doc: &StructuredDocument) {
        self.has_date = doc.has_date();
        self.paragraph_count = doc.paragraph_count() as u32;
        self.signature_line_count = doc.signature_lines().len() as u32;
        self.word_count = doc.word_count() as u32;
        self.char_count = doc.char_count() as u32;
    }

    /// Check if the letter body is empty.
    pub fn is_empty(&self) -> bool {
        self.paragraph_count == 0
    }
}
