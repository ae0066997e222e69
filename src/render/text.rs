//! Plain text rendering for structured letters.

use crate::model::StructuredDocument;

/// Convert a structured letter back to plain text.
///
/// Paragraphs come out on a single line each. For the unmodified generated
/// text, keep the original input instead.
pub fn to_text(doc: &StructuredDocument) -> String {
    doc.plain_text()
}
