//! Structuring of raw generated letter text.
//!
//! The structurer walks the text once, line by line, and splits it into the
//! date line, body paragraphs and the signature block.

mod options;
mod structurer;

pub use options::{ParseOptions, DEFAULT_CLOSING_TOKENS};
pub use structurer::{LetterStructurer, LineKind, ParseState};

use crate::model::StructuredDocument;

/// Structure letter text with default options.
pub fn structure(text: &str) -> StructuredDocument {
    LetterStructurer::default().structure(text)
}

/// Structure letter text with custom options.
pub fn structure_with_options(text: &str, options: ParseOptions) -> StructuredDocument {
    LetterStructurer::new(options).structure(text)
}
