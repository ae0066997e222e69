//! Document model types for structured cover letters.
//!
//! This module defines the intermediate representation that bridges
//! structuring raw generated text and rendering the printable document.

mod document;
mod labels;

pub use document::StructuredDocument;
pub use labels::LetterLabels;
