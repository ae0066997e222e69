//! # coverletter
//!
//! Structuring and print rendering for generated cover letters.
//!
//! Free-form letter text (as written by a language model) is split into a
//! date line, body paragraphs and a signature block, then re-rendered as a
//! styled, print-ready HTML document.
//!
//! ## Quick Start
//!
//! ```
//! use coverletter::{render, structure, LetterLabels, RenderOptions};
//!
//! fn main() -> coverletter::Result<()> {
//!     let doc = structure("March 03, 2025\n\nDear Hiring Manager,\n\nSincerely,\nJane Doe");
//!     assert_eq!(doc.date_line(), "March 03, 2025");
//!
//!     let labels = LetterLabels::new("Acme", "Engineer");
//!     let html = render::to_html(&doc, &labels, &RenderOptions::default())?;
//!     assert!(html.contains("<p>Jane Doe</p>"));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Single-pass structuring**: date, paragraphs and signature, never fails
//! - **Print-ready HTML**: letter page size, justified body, print button
//! - **Escaped by default**: letter text cannot inject markup
//! - **Delivery helpers**: `Cover_Letter_{organization}_{role}` filenames and
//!   base64 download links

pub mod date;
pub mod delivery;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;
pub mod resume;
pub mod source;

// Re-export commonly used types
pub use delivery::{Artifact, OutputFormat};
pub use error::{Error, Result};
pub use model::{LetterLabels, StructuredDocument};
pub use parser::{structure, structure_with_options, LetterStructurer, LineKind, ParseOptions};
pub use render::{JsonFormat, PageStyle, RenderOptions, RenderResult, RenderStats};
pub use source::{LetterRequest, LetterSource};

use std::path::Path;

/// Structure a letter stored in a text file.
///
/// # Example
///
/// ```no_run
/// use coverletter::structure_file;
///
/// let doc = structure_file("letter.txt").unwrap();
/// println!("Paragraphs: {}", doc.paragraph_count());
/// ```
pub fn structure_file<P: AsRef<Path>>(path: P) -> Result<StructuredDocument> {
    let text = std::fs::read_to_string(path)?;
    Ok(structure(&text))
}

/// Structure letter text and render it to HTML in one step.
///
/// # Example
///
/// ```
/// use coverletter::to_html;
///
/// let html = to_html("Hello there\n\nRegards,\nSam", "Acme", "Engineer").unwrap();
/// assert!(html.contains("<title>Cover Letter - Engineer at Acme</title>"));
/// ```
pub fn to_html(text: &str, organization: &str, role_title: &str) -> Result<String> {
    let doc = structure(text);
    let labels = LetterLabels::new(organization, role_title);
    render::to_html(&doc, &labels, &RenderOptions::default())
}

/// Structure letter text and render it to JSON.
pub fn to_json(text: &str, format: JsonFormat) -> Result<String> {
    let doc = structure(text);
    render::to_json(&doc, format)
}

/// Builder for structuring and rendering cover letters.
///
/// # Example
///
/// ```
/// use coverletter::CoverLetter;
///
/// let letter = CoverLetter::new("Acme", "Engineer")
///     .with_closing_token("Best")
///     .without_print_button()
///     .structure("Hello,\n\nBest,\nSam");
///
/// assert_eq!(letter.document().signature_lines(), ["Best,", "Sam"]);
/// let html = letter.to_html()?;
/// assert!(!html.contains("<button"));
/// # Ok::<(), coverletter::Error>(())
/// ```
pub struct CoverLetter {
    labels: LetterLabels,
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl CoverLetter {
    /// Create a builder for an organization and role.
    pub fn new(organization: impl Into<String>, role_title: impl Into<String>) -> Self {
        Self {
            labels: LetterLabels::new(organization, role_title),
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Add a closing token that opens the signature block.
    pub fn with_closing_token(mut self, token: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_closing_token(token);
        self
    }

    /// Set parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Embed letter text without HTML escaping.
    pub fn raw_html(mut self) -> Self {
        self.render_options = self.render_options.with_raw_html();
        self
    }

    /// Omit the print button.
    pub fn without_print_button(mut self) -> Self {
        self.render_options = self.render_options.with_print_button(false);
        self
    }

    /// Set the page style.
    pub fn with_style(mut self, style: PageStyle) -> Self {
        self.render_options = self.render_options.with_style(style);
        self
    }

    /// Structure letter text.
    pub fn structure(self, text: impl Into<String>) -> CoverLetterResult {
        let original = text.into();
        let document = LetterStructurer::new(self.parse_options).structure(&original);
        CoverLetterResult {
            original,
            document,
            labels: self.labels,
            render_options: self.render_options,
        }
    }

    /// Fetch letter text from a source and structure it.
    pub fn generate(
        self,
        text_source: &dyn LetterSource,
        request: &LetterRequest,
    ) -> Result<CoverLetterResult> {
        let text = source::fetch_letter(text_source, request)?;
        Ok(self.structure(text))
    }
}

/// A structured letter ready for rendering.
pub struct CoverLetterResult {
    original: String,
    /// The structured document
    pub document: StructuredDocument,
    labels: LetterLabels,
    render_options: RenderOptions,
}

impl CoverLetterResult {
    /// Render to HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.labels, &self.render_options)
    }

    /// Render to HTML with statistics.
    pub fn to_html_with_stats(&self) -> Result<RenderResult> {
        render::to_html_with_stats(&self.document, &self.labels, &self.render_options)
    }

    /// Render to structured plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Render to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// The original letter text, unmodified.
    pub fn original_text(&self) -> &str {
        &self.original
    }

    /// Get the structured document.
    pub fn document(&self) -> &StructuredDocument {
        &self.document
    }

    /// Get the display labels.
    pub fn labels(&self) -> &LetterLabels {
        &self.labels
    }

    /// Text and HTML downloads for this letter.
    pub fn artifacts(&self) -> Result<Vec<Artifact>> {
        delivery::artifacts(
            &self.original,
            &self.document,
            &self.labels,
            &self.render_options,
        )
    }
}
