//! Output naming and download artifacts for a finished letter.
//!
//! The library performs no file or network I/O here: callers get the bytes,
//! filename and MIME type and decide where they go.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::error::Result;
use crate::model::{LetterLabels, StructuredDocument};
use crate::render::{self, escape_html, JsonFormat, RenderOptions};

/// Prefix shared by every output filename.
pub const FILENAME_PREFIX: &str = "Cover_Letter";

/// Output format of a delivered letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Original generated text, unmodified
    Text,

    /// Print-ready HTML
    #[default]
    Html,

    /// Structured JSON
    Json,
}

impl OutputFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Html => "html",
            OutputFormat::Json => "json",
        }
    }

    /// MIME type of the content.
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Html => "text/html",
            OutputFormat::Json => "application/json",
        }
    }
}

/// Filename for a letter: `Cover_Letter_{organization}_{role}.{ext}`.
///
/// Labels are trimmed of surrounding whitespace and otherwise kept as typed,
/// except for characters that cannot appear in a file name, which become `_`.
pub fn output_filename(labels: &LetterLabels, format: OutputFormat) -> String {
    format!(
        "{}_{}_{}.{}",
        FILENAME_PREFIX,
        sanitize_component(&labels.organization),
        sanitize_component(&labels.role_title),
        format.extension()
    )
}

/// Encode content as a base64 `data:` URI.
pub fn data_uri(content: &str, format: OutputFormat) -> String {
    format!(
        "data:{};base64,{}",
        format.mime_type(),
        STANDARD.encode(content.as_bytes())
    )
}

/// HTML anchor that downloads the content under the given filename.
///
/// The filename and link label are HTML-escaped.
pub fn download_link(content: &str, filename: &str, format: OutputFormat, label: &str) -> String {
    format!(
        "<a href=\"{}\" download=\"{}\">{}</a>",
        data_uri(content, format),
        escape_html(filename),
        escape_html(label)
    )
}

/// A downloadable output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Suggested filename
    pub filename: String,

    /// Output format
    pub format: OutputFormat,

    /// File content
    pub content: String,
}

impl Artifact {
    /// Create an artifact named after the labels.
    pub fn new(labels: &LetterLabels, format: OutputFormat, content: String) -> Self {
        Self {
            filename: output_filename(labels, format),
            format,
            content,
        }
    }

    /// MIME type of the content.
    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }

    /// Content as bytes.
    pub fn as_bytes(&self) -> &[u8] {
        self.content.as_bytes()
    }

    /// Content as a `data:` URI.
    pub fn data_uri(&self) -> String {
        data_uri(&self.content, self.format)
    }
}

/// Build the text and HTML downloads for a letter.
///
/// The text artifact carries the original generated text byte for byte.
pub fn artifacts(
    original_text: &str,
    doc: &StructuredDocument,
    labels: &LetterLabels,
    options: &RenderOptions,
) -> Result<Vec<Artifact>> {
    let html = render::to_html(doc, labels, options)?;
    Ok(vec![
        Artifact::new(labels, OutputFormat::Text, original_text.to_string()),
        Artifact::new(labels, OutputFormat::Html, html),
    ])
}

/// Build a single artifact of the requested format.
pub fn artifact(
    original_text: &str,
    doc: &StructuredDocument,
    labels: &LetterLabels,
    format: OutputFormat,
    options: &RenderOptions,
) -> Result<Artifact> {
    let content = match format {
        OutputFormat::Text => original_text.to_string(),
        OutputFormat::Html => render::to_html(doc, labels, options)?,
        OutputFormat::Json => render::to_json(doc, JsonFormat::Pretty)?,
    };
    Ok(Artifact::new(labels, format, content))
}

fn sanitize_component(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}
