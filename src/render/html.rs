//! Print-ready HTML rendering for structured letters.

use std::borrow::Cow;

use crate::error::Result;
use crate::model::{LetterLabels, StructuredDocument};

use super::{PageStyle, RenderOptions, RenderResult, RenderStats};

const INDENT: &str = "    ";

/// Convert a structured letter to a standalone HTML document.
pub fn to_html(
    doc: &StructuredDocument,
    labels: &LetterLabels,
    options: &RenderOptions,
) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc, labels)
}

/// Convert a structured letter to HTML with statistics.
pub fn to_html_with_stats(
    doc: &StructuredDocument,
    labels: &LetterLabels,
    options: &RenderOptions,
) -> Result<RenderResult> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render_with_stats(doc, labels)
}

/// HTML renderer.
///
/// Output is a pure function of the document, labels and options: nothing
/// time- or environment-dependent is embedded.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a letter to HTML.
    pub fn render(self, doc: &StructuredDocument, labels: &LetterLabels) -> Result<String> {
        Ok(self.render_internal(doc, labels))
    }

    /// Render a letter to HTML with statistics.
    pub fn render_with_stats(
        mut self,
        doc: &StructuredDocument,
        labels: &LetterLabels,
    ) -> Result<RenderResult> {
        let content = self.render_internal(doc, labels);
        self.stats.count_document(doc);
        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&self, doc: &StructuredDocument, labels: &LetterLabels) -> String {
        let mut output = String::new();

        output.push_str("<!DOCTYPE html>\n<html>\n");
        self.render_head(&mut output, labels);
        output.push_str("<body>\n");

        self.render_date(&mut output, doc);
        self.render_body(&mut output, doc);
        self.render_signature(&mut output, doc);
        if self.options.include_print_button {
            output.push_str(INDENT);
            output.push_str(
                "<button class=\"print-button\" onclick=\"window.print()\">Print / Save as PDF</button>\n",
            );
        }

        output.push_str("</body>\n</html>\n");
        output
    }

    fn render_head(&self, output: &mut String, labels: &LetterLabels) {
        output.push_str("<head>\n");
        output.push_str(INDENT);
        output.push_str("<meta charset=\"UTF-8\">\n");
        output.push_str(INDENT);
        output.push_str("<title>");
        output.push_str(&self.text(&labels.document_title()));
        output.push_str("</title>\n");
        output.push_str(INDENT);
        output.push_str("<style>\n");
        output.push_str(&stylesheet(&self.options.style));
        output.push_str(INDENT);
        output.push_str("</style>\n");
        output.push_str("</head>\n");
    }

    fn render_date(&self, output: &mut String, doc: &StructuredDocument) {
        output.push_str(INDENT);
        output.push_str("<div class=\"date\">");
        output.push_str(&self.text(doc.date_line()));
        output.push_str("</div>\n");
    }

    fn render_body(&self, output: &mut String, doc: &StructuredDocument) {
        self.render_region(output, "content", doc.paragraphs());
    }

    fn render_signature(&self, output: &mut String, doc: &StructuredDocument) {
        self.render_region(output, "signature", doc.signature_lines());
    }

    /// Write a `<div>` holding one `<p>` per entry.
    fn render_region(&self, output: &mut String, class: &str, blocks: &[String]) {
        output.push_str(INDENT);
        output.push_str(&format!("<div class=\"{}\">\n", class));
        for block in blocks {
            output.push_str(INDENT);
            output.push_str(INDENT);
            output.push_str("<p>");
            output.push_str(&self.text(block));
            output.push_str("</p>\n");
        }
        output.push_str(INDENT);
        output.push_str("</div>\n");
    }

    fn text<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if self.options.escape_html {
            escape_html(text)
        } else {
            Cow::Borrowed(text)
        }
    }
}

/// Build the print stylesheet for a page style.
fn stylesheet(style: &PageStyle) -> String {
    format!(
        r#"        @media print {{
            @page {{ size: {page_size}; margin: {margin}; }}
            .print-button {{ display: none; }}
        }}
        body {{
            font-family: {font_family};
            line-height: {line_height};
            font-size: {font_size};
            color: #000;
            max-width: 8.5in;
            margin: 0 auto;
            padding: {margin};
        }}
        .date {{
            text-align: right;
            margin-bottom: 20px;
        }}
        .content p {{
            margin-bottom: 15px;
            text-align: justify;
        }}
        .signature {{
            margin-top: 30px;
        }}
        .print-button {{
            display: block;
            text-align: center;
            margin: 20px auto;
            padding: 10px 20px;
            background-color: #4CAF50;
            color: white;
            border: none;
            border-radius: 4px;
            font-size: 16px;
            cursor: pointer;
        }}
"#,
        page_size = style.page_size,
        margin = style.margin,
        font_family = style.font_family,
        font_size = style.font_size,
        line_height = style.line_height,
    )
}

/// Escape HTML special characters.
pub(crate) fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    Cow::Owned(result)
}
