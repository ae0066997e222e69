//! Rendering options and configuration.

/// Options for rendering a structured letter to HTML.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Escape markup-significant characters in letter text
    pub escape_html: bool,

    /// Include the on-screen "Print / Save as PDF" button
    pub include_print_button: bool,

    /// Page and typography settings
    pub style: PageStyle,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable HTML escaping of letter text.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_html = escape;
        self
    }

    /// Embed letter text verbatim, without escaping.
    pub fn with_raw_html(self) -> Self {
        self.with_escaping(false)
    }

    /// Enable or disable the print button.
    pub fn with_print_button(mut self, include: bool) -> Self {
        self.include_print_button = include;
        self
    }

    /// Set the page style.
    pub fn with_style(mut self, style: PageStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            escape_html: true,
            include_print_button: true,
            style: PageStyle::default(),
        }
    }
}

/// Page size, margin and body typography of the printed letter.
///
/// Values are CSS fragments and are written into the stylesheet verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStyle {
    /// CSS `@page` size (e.g. "letter", "A4")
    pub page_size: String,

    /// Page margin
    pub margin: String,

    /// Body font stack
    pub font_family: String,

    /// Body font size
    pub font_size: String,

    /// Body line height
    pub line_height: f32,
}

impl PageStyle {
    /// Set the page size.
    pub fn with_page_size(mut self, size: impl Into<String>) -> Self {
        self.page_size = size.into();
        self
    }

    /// Set the page margin.
    pub fn with_margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = margin.into();
        self
    }

    /// Set the body font stack.
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set the body font size.
    pub fn with_font_size(mut self, size: impl Into<String>) -> Self {
        self.font_size = size.into();
        self
    }

    /// Set the body line height.
    pub fn with_line_height(mut self, height: f32) -> Self {
        self.line_height = height;
        self
    }
}

impl Default for PageStyle {
    fn default() -> Self {
        Self {
            page_size: "letter".to_string(),
            margin: "1in".to_string(),
            font_family: "Arial, sans-serif".to_string(),
            font_size: "10pt".to_string(),
            line_height: 1.5,
        }
    }
}
