//! Structuring options and configuration.

/// Closing tokens recognized by default.
pub const DEFAULT_CLOSING_TOKENS: [&str; 2] = ["Sincerely", "Regards"];

/// Options for structuring generated letter text.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Substrings that open the signature block (case-sensitive)
    pub closing_tokens: Vec<String>,

    /// Whether to look for a date line at the top of the letter
    pub detect_date: bool,

    /// Normalize input to Unicode NFC before classification
    pub normalize_unicode: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the closing tokens.
    pub fn with_closing_tokens<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.closing_tokens = tokens.into_iter().map(Into::into).collect();
        self
    }

    /// Add one closing token to the current set.
    pub fn with_closing_token(mut self, token: impl Into<String>) -> Self {
        self.closing_tokens.push(token.into());
        self
    }

    /// Disable date line detection.
    pub fn without_date_detection(mut self) -> Self {
        self.detect_date = false;
        self
    }

    /// Enable or disable NFC normalization of the input.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Check whether a raw line contains any closing token.
    pub fn is_closing_line(&self, line: &str) -> bool {
        self.closing_tokens
            .iter()
            .any(|token| !token.is_empty() && line.contains(token.as_str()))
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            closing_tokens: DEFAULT_CLOSING_TOKENS.iter().map(|t| t.to_string()).collect(),
            detect_date: true,
            normalize_unicode: false,
        }
    }
}
