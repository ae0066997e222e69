//! Text sources supplying generated letter text.
//!
//! The generative model that writes letters lives outside this crate. This
//! module defines the seam it plugs into, plus two simple sources used by
//! the CLI and tests.
//!
//! # Example
//!
//! ```
//! use coverletter::source::{fetch_letter, LetterRequest, StaticSource};
//!
//! let source = StaticSource::new("Dear Hiring Manager,\n\nSincerely,\nJane");
//! let request = LetterRequest::new("Acme", "Engineer");
//! let text = fetch_letter(&source, &request)?;
//! assert!(text.starts_with("Dear"));
//! # Ok::<(), coverletter::Error>(())
//! ```

mod file;

pub use file::FileSource;

use crate::error::{Error, Result};
use crate::model::LetterLabels;

/// What a text source is asked to write.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterRequest {
    /// Organization (company) name
    pub organization: String,

    /// Role or position title
    pub role_title: String,

    /// Job description text
    pub job_description: String,

    /// Resume text
    pub resume_text: String,
}

impl LetterRequest {
    /// Create a request for an organization and role.
    pub fn new(organization: impl Into<String>, role_title: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            role_title: role_title.into(),
            ..Default::default()
        }
    }

    /// Set the job description.
    pub fn with_job_description(mut self, text: impl Into<String>) -> Self {
        self.job_description = text.into();
        self
    }

    /// Set the resume text.
    pub fn with_resume(mut self, text: impl Into<String>) -> Self {
        self.resume_text = text.into();
        self
    }

    /// Display labels for the rendered letter.
    pub fn labels(&self) -> LetterLabels {
        LetterLabels::new(self.organization.clone(), self.role_title.clone())
    }
}

/// Trait for letter text sources.
///
/// Implement this trait to plug in a text generator.
pub trait LetterSource: Send + Sync {
    /// Get the name of this source.
    fn name(&self) -> &str;

    /// Produce letter text for a request.
    fn fetch(&self, request: &LetterRequest) -> Result<String>;
}

/// Fetch letter text, reporting any failure as [`Error::Source`].
///
/// Failures stay at this boundary: callers get a descriptive error and no
/// partial text ever reaches the structurer.
pub fn fetch_letter(source: &dyn LetterSource, request: &LetterRequest) -> Result<String> {
    source.fetch(request).map_err(|err| {
        log::warn!("Text source '{}' failed: {}", source.name(), err);
        match err {
            Error::Source(_) => err,
            other => Error::Source(format!("{}: {}", source.name(), other)),
        }
    })
}

/// Source returning fixed text, whatever the request.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    text: String,
}

impl StaticSource {
    /// Create a source that always returns `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl LetterSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn fetch(&self, _request: &LetterRequest) -> Result<String> {
        Ok(self.text.clone())
    }
}
