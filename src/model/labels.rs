//! Display labels attached to a rendered letter.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Organization and role the letter is addressed for.
///
/// Labels only feed the document title and output filenames; they are never
/// inserted into the letter body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterLabels {
    /// Organization (company) name
    pub organization: String,

    /// Role or position title
    pub role_title: String,
}

impl LetterLabels {
    /// Create labels from an organization and a role title.
    pub fn new(organization: impl Into<String>, role_title: impl Into<String>) -> Self {
        Self {
            organization: organization.into(),
            role_title: role_title.into(),
        }
    }

    /// Title used for the rendered document.
    pub fn document_title(&self) -> String {
        format!("Cover Letter - {} at {}", self.role_title, self.organization)
    }

    /// Check that both labels carry visible text.
    pub fn validate(&self) -> Result<()> {
        if self.organization.trim().is_empty() {
            return Err(Error::InvalidLabel("organization is empty".to_string()));
        }
        if self.role_title.trim().is_empty() {
            return Err(Error::InvalidLabel("role title is empty".to_string()));
        }
        Ok(())
    }
}
