//! Text source backed by a file on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

use super::{LetterRequest, LetterSource};

/// Reads previously generated letter text from a file.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source reading from `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LetterSource for FileSource {
    fn name(&self) -> &str {
        "file"
    }

    fn fetch(&self, _request: &LetterRequest) -> Result<String> {
        log::debug!("Reading letter text from {}", self.path.display());
        Ok(fs::read_to_string(&self.path)?)
    }
}
