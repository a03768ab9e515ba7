//! Source path preconditions.

use pcm_core::{MinifierConfig, MinifyError, Result};
use std::path::Path;

/// Checks that a source path is an existing, non-directory file with the
/// expected extension.
#[derive(Debug, Clone)]
pub struct PathValidator {
    extension: String,
}

impl PathValidator {
    /// `extension` is given without the leading dot.
    pub fn new(extension: impl Into<String>) -> Self {
        Self { extension: extension.into() }
    }

    pub fn from_config(config: &MinifierConfig) -> Self {
        Self::new(config.extension.clone())
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Directory, then existence, then extension.
    pub fn validate(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if path.is_dir() {
            return Err(MinifyError::IsDirectory { path: display });
        }
        if !path.is_file() {
            return Err(MinifyError::NotFound { path: display });
        }
        if !self.has_extension(path) {
            return Err(MinifyError::InvalidExtension {
                path: display,
                expected: self.extension.clone(),
            });
        }
        Ok(())
    }

    /// Suffix match on the full path, so `.php` alone counts.
    pub fn has_extension(&self, path: &Path) -> bool {
        path.to_string_lossy().ends_with(&format!(".{}", self.extension))
    }
}

impl Default for PathValidator {
    fn default() -> Self {
        Self::new("php")
    }
}
