use crate::error::{MinifyError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MinifierConfig {
    /// Required source file extension, without the dot.
    pub extension: String,
    /// Print `else if` as `elseif`.
    pub fuse_else_if: bool,
    /// Keep `/** … */` comments byte-for-byte; reflection can read them.
    pub preserve_doc_comments: bool,
}

impl Default for MinifierConfig {
    fn default() -> Self {
        Self {
            extension: "php".into(),
            fuse_else_if: true,
            preserve_doc_comments: true,
        }
    }
}

impl MinifierConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| MinifyError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// `<config dir>/pcm/config.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("pcm").join("config.json"))
    }

    /// Load the user config file, or defaults when there is none.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => {
                tracing::debug!(path = %path.display(), "loading minifier config");
                Self::load(path)
            }
            _ => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        let ext = self.extension.as_str();
        if ext.is_empty() || ext.starts_with('.') || ext.contains(['/', '\\']) {
            return Err(MinifyError::Config(format!(
                "extension must be a bare name like \"php\", got {ext:?}"
            )));
        }
        Ok(())
    }
}
