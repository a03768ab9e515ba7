//! Scoped output writing.

use pcm_core::{MinifyError, Result};
use std::fs::File;
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Buffered handle on an output file. The file is closed when the writer is
/// dropped, whether or not [`finish`](Self::finish) ran.
#[derive(Debug)]
pub struct OutputWriter {
    path: PathBuf,
    inner: BufWriter<File>,
}

impl OutputWriter {
    /// Create or truncate `path`.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        if path.is_dir() {
            return Err(MinifyError::OutputIsDirectory { path: display });
        }
        let file = File::create(path).map_err(|source| match source.kind() {
            ErrorKind::PermissionDenied => MinifyError::OutputNotWritable { path: display.clone() },
            _ => MinifyError::Write { path: display.clone(), source },
        })?;
        tracing::debug!(path = %path.display(), "opened output");
        Ok(Self { path: path.to_path_buf(), inner: BufWriter::new(file) })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write_str(&mut self, content: &str) -> Result<()> {
        self.inner.write_all(content.as_bytes()).map_err(|e| self.write_error(e))
    }

    /// Flush buffered bytes; the handle is released on return.
    pub fn finish(mut self) -> Result<()> {
        self.inner.flush().map_err(|e| self.write_error(e))
    }

    fn write_error(&self, source: std::io::Error) -> MinifyError {
        MinifyError::Write { path: self.path.display().to_string(), source }
    }
}

/// Create, write and flush `content` to `path` in one scope.
pub fn write_output(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let mut writer = OutputWriter::create(path)?;
    writer.write_str(content)?;
    let path = writer.path().display().to_string();
    writer.finish()?;
    tracing::info!(path, bytes = content.len(), "wrote minified output");
    Ok(())
}
