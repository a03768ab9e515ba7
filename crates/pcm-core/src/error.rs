use thiserror::Error;

/// Broad failure classes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong extension, directory given as source, missing source file.
    InvalidInput,
    /// Output destination unusable or a read/write failed.
    IoFailure,
    /// Source text the scanner cannot tokenize.
    Parse,
    /// Unreadable or malformed configuration.
    Config,
    Other,
}

#[derive(Error, Debug)]
pub enum MinifyError {
    #[error("File ({path}) must have .{expected} extension.")]
    InvalidExtension { path: String, expected: String },
    #[error("File ({path}) is a directory.")]
    IsDirectory { path: String },
    #[error("File ({path}) not found.")]
    NotFound { path: String },
    #[error("Output ({path}) is a directory.")]
    OutputIsDirectory { path: String },
    #[error("Output ({path}) is not writable.")]
    OutputNotWritable { path: String },
    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },
    #[error("Invalid configuration: {0}")]
    Config(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MinifyError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidExtension { .. } | Self::IsDirectory { .. } | Self::NotFound { .. } => {
                ErrorKind::InvalidInput
            }
            Self::OutputIsDirectory { .. }
            | Self::OutputNotWritable { .. }
            | Self::Read { .. }
            | Self::Write { .. } => ErrorKind::IoFailure,
            Self::Parse { .. } => ErrorKind::Parse,
            Self::Config(_) | Self::Serialization(_) => ErrorKind::Config,
            Self::Other(_) => ErrorKind::Other,
        }
    }

    /// Build a parse error, locating `offset` as a 1-based line in `source`.
    pub fn parse_at(source: &str, offset: usize, message: impl Into<String>) -> Self {
        let end = offset.min(source.len());
        let line = source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1;
        Self::Parse { line, message: message.into() }
    }
}

pub type Result<T> = std::result::Result<T, MinifyError>;
