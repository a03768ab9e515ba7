//! Minification pipeline: validate, lex, reassemble, write.

use crate::reassembler::Reassembler;
use pcm_core::{MinifierConfig, Result, Segment};
use pcm_lexer::{Lexer, PhpScanner, Scanner};
use pcm_storage::{write_output, PathValidator};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Minified output with size statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MinifyResult {
    pub output: String,
    pub original_len: usize,
    pub minified_len: usize,
    pub reduction_pct: f64,
    pub segments: usize,
    pub code_segments: usize,
    pub markup_segments: usize,
}

impl MinifyResult {
    pub fn ratio(&self) -> f64 {
        if self.original_len == 0 { return 1.0; }
        self.minified_len as f64 / self.original_len as f64
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The public façade. Holds no per-call state, so one instance can serve
/// any number of calls, including from several threads.
pub struct Minifier<S: Scanner = PhpScanner> {
    validator: PathValidator,
    lexer: Lexer<S>,
    reassembler: Reassembler,
}

impl Minifier<PhpScanner> {
    pub fn new() -> Self {
        Self::from_config(&MinifierConfig::default())
    }

    pub fn from_config(config: &MinifierConfig) -> Self {
        Self::with_scanner(PhpScanner::new(), config)
    }

    /// Build from the user config file, or defaults when there is none.
    pub fn from_user_config() -> Result<Self> {
        Ok(Self::from_config(&MinifierConfig::load_default()?))
    }
}

impl Default for Minifier<PhpScanner> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Scanner> Minifier<S> {
    /// Build around a caller-supplied scanner.
    pub fn with_scanner(scanner: S, config: &MinifierConfig) -> Self {
        let mut lexer = Lexer::with_scanner(scanner);
        lexer.preserve_doc_comments = config.preserve_doc_comments;
        Self {
            validator: PathValidator::from_config(config),
            lexer,
            reassembler: Reassembler::from_config(config),
        }
    }

    pub fn validator(&self) -> &PathValidator {
        &self.validator
    }

    /// Minify in-memory source. No path checks apply.
    pub fn minify_text(&self, content: &str) -> Result<String> {
        let segments = self.lexer.lex(content)?;
        Ok(self.reassembler.reassemble(&segments))
    }

    /// Validate `path`, then minify its contents.
    pub fn minify_file(&self, path: impl AsRef<Path>) -> Result<String> {
        let path = path.as_ref();
        self.validator.validate(path)?;
        let start = Instant::now();
        let segments = self.lexer.lex_file(path)?;
        let output = self.reassembler.reassemble(&segments);
        tracing::info!(
            path = %path.display(),
            bytes = output.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "minified file"
        );
        Ok(output)
    }

    /// Minify `path` and write the result to `output`.
    ///
    /// Nothing is written when minification fails.
    pub fn minify_file_to_file(&self, path: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<()> {
        let minified = self.minify_file(path)?;
        write_output(output, &minified)
    }

    pub fn minify_text_to_file(&self, content: &str, output: impl AsRef<Path>) -> Result<()> {
        let minified = self.minify_text(content)?;
        write_output(output, &minified)
    }

    /// Minify in-memory source and report size and segment counts.
    pub fn minify_with_stats(&self, content: &str) -> Result<MinifyResult> {
        let segments = self.lexer.lex(content)?;
        let output = self.reassembler.reassemble(&segments);
        Ok(build_result(content, output, &segments))
    }
}

fn build_result(content: &str, output: String, segments: &[Segment]) -> MinifyResult {
    let original_len = content.len();
    let minified_len = output.len();
    let code_segments = segments.iter().filter(|s| s.is_code()).count();
    let reduction_pct = if original_len > 0 {
        (original_len.saturating_sub(minified_len) as f64 / original_len as f64) * 100.0
    } else {
        0.0
    };

    MinifyResult {
        output,
        original_len,
        minified_len,
        reduction_pct,
        segments: segments.len(),
        code_segments,
        markup_segments: segments.len() - code_segments,
    }
}
