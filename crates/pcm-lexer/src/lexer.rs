//! Lexer: scanner units → ordered code/markup segments.

use crate::normalize::{collapse_whitespace, is_blank, squeeze_whitespace, wrap_line_comment};
use crate::padding::fix_heredoc_padding;
use crate::scanner::PhpScanner;
use crate::traits::Scanner;
use pcm_core::{MinifierConfig, MinifyError, RawUnit, Result, Segment, SegmentKind, UnitCategory};
use std::path::Path;

/// Splits source into segments with normalized token text.
pub struct Lexer<S: Scanner = PhpScanner> {
    scanner: S,
    pub preserve_doc_comments: bool,
}

impl Lexer<PhpScanner> {
    pub fn new() -> Self {
        Self::with_scanner(PhpScanner::new())
    }

    pub fn from_config(config: &MinifierConfig) -> Self {
        let mut lexer = Self::new();
        lexer.preserve_doc_comments = config.preserve_doc_comments;
        lexer
    }
}

impl Default for Lexer<PhpScanner> {
    fn default() -> Self { Self::new() }
}

impl<S: Scanner> Lexer<S> {
    pub fn with_scanner(scanner: S) -> Self {
        Self { scanner, preserve_doc_comments: true }
    }

    pub fn scanner(&self) -> &S {
        &self.scanner
    }

    /// Lex in-memory source text.
    pub fn lex(&self, source: &str) -> Result<Vec<Segment>> {
        let units = self.scanner.scan(source)?;
        let unit_count = units.len();
        let segments = self.segment(fix_heredoc_padding(units))?;
        tracing::debug!(
            scanner = self.scanner.name(),
            units = unit_count,
            segments = segments.len(),
            "lexed source"
        );
        Ok(segments)
    }

    /// Read and lex a file. No extension checks happen here.
    pub fn lex_file(&self, path: impl AsRef<Path>) -> Result<Vec<Segment>> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| {
            let path = path.display().to_string();
            if source.kind() == std::io::ErrorKind::NotFound {
                MinifyError::NotFound { path }
            } else {
                MinifyError::Read { path, source }
            }
        })?;
        self.lex(&source)
    }

    fn segment(&self, units: Vec<RawUnit>) -> Result<Vec<Segment>> {
        let mut segments: Vec<Segment> = Vec::new();
        let mut current: Option<SegmentKind> = None;
        let mut index = 0;
        let mut line = 1;

        for unit in units {
            let newlines = unit.text.matches('\n').count();

            if unit.category.is_region_open() {
                if current == Some(SegmentKind::Markup) {
                    index += 1;
                }
                current = Some(SegmentKind::Code);
                open_segment(&mut segments, SegmentKind::Code, index).push(collapse_whitespace(&unit.text));
            } else if unit.category == UnitCategory::InlineMarkup {
                if current == Some(SegmentKind::Code) {
                    index += 1;
                }
                current = Some(SegmentKind::Markup);
                open_segment(&mut segments, SegmentKind::Markup, index).push(unit.text);
            } else if is_blank(&unit.text) && !unit.category.is_string_like() {
                // insignificant once whitespace is gone
            } else {
                match current {
                    Some(SegmentKind::Code) => {
                        let text = self.normalize(&unit);
                        open_segment(&mut segments, SegmentKind::Code, index).push(text);
                    }
                    Some(SegmentKind::Markup) => {
                        open_segment(&mut segments, SegmentKind::Markup, index).push(unit.text);
                    }
                    None => {
                        return Err(MinifyError::Parse {
                            line,
                            message: format!("{:?} unit outside any region", unit.category),
                        });
                    }
                }
            }

            line += newlines;
        }

        Ok(segments)
    }

    fn normalize(&self, unit: &RawUnit) -> String {
        match unit.category {
            UnitCategory::StringLiteral => unit.text.clone(),
            UnitCategory::LineComment => wrap_line_comment(&unit.text),
            UnitCategory::DocComment if self.preserve_doc_comments => unit.text.clone(),
            UnitCategory::BlockComment | UnitCategory::DocComment => squeeze_whitespace(&unit.text),
            _ => collapse_whitespace(&unit.text),
        }
    }
}

fn open_segment(segments: &mut Vec<Segment>, kind: SegmentKind, index: usize) -> &mut Segment {
    let reuse = matches!(segments.last(), Some(s) if s.kind == kind && s.sequence_index == index);
    if !reuse {
        segments.push(Segment::new(kind, index));
    }
    let last = segments.len() - 1;
    &mut segments[last]
}
