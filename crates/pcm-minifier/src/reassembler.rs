//! Reassembler: segments → minified source.

use crate::symbols::{heredoc_closing_identifier, is_special_symbol, would_fuse, BLOCK_COMMENT_CLOSE, OPEN_TAG};
use pcm_core::{MinifierConfig, Segment, SegmentKind, TokenRecord};

/// Joins segment tokens back into source text.
///
/// Markup is copied verbatim. Code tokens get a single separating space
/// unless the token, or the one after it, is a special symbol.
#[derive(Debug, Clone)]
pub struct Reassembler {
    pub fuse_else_if: bool,
}

impl Reassembler {
    pub fn new() -> Self {
        Self { fuse_else_if: true }
    }

    pub fn from_config(config: &MinifierConfig) -> Self {
        Self { fuse_else_if: config.fuse_else_if }
    }

    pub fn reassemble(&self, segments: &[Segment]) -> String {
        let mut out = String::new();
        for segment in segments {
            match segment.kind {
                SegmentKind::Markup => segment.texts().for_each(|t| out.push_str(t)),
                SegmentKind::Code => self.reassemble_code(&segment.tokens, &mut out),
            }
        }
        tracing::debug!(segments = segments.len(), bytes = out.len(), "reassembled segments");
        out
    }

    fn reassemble_code(&self, tokens: &[TokenRecord], out: &mut String) {
        let mut i = 0;
        while i < tokens.len() {
            let text = tokens[i].text.as_str();

            if let Some(closing) = heredoc_closing_identifier(text) {
                // the body must start on its own line
                out.push_str(text);
                out.push('\n');
                i += 1;
                while i < tokens.len() && tokens[i].text != closing {
                    out.push_str(&tokens[i].text);
                    i += 1;
                }
                // the closing identifier is spaced like any other word
                continue;
            }

            let next = tokens.get(i + 1).map(|t| t.text.as_str());
            out.push_str(text);
            if self.needs_space(text, next) {
                out.push(' ');
            }
            i += 1;
        }
    }

    fn needs_space(&self, text: &str, next: Option<&str>) -> bool {
        if text.eq_ignore_ascii_case(OPEN_TAG) {
            return true;
        }
        if let Some(next) = next {
            let glued = is_special_symbol(next)
                || (self.fuse_else_if && text.eq_ignore_ascii_case("else") && next.eq_ignore_ascii_case("if"))
                || text.ends_with(BLOCK_COMMENT_CLOSE);
            if glued {
                return would_fuse(text, next);
            }
        }
        if is_special_symbol(text) {
            return next.is_some_and(|next| would_fuse(text, next));
        }
        !text.is_empty()
    }
}

impl Default for Reassembler {
    fn default() -> Self {
        Self::new()
    }
}
