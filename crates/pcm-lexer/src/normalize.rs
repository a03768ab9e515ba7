//! Token text normalization for code regions.

use regex::Regex;
use std::sync::LazyLock;

static RE_WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\n\r\x0B\x0C]+").unwrap());

/// Characters PHP's `trim()` removes, plus form feed.
pub fn is_php_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\0' | '\x0B' | '\x0C')
}

/// True when nothing but whitespace remains after trimming.
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(is_php_whitespace).is_empty()
}

/// Remove every whitespace run.
pub fn collapse_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, "").into_owned()
}

/// Reduce every whitespace run to a single space.
pub fn squeeze_whitespace(text: &str) -> String {
    RE_WHITESPACE.replace_all(text, " ").into_owned()
}

/// Rewrite `// text` or `# text` as `/*// text*/`.
///
/// A `*/` inside the comment would end the block early, so it becomes `* /`.
pub fn wrap_line_comment(text: &str) -> String {
    let body = squeeze_whitespace(text.trim_end_matches(is_php_whitespace)).replace("*/", "* /");
    format!("/*{body}*/")
}
