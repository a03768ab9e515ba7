//! Special symbols: tokens that never need a separating space.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Prefix of every heredoc/nowdoc start marker.
pub const HEREDOC_START: &str = "<<<";
pub const BLOCK_COMMENT_CLOSE: &str = "*/";
/// PHP requires whitespace after this tag.
pub const OPEN_TAG: &str = "<?php";

static SPECIAL_SYMBOLS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        ";", "(", ")", "{", "}", "[", "]", "=", "==", "!=", "===", "!==", "++", "--", "=>",
        ">", "<", ">=", "<=", "<=>", ".", ",", "!", "&", "&&", "|", "||", "^", "~", "*", "/",
        "+", "-", "%", ":", "?", "@", "\"", "`", "<?=", "?>",
        // assignment, access and misc operators
        "->", "?->", "::", "??", "??=", "+=", "-=", "*=", "/=", ".=", "%=", "&=", "|=", "^=",
        "**", "**=", "<<", ">>", "<<=", ">>=", "<>", "...", "#[",
    ]
    .into_iter()
    .collect()
});

pub fn is_special_symbol(text: &str) -> bool {
    SPECIAL_SYMBOLS.contains(text)
}

pub fn special_symbols() -> impl Iterator<Item = &'static str> {
    SPECIAL_SYMBOLS.iter().copied()
}

/// True when `left` immediately followed by `right` would scan as different
/// tokens (`+ +$a` as `++$a`, `1 . 'x'` as the float `1.`).
pub fn would_fuse(left: &str, right: &str) -> bool {
    let (Some(l), Some(r)) = (left.chars().last(), right.chars().next()) else {
        return false;
    };
    match (l, r) {
        ('+', '+') | ('-', '-') | ('<', '<') | ('/', '/') | ('/', '*') => true,
        ('.', r) if r.is_ascii_digit() => true,
        (_, '.') => left.starts_with(|c: char| c.is_ascii_digit()),
        _ => false,
    }
}

/// Closing identifier declared by a heredoc/nowdoc start token, with or
/// without the binary `b` prefix.
pub fn heredoc_closing_identifier(text: &str) -> Option<&str> {
    let id = text
        .strip_prefix(|c: char| c == 'b' || c == 'B')
        .unwrap_or(text)
        .strip_prefix(HEREDOC_START)?
        .trim()
        .trim_matches(|c: char| c == '"' || c == '\'');
    (!id.is_empty()).then_some(id)
}
