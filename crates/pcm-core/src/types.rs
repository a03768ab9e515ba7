use serde::{Deserialize, Serialize};

/// Lexical category assigned by a scanner to each raw unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    /// `<?php` plus the single whitespace character that terminates it.
    OpenTag,
    /// `<?=`
    OpenTagWithEcho,
    /// `?>` plus an optional single trailing newline.
    CloseTag,
    /// Literal text outside any code region.
    InlineMarkup,
    /// `// …` or `# …`, without the terminating newline.
    LineComment,
    /// `/* … */`
    BlockComment,
    /// `/** … */`
    DocComment,
    /// Quoted strings and heredoc/nowdoc bodies. Never re-whitespaced.
    StringLiteral,
    /// `<<<ID`, `<<<"ID"` or `<<<'ID'` including the line break after it.
    HeredocStart,
    /// The closing identifier of a heredoc/nowdoc with its indentation.
    HeredocEnd,
    Whitespace,
    /// Identifiers, keywords, variables, numbers and operators.
    Other,
}

impl UnitCategory {
    pub fn is_region_open(&self) -> bool {
        matches!(self, Self::OpenTag | Self::OpenTagWithEcho)
    }

    /// Units whose text must reach the output untouched.
    pub fn is_string_like(&self) -> bool {
        matches!(self, Self::StringLiteral)
    }

    pub fn is_comment(&self) -> bool {
        matches!(self, Self::LineComment | Self::BlockComment | Self::DocComment)
    }
}

/// One lexical unit as produced by a scanner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUnit {
    pub category: UnitCategory,
    pub text: String,
}

impl RawUnit {
    pub fn new(category: UnitCategory, text: impl Into<String>) -> Self {
        Self { category, text: text.into() }
    }
}

/// Normalized token text. Everything the reassembler needs is in `text`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub text: String,
}

impl TokenRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentKind {
    Code,
    Markup,
}

/// A maximal run of same-kind tokens, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub kind: SegmentKind,
    /// Uniqueness key; increments once per kind transition.
    pub sequence_index: usize,
    pub tokens: Vec<TokenRecord>,
}

impl Segment {
    pub fn new(kind: SegmentKind, sequence_index: usize) -> Self {
        Self { kind, sequence_index, tokens: Vec::new() }
    }

    pub fn push(&mut self, text: impl Into<String>) {
        self.tokens.push(TokenRecord::new(text));
    }

    pub fn is_code(&self) -> bool {
        self.kind == SegmentKind::Code
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(|t| t.text.as_str())
    }
}
