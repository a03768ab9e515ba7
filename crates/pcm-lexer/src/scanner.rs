//! Hand-written PHP scanner producing classified [`RawUnit`]s.
//!
//! The scanner alternates between two modes. In markup mode it looks for the
//! next `<?php` / `<?=` tag and emits everything before it as inline markup.
//! In code mode it dispatches on the current byte and emits one unit per
//! lexeme until a `?>` switches back to markup.
//!
//! It only classifies as far as minification needs: interpolated strings
//! stay whole, keywords are plain names, casts are `(`, name, `)`.

use crate::traits::Scanner;
use pcm_core::{MinifyError, RawUnit, Result, UnitCategory};

/// Multi-character operators, longest first.
const OPERATORS: &[&str] = &[
    "<=>", "===", "!==", "**=", "...", "<<=", ">>=", "??=", "?->",
    "==", "!=", "<>", "<=", ">=", "&&", "||", "++", "--", "+=", "-=", "*=", "/=", ".=", "%=",
    "&=", "|=", "^=", "->", "=>", "::", "??", "<<", ">>", "**",
];

/// Everything after `__halt_compiler();` is raw data.
const HALT_COMPILER: &str = "__halt_compiler";

/// Scanner for PHP source with `short_open_tag` disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct PhpScanner;

impl PhpScanner {
    pub fn new() -> Self {
        Self
    }
}

impl Scanner for PhpScanner {
    fn scan(&self, text: &str) -> Result<Vec<RawUnit>> {
        Cursor::new(text).run()
    }

    fn name(&self) -> &'static str {
        "php"
    }
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b >= 0x80
}

fn is_ident_byte(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}

fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}

struct Cursor<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    units: Vec<RawUnit>,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, bytes: src.as_bytes(), pos: 0, units: Vec::new() }
    }

    fn run(mut self) -> Result<Vec<RawUnit>> {
        while self.pos < self.bytes.len() {
            self.markup();
            self.code()?;
        }
        Ok(self.units)
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    fn emit(&mut self, category: UnitCategory, start: usize, end: usize) {
        self.units.push(RawUnit::new(category, &self.src[start..end]));
        self.pos = end;
    }

    fn error(&self, at: usize, message: &str) -> MinifyError {
        MinifyError::parse_at(self.src, at, message)
    }

    // ----- markup mode -----

    fn markup(&mut self) {
        let start = self.pos;
        let mut search = start;
        while let Some(found) = self.src[search..].find("<?") {
            let at = search + found;
            if let Some((category, len)) = self.open_tag_at(at) {
                if at > start {
                    self.emit(UnitCategory::InlineMarkup, start, at);
                }
                self.emit(category, at, at + len);
                return;
            }
            search = at + 2;
        }
        if start < self.bytes.len() {
            self.emit(UnitCategory::InlineMarkup, start, self.bytes.len());
        }
    }

    fn open_tag_at(&self, at: usize) -> Option<(UnitCategory, usize)> {
        let rest = &self.bytes[at..];
        if rest.starts_with(b"<?=") {
            return Some((UnitCategory::OpenTagWithEcho, 3));
        }
        if rest.len() < 5 || !rest[2..5].eq_ignore_ascii_case(b"php") {
            return None;
        }
        match rest.get(5..) {
            None | Some([]) => Some((UnitCategory::OpenTag, 5)),
            Some([b'\r', b'\n', ..]) => Some((UnitCategory::OpenTag, 7)),
            Some([b' ' | b'\t' | b'\n' | b'\r', ..]) => Some((UnitCategory::OpenTag, 6)),
            Some(_) => None,
        }
    }

    // ----- code mode -----

    fn code(&mut self) -> Result<()> {
        while let Some(b) = self.peek(0) {
            let start = self.pos;
            match b {
                b'?' if self.peek(1) == Some(b'>') => {
                    self.close_tag(start);
                    return Ok(());
                }
                b if is_space(b) => self.whitespace(start),
                b'#' if self.peek(1) == Some(b'[') => {
                    self.emit(UnitCategory::Other, start, start + 2)
                }
                b'#' => self.line_comment(start),
                b'/' if self.peek(1) == Some(b'/') => self.line_comment(start),
                b'/' if self.peek(1) == Some(b'*') => self.block_comment(start)?,
                b'\'' | b'"' | b'`' => self.quoted(start, 0)?,
                b'b' | b'B' if matches!(self.peek(1), Some(b'\'' | b'"')) => {
                    self.quoted(start, 1)?
                }
                b'b' | b'B' if self.bytes[start + 1..].starts_with(b"<<<") => {
                    if !self.heredoc(start, 1)? {
                        self.name(start);
                    }
                }
                b'<' if self.bytes[start..].starts_with(b"<<<") => {
                    if !self.heredoc(start, 0)? {
                        self.operator(start);
                    }
                }
                b'$' => self.variable(start),
                b'0'..=b'9' => self.number(start),
                b'.' if self.peek(1).is_some_and(|c| c.is_ascii_digit()) => self.number(start),
                b if is_ident_start(b) => {
                    self.name(start);
                    if self.src[start..self.pos].eq_ignore_ascii_case(HALT_COMPILER) && self.halt_compiler()? {
                        return Ok(());
                    }
                }
                b'\\' if self.peek(1).is_some_and(is_ident_start) => self.name(start),
                _ => self.operator(start),
            }
        }
        Ok(())
    }

    fn close_tag(&mut self, start: usize) {
        let mut end = start + 2;
        if self.bytes[end..].starts_with(b"\r\n") {
            end += 2;
        } else if self.bytes.get(end) == Some(&b'\n') {
            end += 1;
        }
        self.emit(UnitCategory::CloseTag, start, end);
    }

    fn whitespace(&mut self, start: usize) {
        let mut end = start;
        while self.bytes.get(end).is_some_and(|&b| is_space(b)) {
            end += 1;
        }
        self.emit(UnitCategory::Whitespace, start, end);
    }

    /// `//` and `#` comments stop before a line break or a `?>`.
    fn line_comment(&mut self, start: usize) {
        let mut end = start + 1;
        while let Some(&b) = self.bytes.get(end) {
            if b == b'\n' || b == b'\r' || self.bytes[end..].starts_with(b"?>") {
                break;
            }
            end += 1;
        }
        self.emit(UnitCategory::LineComment, start, end);
    }

    fn block_comment(&mut self, start: usize) -> Result<()> {
        let Some(found) = self.src[start + 2..].find("*/") else {
            return Err(self.error(start, "unterminated comment"));
        };
        let end = start + 2 + found + 2;
        let is_doc = self.bytes[start..].starts_with(b"/**")
            && self.bytes.get(start + 3).is_some_and(|&b| is_space(b));
        let category = if is_doc { UnitCategory::DocComment } else { UnitCategory::BlockComment };
        self.emit(category, start, end);
        Ok(())
    }

    /// Single, double and backtick quoted strings, optionally `b`-prefixed.
    fn quoted(&mut self, start: usize, prefix: usize) -> Result<()> {
        let end = self.string_end(start, start + prefix)?;
        self.emit(UnitCategory::StringLiteral, start, end);
        Ok(())
    }

    /// Index just past the string whose opening quote sits at `open`.
    ///
    /// Double-quoted and backtick strings may hold `{$…}` and `${…}`
    /// expressions, and those may contain quotes of their own.
    fn string_end(&self, start: usize, open: usize) -> Result<usize> {
        let bytes = self.bytes;
        let quote = bytes[open];
        let interpolates = quote != b'\'';
        let mut i = open + 1;
        loop {
            match bytes.get(i) {
                None => return Err(self.error(start, "unterminated string literal")),
                Some(b'\\') => i += 2,
                Some(&b) if b == quote => return Ok(i + 1),
                Some(b'{') if interpolates && bytes.get(i + 1) == Some(&b'$') => {
                    i = self.interpolation_end(start, i + 1)?
                }
                Some(b'$') if interpolates && bytes.get(i + 1) == Some(&b'{') => {
                    i = self.interpolation_end(start, i + 2)?
                }
                Some(_) => i += 1,
            }
        }
    }

    /// Index just past the `}` closing an interpolation whose body starts at `from`.
    fn interpolation_end(&self, start: usize, from: usize) -> Result<usize> {
        let mut depth = 1;
        let mut i = from;
        loop {
            match self.bytes.get(i) {
                None => return Err(self.error(start, "unterminated string interpolation")),
                Some(b'{') => {
                    depth += 1;
                    i += 1;
                }
                Some(b'}') => {
                    depth -= 1;
                    i += 1;
                    if depth == 0 {
                        return Ok(i);
                    }
                }
                Some(b'\'' | b'"' | b'`') => i = self.string_end(start, i)?,
                Some(_) => i += 1,
            }
        }
    }

    /// After a `__halt_compiler` name: when `()` and `;` (or `?>`) follow,
    /// the rest of the input is data and becomes one inline markup unit.
    fn halt_compiler(&mut self) -> Result<bool> {
        for want in [b'(', b')'] {
            self.skip_whitespace();
            if self.peek(0) != Some(want) {
                return Ok(false);
            }
            self.emit(UnitCategory::Other, self.pos, self.pos + 1);
        }
        self.skip_whitespace();
        match self.peek(0) {
            Some(b';') => self.emit(UnitCategory::Other, self.pos, self.pos + 1),
            Some(b'?') if self.peek(1) == Some(b'>') => self.close_tag(self.pos),
            _ => return Ok(false),
        }
        if self.pos < self.bytes.len() {
            self.emit(UnitCategory::InlineMarkup, self.pos, self.bytes.len());
        }
        Ok(true)
    }

    fn skip_whitespace(&mut self) {
        if self.peek(0).is_some_and(is_space) {
            self.whitespace(self.pos);
        }
    }

    /// Returns `false` when the `<<<` does not open a well-formed heredoc, so
    /// the caller scans it as operators instead. `prefix` is 1 for `b<<<`.
    fn heredoc(&mut self, start: usize, prefix: usize) -> Result<bool> {
        let bytes = self.bytes;
        let mut i = start + prefix + 3;
        while matches!(bytes.get(i), Some(b' ' | b'\t')) {
            i += 1;
        }
        let quote = match bytes.get(i).copied() {
            Some(q @ (b'\'' | b'"')) => {
                i += 1;
                Some(q)
            }
            _ => None,
        };
        if !bytes.get(i).is_some_and(|&b| is_ident_start(b)) {
            return Ok(false);
        }
        let id_start = i;
        while bytes.get(i).is_some_and(|&b| is_ident_byte(b)) {
            i += 1;
        }
        let id = &self.src[id_start..i];
        if let Some(q) = quote {
            if bytes.get(i) != Some(&q) {
                return Ok(false);
            }
            i += 1;
        }
        if bytes[i..].starts_with(b"\r\n") {
            i += 2;
        } else if matches!(bytes.get(i), Some(b'\n' | b'\r')) {
            i += 1;
        } else {
            return Ok(false);
        }
        self.emit(UnitCategory::HeredocStart, start, i);

        let body_start = i;
        let mut line = i;
        loop {
            let mut j = line;
            while matches!(bytes.get(j), Some(b' ' | b'\t')) {
                j += 1;
            }
            let after = j + id.len();
            if bytes[j..].starts_with(id.as_bytes())
                && !bytes.get(after).is_some_and(|&b| is_ident_byte(b))
            {
                if line > body_start {
                    self.emit(UnitCategory::StringLiteral, body_start, line);
                }
                self.emit(UnitCategory::HeredocEnd, line, after);
                return Ok(true);
            }
            match self.src[line..].find('\n') {
                Some(k) => line += k + 1,
                None => return Err(self.error(start, &format!("unterminated heredoc `{id}`"))),
            }
        }
    }

    fn variable(&mut self, start: usize) {
        let mut end = start;
        while self.bytes.get(end) == Some(&b'$') {
            end += 1;
        }
        while self.bytes.get(end).is_some_and(|&b| is_ident_byte(b)) {
            end += 1;
        }
        self.emit(UnitCategory::Other, start, end);
    }

    fn number(&mut self, start: usize) {
        let bytes = self.bytes;
        let digits = |mut i: usize| {
            while bytes.get(i).is_some_and(|&b| b.is_ascii_digit() || b == b'_') {
                i += 1;
            }
            i
        };
        let mut end;
        if bytes[start] == b'0' && matches!(bytes.get(start + 1), Some(b'x' | b'X' | b'b' | b'B' | b'o' | b'O')) {
            end = start + 2;
            while bytes.get(end).is_some_and(|&b| b.is_ascii_alphanumeric() || b == b'_') {
                end += 1;
            }
        } else {
            end = digits(start);
            if bytes.get(end) == Some(&b'.') && bytes.get(end + 1) != Some(&b'.') {
                end = digits(end + 1);
            }
            if matches!(bytes.get(end), Some(b'e' | b'E')) {
                let sign = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
                if bytes.get(end + 1 + sign).is_some_and(|b| b.is_ascii_digit()) {
                    end = digits(end + 1 + sign);
                }
            }
        }
        self.emit(UnitCategory::Other, start, end);
    }

    /// Names, including qualified ones such as `\Foo\Bar` or `namespace\baz`.
    fn name(&mut self, start: usize) {
        let bytes = self.bytes;
        let mut end = start;
        if bytes[end] == b'\\' {
            end += 1;
        }
        loop {
            while bytes.get(end).is_some_and(|&b| is_ident_byte(b)) {
                end += 1;
            }
            if bytes.get(end) == Some(&b'\\') && bytes.get(end + 1).is_some_and(|&b| is_ident_start(b)) {
                end += 1;
            } else {
                break;
            }
        }
        self.emit(UnitCategory::Other, start, end);
    }

    fn operator(&mut self, start: usize) {
        let rest = &self.src[start..];
        let len = OPERATORS
            .iter()
            .find(|op| rest.starts_with(**op))
            .map(|op| op.len())
            .unwrap_or_else(|| rest.chars().next().map_or(1, char::len_utf8));
        self.emit(UnitCategory::Other, start, start + len);
    }
}
