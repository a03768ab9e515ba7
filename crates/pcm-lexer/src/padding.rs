//! Heredoc/nowdoc padding correction.
//!
//! A closing identifier indented by N whitespace characters declares that
//! every body line carries the same N characters of indentation. They are
//! removed here, before normalization, so the reassembler can emit the body
//! with its closing identifier at column zero.

use pcm_core::{RawUnit, UnitCategory};

/// Strip the closing delimiter's indentation from every heredoc/nowdoc line.
///
/// Lines that do not start with exactly that indentation are left as they
/// are. A start marker without a closing unit collects to the end of the
/// stream and is left untouched.
pub fn fix_heredoc_padding(units: Vec<RawUnit>) -> Vec<RawUnit> {
    let mut result = Vec::with_capacity(units.len());
    let mut iter = units.into_iter();

    while let Some(unit) = iter.next() {
        let opens = unit.category == UnitCategory::HeredocStart;
        result.push(unit);
        if !opens {
            continue;
        }

        let mut doc = Vec::new();
        for next in iter.by_ref() {
            let closes = next.category == UnitCategory::HeredocEnd;
            doc.push(next);
            if closes {
                break;
            }
        }

        let padding = doc
            .last()
            .filter(|u| u.category == UnitCategory::HeredocEnd)
            .map(|u| closing_padding(&u.text).to_string())
            .unwrap_or_default();
        result.extend(doc.into_iter().map(|u| strip_padding(u, &padding)));
    }

    result
}

/// Leading whitespace of a closing-identifier unit.
pub fn closing_padding(text: &str) -> &str {
    let end = text.find(|c: char| !matches!(c, ' ' | '\t')).unwrap_or(text.len());
    &text[..end]
}

fn strip_padding(mut unit: RawUnit, padding: &str) -> RawUnit {
    if padding.is_empty() {
        return unit;
    }
    let lines: Vec<&str> = unit
        .text
        .split('\n')
        .map(|line| match line.strip_prefix(padding) {
            Some(rest) => rest,
            None => {
                if !line.trim().is_empty() {
                    tracing::warn!(line, padding = padding.len(), "heredoc line is not indented by the closing padding");
                }
                line
            }
        })
        .collect();
    unit.text = lines.join("\n");
    unit
}
