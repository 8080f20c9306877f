//! Embedded license tag scanning.
//!
//! Finds every `SPDX-License-Identifier:` tag in arbitrary text (case
//! insensitive, comment syntax irrelevant) and parses the expression
//! following each one. Parenthesized expressions may span lines; the
//! scanner consumes them to the balancing parenthesis, folding line
//! breaks into spaces. Extraction is eager and fail-fast: the first
//! malformed expression aborts the whole scan.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::license::{parse_expression, LicenseExpression};
use crate::ParseError;

/// Files at or beyond this many bytes are not scanned for license tags.
pub const MAXIMUM_SOURCE_FILE_LENGTH: u64 = 300_000;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)spdx-license-identifier:").unwrap());

/// Extract every tagged license expression from `text`, in order of
/// appearance.
///
/// Idempotent for a given text; text with no tags yields an empty
/// vector, and a tag with nothing after it yields no occurrence.
pub fn extract_expressions(text: &str) -> Result<Vec<LicenseExpression>, ParseError> {
    let mut found = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(tag) = TAG_PATTERN.find_at(text, pos) else {
            break;
        };
        // Whitespace after the colon may include newlines, so the
        // expression can start on a later line.
        let mut start = tag.end();
        for ch in text[tag.end()..].chars() {
            if ch.is_whitespace() {
                start += ch.len_utf8();
            } else {
                break;
            }
        }
        if start >= text.len() {
            break;
        }
        let line_end = text[start..]
            .find(['\n', '\r'])
            .map(|offset| start + offset)
            .unwrap_or(text.len());
        let line = text[start..line_end].trim_end();

        let source = if line.starts_with('(') {
            let (consumed, resume) = consume_parenthesized(text, start)?;
            pos = resume;
            consumed
        } else {
            pos = line_end + 1;
            line.to_string()
        };
        found.push(parse_expression(&source)?);
    }

    Ok(found)
}

/// Consume a parenthesized expression starting at the `(` at byte
/// offset `start`, returning the consumed source (line breaks replaced
/// with spaces) and the offset to resume scanning from.
fn consume_parenthesized(text: &str, start: usize) -> Result<(String, usize), ParseError> {
    let mut depth = 0usize;
    let mut expr = String::new();
    for (offset, ch) in text[start..].char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        expr.push(if ch == '\n' || ch == '\r' { ' ' } else { ch });
        if depth == 0 {
            return Ok((expr, start + offset + ch.len_utf8()));
        }
    }
    Err(ParseError::UnbalancedParens(expr))
}
