//! Attribute and text value templates.
//!
//! A value template is literal text with embedded `{expr}` segments, as in
//! XQuery attribute values or XSLT attribute value templates. `{{` and `}}`
//! outside a segment are escaped braces.

use rowan::{TextRange, TextSize};

use crate::dialect::DialectConfig;
use crate::parser::{self, Parse};

/// One embedded expression of a value template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateExpr {
    /// Segment span including the braces.
    pub range: TextRange,
    /// Span of the expression text between the braces.
    pub expr_range: TextRange,
    /// Parse of the expression text. Offsets are relative to `expr_range`.
    pub parse: Parse,
}

impl TemplateExpr {
    pub fn is_closed(&self) -> bool {
        self.range.end() > self.expr_range.end()
    }
}

/// Spans of the embedded expressions in `text`, braces included.
///
/// Braces nest, and braces inside string literals or comments do not count.
/// An unterminated segment runs to the end of the text.
pub fn scan(text: &str) -> Vec<TextRange> {
    segments(text).into_iter().map(|(range, _)| range).collect()
}

/// Parses every embedded expression of `text`.
pub fn parse(text: &str, dialect: DialectConfig) -> Vec<TemplateExpr> {
    segments(text)
        .into_iter()
        .map(|(range, closed)| {
            let start = usize::from(range.start()) + 1;
            let end = usize::from(range.end()) - usize::from(closed);
            TemplateExpr {
                range,
                expr_range: self::range(start, end),
                parse: parser::parse(&text[start..end], dialect),
            }
        })
        .collect()
}

/// Segment spans, each with whether its closing brace was found.
fn segments(text: &str) -> Vec<(TextRange, bool)> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'{' if bytes.get(i + 1) == Some(&b'{') => i += 2,
            b'}' if bytes.get(i + 1) == Some(&b'}') => i += 2,
            b'{' => {
                let (end, closed) = scan_segment(bytes, i + 1);
                ranges.push((range(i, end), closed));
                i = end;
            }
            _ => i += 1,
        }
    }
    ranges
}

/// Offset just past the `}` closing a segment whose body starts at `start`,
/// or the end of input when there is none.
fn scan_segment(bytes: &[u8], start: usize) -> (usize, bool) {
    let mut depth = 1u32;
    let mut i = start;

    while i < bytes.len() {
        match bytes[i] {
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return (i + 1, true);
                }
            }
            quote @ (b'"' | b'\'') => {
                i = skip_string(bytes, i + 1, quote);
                continue;
            }
            b'(' if bytes.get(i + 1) == Some(&b':') => {
                i = skip_comment(bytes, i + 2);
                continue;
            }
            _ => {}
        }
        i += 1;
    }
    (bytes.len(), false)
}

/// Offset past the closing quote; a doubled quote is an escape.
fn skip_string(bytes: &[u8], mut i: usize, quote: u8) -> usize {
    while i < bytes.len() {
        if bytes[i] == quote {
            if bytes.get(i + 1) == Some(&quote) {
                i += 2;
                continue;
            }
            return i + 1;
        }
        i += 1;
    }
    bytes.len()
}

/// Offset past the `:)` closing a comment. Comments nest.
fn skip_comment(bytes: &[u8], mut i: usize) -> usize {
    let mut depth = 1u32;
    while i < bytes.len() {
        match (bytes[i], bytes.get(i + 1)) {
            (b'(', Some(b':')) => {
                depth += 1;
                i += 2;
            }
            (b':', Some(b')')) => {
                depth -= 1;
                i += 2;
                if depth == 0 {
                    return i;
                }
            }
            _ => i += 1,
        }
    }
    bytes.len()
}

fn range(start: usize, end: usize) -> TextRange {
    // Template text comes from a single source string, so offsets fit in u32.
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}
