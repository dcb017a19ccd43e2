//! Delimited path parsing and formatting.
//!
//! Segments are separated by a delimiter (`.` by default). A segment may also
//! be written in brackets, `a[0]` or `a["key.with.dots"]`, which is how a
//! segment containing the delimiter is spelled.

use crate::types::{Path, Segment};
use crate::validate::ValidationError;

/// Delimiter used by manifest patch files.
pub const DEFAULT_DELIMITER: char = '.';

/// Parse a delimited path string into segments.
///
/// Parsing never fails: an unterminated bracket is kept as literal text.
/// Consecutive or trailing delimiters produce empty segments, and the empty
/// string is a single empty segment.
///
/// # Example
///
/// ```
/// use manifest_path::parse_path;
///
/// assert_eq!(parse_path("a.b.c", '.'), vec!["a", "b", "c"]);
/// assert_eq!(parse_path("a[0].b", '.'), vec!["a", "0", "b"]);
/// assert_eq!(parse_path(r#"a["x.y"]"#, '.'), vec!["a", "x.y"]);
/// assert_eq!(parse_path("a..b", '.'), vec!["a", "", "b"]);
/// assert_eq!(parse_path("", '.'), vec![""]);
/// ```
pub fn parse_path(path: &str, delimiter: char) -> Path {
    scan(path, delimiter, false).unwrap_or_default()
}

/// Parse a path using [`DEFAULT_DELIMITER`].
pub fn parse_dotted_path(path: &str) -> Path {
    parse_path(path, DEFAULT_DELIMITER)
}

/// Format segments back into a delimited path string.
///
/// Segments that are empty or contain the delimiter or brackets are written
/// in quoted bracket form so that [`parse_path`] reads them back unchanged.
///
/// # Example
///
/// ```
/// use manifest_path::{format_path, parse_path};
///
/// let path = vec!["Destiny".to_string(), "a.b".to_string(), "c".to_string()];
/// let s = format_path(&path, '.');
/// assert_eq!(s, r#"Destiny["a.b"].c"#);
/// assert_eq!(parse_path(&s, '.'), path);
/// ```
pub fn format_path(path: &[String], delimiter: char) -> String {
    let mut out = String::new();
    for (i, segment) in path.iter().enumerate() {
        if needs_brackets(segment, delimiter) {
            out.push_str("[\"");
            for c in segment.chars() {
                if c == '"' || c == '\\' {
                    out.push('\\');
                }
                out.push(c);
            }
            out.push_str("\"]");
        } else {
            if i > 0 {
                out.push(delimiter);
            }
            out.push_str(segment);
        }
    }
    out
}

fn needs_brackets(segment: &str, delimiter: char) -> bool {
    segment.is_empty() || segment.contains(|c: char| c == delimiter || c == '[' || c == ']')
}

/// Split `input` into segments. In strict mode an unterminated bracket is an
/// error; otherwise the bracket is taken literally.
pub(crate) fn scan(input: &str, delimiter: char, strict: bool) -> Result<Path, ValidationError> {
    let mut path = Path::new();
    let mut current = String::new();
    // A bracket segment was just pushed; the next delimiter only separates.
    let mut closed = false;
    let mut chars = input.char_indices().peekable();

    while let Some((pos, c)) = chars.next() {
        if c == delimiter {
            if !closed {
                path.push(std::mem::take(&mut current));
            }
            closed = false;
        } else if c == '[' {
            match bracket(&input[pos + 1..]) {
                Some((segment, consumed)) => {
                    if !current.is_empty() {
                        path.push(std::mem::take(&mut current));
                    }
                    path.push(segment);
                    let end = pos + 1 + consumed;
                    while chars.peek().is_some_and(|(i, _)| *i < end) {
                        chars.next();
                    }
                    closed = true;
                }
                None if strict => return Err(ValidationError::UnterminatedBracket(pos)),
                None => {
                    current.push(c);
                    closed = false;
                }
            }
        } else {
            current.push(c);
            closed = false;
        }
    }

    if !closed || !current.is_empty() {
        path.push(current);
    }
    Ok(path)
}

/// Read a bracket body (the text after `[`). Returns the segment and the
/// number of bytes consumed including the closing `]`.
fn bracket(rest: &str) -> Option<(Segment, usize)> {
    match rest.chars().next()? {
        quote @ ('"' | '\'') => {
            let mut segment = String::new();
            let mut escaped = false;
            for (i, c) in rest.char_indices().skip(1) {
                if escaped {
                    segment.push(c);
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == quote {
                    return rest[i + 1..].starts_with(']').then_some((segment, i + 2));
                } else {
                    segment.push(c);
                }
            }
            None
        }
        _ => {
            let end = rest.find(']')?;
            Some((rest[..end].to_string(), end + 1))
        }
    }
}
