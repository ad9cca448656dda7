//! Text codec for the line-oriented settings format.
//!
//! Document format:
//! ```text
//! # comment line, ignored
//! key1=value1
//! key2 = value2        (whitespace around key and value trimmed)
//! malformed line       (no '=', silently ignored)
//! ```
//!
//! The first `=` on a line separates key from value, so values may contain
//! further `=` characters.  Blank lines and lines whose first non-whitespace
//! character is `#` are skipped.  Serialization emits one `key=value` pair
//! per line with no comments.

use tracing::debug;

// ── Public API ────────────────────────────────────────────────────────────────

/// Parses a single line into a `(key, value)` pair.
///
/// Returns `None` for blank lines, comment lines, and lines without a `=`.
/// A malformed line is not an error: the format ignores it by contract, so
/// callers never need to distinguish "comment" from "garbage".
///
/// # Examples
///
/// ```rust
/// use patterns_core::config::format::parse_line;
///
/// assert_eq!(
///     parse_line("host = 10.0.0.1"),
///     Some(("host".to_string(), "10.0.0.1".to_string()))
/// );
/// assert_eq!(parse_line("# a comment"), None);
/// assert_eq!(parse_line("   "), None);
/// assert_eq!(parse_line("no separator here"), None);
/// ```
pub fn parse_line(line: &str) -> Option<(String, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    // Only the first '=' splits; the value keeps any later '=' characters.
    let (key, value) = line.split_once('=')?;
    Some((key.trim().to_string(), value.trim().to_string()))
}

/// Parses a whole settings document into `(key, value)` pairs, in document
/// order.
///
/// Duplicate keys are preserved here; the caller decides the replacement
/// policy (a [`crate::SettingsMap`] keeps the last occurrence, matching a
/// plain map insert per line).
///
/// # Examples
///
/// ```rust
/// use patterns_core::config::format::parse_document;
///
/// let doc = "a=1\n# note\n\nb = two words\nnocolonhere\n";
/// let pairs = parse_document(doc);
/// assert_eq!(pairs, vec![
///     ("a".to_string(), "1".to_string()),
///     ("b".to_string(), "two words".to_string()),
/// ]);
/// ```
pub fn parse_document(text: &str) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (index, line) in text.lines().enumerate() {
        match parse_line(line) {
            Some(pair) => pairs.push(pair),
            None => {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !trimmed.starts_with('#') {
                    debug!("ignoring malformed settings line {}", index + 1);
                }
            }
        }
    }
    pairs
}

/// Serializes `(key, value)` pairs to the on-disk text form, one `key=value`
/// per line, each line terminated with `\n`.
///
/// No comments are emitted and no ordering is imposed beyond the iteration
/// order of `pairs`.
pub fn serialize_settings<I>(pairs: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        out.push_str(&key);
        out.push('=');
        out.push_str(&value);
        out.push('\n');
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
