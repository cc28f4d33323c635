//! Input validation and normalization for candidate URLs.
//!
//! Validation is a best-effort heuristic: it accepts anything that starts
//! with an `http://`/`https://` scheme, or anything that starts with a
//! dotted host name ending in an alphabetic TLD of at least two letters.
//! It is not a URL grammar; some odd hosts pass and internationalized
//! names fail.

use thiserror::Error;

/// Scheme prepended to inputs that do not carry one.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Why a piece of user input was not submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a URL to check")]
    Empty,
    #[error("Please enter a valid URL (e.g., https://example.com)")]
    Malformed,
}

/// Validates raw user input and returns the URL to submit.
///
/// The input is trimmed of whitespace and byte-order marks; a missing
/// scheme is replaced by `https://`.
///
/// # Examples
///
/// - `normalize("example.com")` → `Ok("https://example.com")`
/// - `normalize("HTTP://Example.com/a")` → `Ok("HTTP://Example.com/a")`
/// - `normalize("   ")` → `Err(InputError::Empty)`
pub fn normalize(raw: &str) -> Result<String, InputError> {
    let input = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if input.is_empty() {
        return Err(InputError::Empty);
    }
    if !has_url_shape(input) && !starts_with_bare_domain(input) {
        return Err(InputError::Malformed);
    }
    if scheme_len(input).is_some() {
        Ok(input.to_string())
    } else {
        Ok(format!("{DEFAULT_SCHEME_PREFIX}{input}"))
    }
}

/// Length of a leading `http://` or `https://` (any case), if present.
fn scheme_len(s: &str) -> Option<usize> {
    ["https://", "http://"].iter().find_map(|scheme| {
        s.get(..scheme.len())
            .filter(|head| head.eq_ignore_ascii_case(scheme))
            .map(|_| scheme.len())
    })
}

/// Scheme followed by at least one character that is not a line terminator.
fn has_url_shape(s: &str) -> bool {
    let Some(n) = scheme_len(s) else {
        return false;
    };
    s[n..]
        .chars()
        .next()
        .is_some_and(|c| !matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}'))
}

/// True when some prefix of `s` is `label([-.]label)*.tld`, where a label is
/// one or more ASCII alphanumerics and the TLD has at least two letters.
fn starts_with_bare_domain(s: &str) -> bool {
    let bytes = s.as_bytes();
    // The TLD only needs two letters because the pattern is not end-anchored.
    (1..bytes.len().saturating_sub(2)).any(|dot| {
        bytes[dot] == b'.'
            && bytes[dot + 1].is_ascii_alphabetic()
            && bytes[dot + 2].is_ascii_alphabetic()
            && is_label_run(&bytes[..dot])
    })
}

/// Alphanumeric labels joined by single `-` or `.` separators.
fn is_label_run(bytes: &[u8]) -> bool {
    let mut prev_was_sep = true;
    for &b in bytes {
        match b {
            b'-' | b'.' if prev_was_sep => return false,
            b'-' | b'.' => prev_was_sep = true,
            b if b.is_ascii_alphanumeric() => prev_was_sep = false,
            _ => return false,
        }
    }
    !prev_was_sep
}
