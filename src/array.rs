//! Array literal codec.
//!
//! Parses and renders the bracketed array micro-format embedded in INI
//! values:
//!
//! ```text
//! [value, value2, value3]
//! ```
//!
//! Elements are comma-separated and trimmed of leading/trailing ASCII
//! spaces (spaces only — tabs and newlines are preserved). There is no
//! escaping grammar, so an element cannot itself contain `,` or `]`.
//!
//! Parsing is lenient by default: the leading `[` is assumed and discarded,
//! the trailing `]` is stripped off the last element if present, and
//! malformed input degrades to a best-effort result rather than an error.
//! Use [`parse_array_strict`] to reject input without the `[`…`]` frame.
//!
//! ## Examples
//!
//! ```rust
//! use xini::{parse_array, render_array};
//!
//! let elements = parse_array("[value, value2]");
//! assert_eq!(elements, vec!["value", "value2"]);
//!
//! assert_eq!(render_array(&elements), "[value, value2]");
//! assert_eq!(parse_array("[]"), Vec::<String>::new());
//! ```

use crate::{Error, Result};

/// Parses an array literal into its elements, leniently.
///
/// The first character is discarded as the assumed `[` delimiter, the
/// remainder is split on `,`, each fragment is trimmed of ASCII spaces,
/// and a single trailing `]` is removed from the last fragment. Input
/// without proper delimiters produces a best-effort result; this function
/// never fails.
///
/// # Examples
///
/// ```rust
/// use xini::parse_array;
///
/// assert_eq!(parse_array("[a]"), vec!["a"]);
/// assert_eq!(parse_array("[a, b, c]"), vec!["a", "b", "c"]);
/// assert_eq!(parse_array("[]"), Vec::<String>::new());
///
/// // Duplicates and empty elements are preserved.
/// assert_eq!(parse_array("[x, x, ]"), vec!["x", "x", ""]);
/// ```
#[must_use]
pub fn parse_array(input: &str) -> Vec<String> {
    let mut chars = input.chars();
    chars.next(); // leading delimiter
    let body = chars.as_str();

    // An empty literal has nothing left to split once the frame is gone.
    let stripped = body.trim_matches(' ');
    if stripped.is_empty() || stripped == "]" {
        return Vec::new();
    }

    let mut result: Vec<String> = body
        .split(',')
        .map(|fragment| fragment.trim_matches(' ').to_string())
        .collect();

    if let Some(last) = result.last_mut() {
        if last.ends_with(']') {
            last.pop();
        }
    }

    result
}

/// Parses an array literal, rejecting input without the `[`…`]` frame.
///
/// Element handling is identical to [`parse_array`]; only the outer frame
/// is validated. Leading/trailing ASCII spaces around the literal are
/// tolerated.
///
/// # Examples
///
/// ```rust
/// use xini::parse_array_strict;
///
/// assert_eq!(parse_array_strict("[a, b]").unwrap(), vec!["a", "b"]);
/// assert!(parse_array_strict("a, b]").is_err());
/// assert!(parse_array_strict("[a, b").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] if the trimmed input does not begin
/// with `[` and end with `]`.
pub fn parse_array_strict(input: &str) -> Result<Vec<String>> {
    let trimmed = input.trim_matches(' ');
    if trimmed.len() < 2 || !trimmed.starts_with('[') || !trimmed.ends_with(']') {
        return Err(Error::malformed_literal(
            "array",
            input,
            "expected a literal of the form `[element, ...]`",
        ));
    }
    Ok(parse_array(trimmed))
}

/// Renders a sequence of elements as an array literal.
///
/// Elements are joined with `", "` and wrapped in `[` `]`. The empty
/// sequence renders as `[]`. Elements are emitted verbatim; callers must
/// not include `,` or `]` in an element if the result is to round-trip.
///
/// # Examples
///
/// ```rust
/// use xini::render_array;
///
/// assert_eq!(render_array(&["value", "value2"]), "[value, value2]");
/// assert_eq!(render_array(&[] as &[&str]), "[]");
/// ```
#[must_use]
pub fn render_array<S: AsRef<str>>(elements: &[S]) -> String {
    let mut result = String::from("[");

    for (i, element) in elements.iter().enumerate() {
        result.push_str(element.as_ref());
        if i != elements.len() - 1 {
            result.push_str(", ");
        }
    }

    result.push(']');
    result
}
