//! Dictionary literal codec.
//!
//! Parses and renders the brace-delimited key-value micro-format embedded
//! in INI values:
//!
//! ```text
//! {key: value, key2: value2}
//! ```
//!
//! Pairs are separated by a configurable separator
//! ([`Separator::Comma`](crate::Separator::Comma) by default, see
//! [`DictOptions`]); key and value are split on the first
//! `:` and independently trimmed of ASCII spaces. The result is a
//! [`BTreeMap`], so keys are unique (a later pair silently overwrites an
//! earlier one) and rendering is deterministic in key-sorted order.
//!
//! There is no escaping grammar. A value whose trimmed form ends in `}`
//! loses that final brace during parsing, because it cannot be told apart
//! from the closing frame. This is a known lossy boundary of the format,
//! not something the codec attempts to repair.
//!
//! ## Examples
//!
//! ```rust
//! use xini::{parse_dict, render_dict};
//!
//! let dict = parse_dict("{key: value, key2: value2}");
//! assert_eq!(dict.get("key").map(String::as_str), Some("value"));
//! assert_eq!(dict.get("key2").map(String::as_str), Some("value2"));
//!
//! assert_eq!(render_dict(&dict), "{key: value, key2: value2}");
//! ```

use crate::options::DictOptions;
use crate::{Error, Result};
use std::collections::BTreeMap;

/// Parses a dictionary literal with the canonical comma pair separator.
///
/// Equivalent to [`parse_dict_with_options`] with [`DictOptions::default`].
/// Lenient and infallible: the leading `{` is assumed and discarded, a
/// trailing `}` is stripped off value fragments, a pair without `:`
/// degrades to a key with an empty value, and duplicate keys resolve to
/// the last occurrence.
///
/// # Examples
///
/// ```rust
/// use xini::parse_dict;
///
/// let dict = parse_dict("{a: 1, b: 2}");
/// assert_eq!(dict.get("a").map(String::as_str), Some("1"));
///
/// assert!(parse_dict("{}").is_empty());
///
/// // Last write wins on duplicate keys.
/// let dict = parse_dict("{k: first, k: second}");
/// assert_eq!(dict.get("k").map(String::as_str), Some("second"));
/// ```
#[must_use]
pub fn parse_dict(input: &str) -> BTreeMap<String, String> {
    parse_dict_with_options(input, &DictOptions::default())
}

/// Parses a dictionary literal using the given options.
#[must_use]
pub fn parse_dict_with_options(input: &str, options: &DictOptions) -> BTreeMap<String, String> {
    let mut result = BTreeMap::new();

    let mut chars = input.chars();
    chars.next(); // leading delimiter
    let body = chars.as_str().strip_suffix('}').unwrap_or(chars.as_str());

    if body.trim_matches(' ').is_empty() {
        return result;
    }

    for fragment in body.split(options.separator.as_char()) {
        let (raw_key, raw_value) = match fragment.find(':') {
            Some(pos) => (&fragment[..pos], &fragment[pos + 1..]),
            // No colon: the whole fragment becomes a key with empty value.
            None => (fragment, ""),
        };

        let key = raw_key.trim_matches(' ').to_string();
        let mut value = raw_value.trim_matches(' ').to_string();
        if value.ends_with('}') {
            value.pop();
        }

        result.insert(key, value);
    }

    result
}

/// Parses a dictionary literal, rejecting input without the `{`…`}` frame.
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] if the trimmed input does not begin
/// with `{` and end with `}`. Per-pair shape is not validated; a pair
/// without `:` still degrades to a key with an empty value.
pub fn parse_dict_strict(input: &str) -> Result<BTreeMap<String, String>> {
    parse_dict_strict_with_options(input, &DictOptions::default())
}

/// Strict-frame variant of [`parse_dict_with_options`].
///
/// # Errors
///
/// Returns [`Error::MalformedLiteral`] if the trimmed input does not begin
/// with `{` and end with `}`.
pub fn parse_dict_strict_with_options(
    input: &str,
    options: &DictOptions,
) -> Result<BTreeMap<String, String>> {
    let trimmed = input.trim_matches(' ');
    if trimmed.len() < 2 || !trimmed.starts_with('{') || !trimmed.ends_with('}') {
        return Err(Error::malformed_literal(
            "dictionary",
            input,
            "expected a literal of the form `{key: value, ...}`",
        ));
    }
    Ok(parse_dict_with_options(trimmed, options))
}

/// Renders a mapping as a dictionary literal with the canonical comma
/// separator.
///
/// Pairs are emitted as `key: value` in key-sorted order (the map's
/// natural order), joined with `", "`, and wrapped in `{` `}`. The empty
/// map renders as `{}`. Always succeeds.
///
/// # Examples
///
/// ```rust
/// use xini::render_dict;
/// use std::collections::BTreeMap;
///
/// let mut map = BTreeMap::new();
/// map.insert("key".to_string(), "value".to_string());
/// map.insert("key2".to_string(), "value2".to_string());
///
/// assert_eq!(render_dict(&map), "{key: value, key2: value2}");
/// assert_eq!(render_dict(&BTreeMap::new()), "{}");
/// ```
#[must_use]
pub fn render_dict(dictionary: &BTreeMap<String, String>) -> String {
    render_dict_with_options(dictionary, &DictOptions::default())
}

/// Renders a mapping as a dictionary literal using the given options.
#[must_use]
pub fn render_dict_with_options(
    dictionary: &BTreeMap<String, String>,
    options: &DictOptions,
) -> String {
    let mut result = String::from("{");

    for (i, (key, value)) in dictionary.iter().enumerate() {
        result.push_str(key);
        result.push_str(": ");
        result.push_str(value);
        if i != dictionary.len() - 1 {
            result.push_str(options.separator.join_str());
        }
    }

    result.push('}');
    result
}
