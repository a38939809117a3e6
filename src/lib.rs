//! # xini
//!
//! An INI configuration reader/writer with codecs for structured literals
//! embedded in values.
//!
//! INI gives you sections of flat `key=value` strings. Real configurations
//! routinely smuggle structure into those strings; this crate makes the
//! three common micro-formats first-class:
//!
//! - **Arrays**: `[value, value2]` ⇄ `Vec<String>`
//! - **Dictionaries**: `{key: value, key2: value2}` ⇄ `BTreeMap<String, String>`
//! - **Based integers**: `0b101`, `0x1A`, `42` ⇄ `i64`
//!
//! The codecs are pure, stateless functions usable on any string; the
//! [`Ini`] store composes them with section/key access.
//!
//! ## Quick Start
//!
//! ```rust
//! use xini::Ini;
//!
//! let ini: Ini = "\
//! [array-example]
//! array=[value, value2]
//! [dict-example]
//! dict={key: value, key2: value2}
//! [num-example]
//! num=0x1A"
//!     .parse()
//!     .unwrap();
//!
//! assert_eq!(ini.get_array("array-example", "array"), vec!["value", "value2"]);
//! assert_eq!(
//!     ini.get_dict("dict-example", "dict").get("key2").map(String::as_str),
//!     Some("value2")
//! );
//! assert_eq!(ini.get_int("num-example", "num").unwrap(), 26);
//! ```
//!
//! ## Using the codecs directly
//!
//! ```rust
//! use xini::{parse_array, render_array, parse_dict, render_dict, parse_int, render_hex};
//!
//! let elements = parse_array("[a, b, c]");
//! assert_eq!(render_array(&elements), "[a, b, c]");
//!
//! let dict = parse_dict("{k: v}");
//! assert_eq!(render_dict(&dict), "{k: v}");
//!
//! assert_eq!(parse_int("0b101").unwrap(), 5);
//! assert_eq!(render_hex(26), "0x1A");
//! ```
//!
//! ## Leniency and strictness
//!
//! The lenient parsers never fail: malformed delimiters degrade to a
//! best-effort result, a dictionary pair without `:` becomes a key with an
//! empty value, and duplicate keys resolve to the last occurrence. This
//! matches the forgiving behavior expected of INI tooling. When rejecting
//! bad input matters more than tolerance, use [`parse_array_strict`] and
//! [`parse_dict_strict`], which validate the `[`…`]` / `{`…`}` frame.
//!
//! Integer parsing is the one operation with a real failure mode:
//! a value that is not a numeral reports [`Error::InvalidLiteral`].
//!
//! ## Known format boundaries
//!
//! There is no escaping or quoting grammar. Array elements cannot contain
//! `,` or `]`; dictionary values cannot contain the pair separator, and a
//! value ending in `}` loses that brace when parsed (see [`spec`] for the
//! full grammar, including this documented lossy case).
//!
//! ## Concurrency
//!
//! All codec functions are pure: they read only their input and return a
//! fresh container, so they are freely callable from multiple threads.
//! [`Ini`] is an ordinary owned value with `&`/`&mut` access discipline.

pub mod array;
pub mod dict;
pub mod error;
pub mod ini;
pub mod num;
pub mod options;
pub mod spec;

pub use array::{parse_array, parse_array_strict, render_array};
pub use dict::{
    parse_dict, parse_dict_strict, parse_dict_strict_with_options, parse_dict_with_options,
    render_dict, render_dict_with_options,
};
pub use error::{Error, Result};
pub use ini::Ini;
pub use num::{parse_int, render_binary, render_hex, Radix};
pub use options::{DictOptions, Separator};

use std::io;
use std::path::Path;

/// Parses INI text into a store. The line scanner is lenient and never
/// fails.
///
/// # Examples
///
/// ```rust
/// use xini::from_str;
///
/// let ini = from_str("[s]\nk=v");
/// assert_eq!(ini.get("s", "k"), Some("v"));
/// ```
#[must_use]
pub fn from_str(s: &str) -> Ini {
    // Infallible; the FromStr impl exists for `str::parse` ergonomics.
    s.parse().unwrap_or_default()
}

/// Reads a store from an I/O stream.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails or the bytes are not valid
/// UTF-8.
pub fn from_reader<R: io::Read>(reader: R) -> Result<Ini> {
    Ini::from_reader(reader)
}

/// Reads a store from a file.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read.
pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Ini> {
    Ini::from_path(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_and_codecs_compose() {
        let mut ini = from_str("[array-example]\narray=[value, value2]");

        let arr = ini.get_array("array-example", "array");
        assert_eq!(arr, vec!["value", "value2"]);

        ini.set_array("array-example", "copy", &arr);
        assert_eq!(ini.get("array-example", "copy"), Some("[value, value2]"));
    }

    #[test]
    fn from_reader_accepts_any_read() {
        let cursor = std::io::Cursor::new(b"[s]\nk=v");
        let ini = from_reader(cursor).unwrap();
        assert_eq!(ini.get("s", "k"), Some("v"));
    }

    #[test]
    fn codec_surface_is_reexported() {
        assert_eq!(parse_array("[a]"), vec!["a"]);
        assert_eq!(parse_dict("{k: v}").len(), 1);
        assert_eq!(parse_int("42").unwrap(), 42);
        assert_eq!(Radix::classify("0x1"), Radix::Hex);
    }
}
