//! Configuration options for dictionary literals.
//!
//! The dictionary micro-format has two separator dialects in the wild:
//! comma-separated pairs (canonical, matching the array literal delimiter)
//! and semicolon-separated pairs. This module provides:
//!
//! - [`Separator`]: the pair-separator choice
//! - [`DictOptions`]: builder-style options consumed by the
//!   `*_with_options` dictionary functions
//!
//! ## Examples
//!
//! ```rust
//! use xini::{parse_dict_with_options, render_dict_with_options, DictOptions, Separator};
//! use std::collections::BTreeMap;
//!
//! let options = DictOptions::new().with_separator(Separator::Semicolon);
//!
//! let dict = parse_dict_with_options("{a: 1; b: 2}", &options);
//! assert_eq!(dict.get("b").map(String::as_str), Some("2"));
//!
//! let mut map = BTreeMap::new();
//! map.insert("a".to_string(), "1".to_string());
//! map.insert("b".to_string(), "2".to_string());
//! assert_eq!(render_dict_with_options(&map, &options), "{a: 1; b: 2}");
//! ```

/// Pair separator for dictionary literals.
///
/// # Examples
///
/// ```rust
/// use xini::Separator;
///
/// assert_eq!(Separator::Comma.as_char(), ',');
/// assert_eq!(Separator::Semicolon.as_char(), ';');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Separator {
    /// `,` — canonical, shared with the array literal delimiter.
    #[default]
    Comma,
    /// `;` — compatibility variant.
    Semicolon,
}

impl Separator {
    /// Returns the separator character used when splitting pairs.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Semicolon => ';',
        }
    }

    /// Returns the separator string used when joining rendered pairs
    /// (separator followed by a space).
    #[must_use]
    pub const fn join_str(&self) -> &'static str {
        match self {
            Separator::Comma => ", ",
            Separator::Semicolon => "; ",
        }
    }
}

/// Options for dictionary literal parsing and rendering.
///
/// # Examples
///
/// ```rust
/// use xini::{DictOptions, Separator};
///
/// let options = DictOptions::new().with_separator(Separator::Semicolon);
/// assert_eq!(options.separator, Separator::Semicolon);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DictOptions {
    pub separator: Separator,
}

impl DictOptions {
    /// Creates default options (comma pair separator).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pair separator.
    #[must_use]
    pub fn with_separator(mut self, separator: Separator) -> Self {
        self.separator = separator;
        self
    }
}
