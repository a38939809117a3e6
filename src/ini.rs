//! The INI configuration store.
//!
//! [`Ini`] holds sections of key-value string pairs, read from and written
//! to the classic line-oriented INI shape:
//!
//! ```text
//! [section]
//! key=value
//! ; comment
//! ```
//!
//! The store is backed by [`IndexMap`], so sections and keys keep the
//! order they were inserted in (for a parsed file, the file order), and
//! writing a store back out is deterministic.
//!
//! Values are opaque strings to the store. The literal codecs compose on
//! top of it through the typed accessors ([`Ini::get_array`],
//! [`Ini::get_dict`], [`Ini::get_int`] and their `set_*` counterparts),
//! which decode a raw value on the way out and encode a literal string on
//! the way in.
//!
//! ## Examples
//!
//! ```rust
//! use xini::Ini;
//!
//! let ini: Ini = "[array-example]\narray=[value, value2]".parse().unwrap();
//!
//! assert_eq!(ini.get("array-example", "array"), Some("[value, value2]"));
//! assert_eq!(ini.get_array("array-example", "array"), vec!["value", "value2"]);
//! ```

use crate::options::DictOptions;
use crate::{array, dict, num, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// An INI configuration store: sections of key-value string pairs, in
/// insertion order.
///
/// # Examples
///
/// ```rust
/// use xini::Ini;
///
/// let mut ini = Ini::new();
/// ini.set("server", "host", "localhost");
/// ini.set("server", "port", "0x1F90");
///
/// assert_eq!(ini.get_int("server", "port").unwrap(), 8080);
/// assert_eq!(ini.to_string(), "[server]\nhost=localhost\nport=0x1F90\n");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ini {
    sections: IndexMap<String, IndexMap<String, String>>,
}

impl Ini {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads a store from an I/O stream.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if reading fails or the
    /// bytes are not valid UTF-8.
    pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Self> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Ok(Self::parse_raw(&content))
    }

    /// Reads a store from a file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be read.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::parse_raw(&content))
    }

    /// Line scanner. Empty lines and `;` comment lines are skipped,
    /// `[name]` switches the current section, and other lines split on
    /// the first `=` (lines without one are skipped). Keys and values are
    /// stored verbatim; later duplicates overwrite.
    fn parse_raw(content: &str) -> Self {
        let mut ini = Ini::new();
        let mut current_section = String::new();

        for line in content.lines() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() || line.starts_with(';') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len() - 1].to_string();
                continue;
            }
            if let Some(pos) = line.find('=') {
                ini.set(&current_section, &line[..pos], &line[pos + 1..]);
            }
        }

        ini
    }

    /// Returns the raw value of a key, or `None` if the section or key is
    /// absent.
    #[must_use]
    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|pairs| pairs.get(key))
            .map(String::as_str)
    }

    /// Returns the raw value of a key, or the empty string if the section
    /// or key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xini::Ini;
    ///
    /// let ini = Ini::new();
    /// assert_eq!(ini.get_raw("missing", "key"), "");
    /// ```
    #[must_use]
    pub fn get_raw(&self, section: &str, key: &str) -> &str {
        self.get(section, key).unwrap_or("")
    }

    /// Sets the raw value of a key, creating the section if needed.
    pub fn set(&mut self, section: &str, key: &str, value: &str) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value.to_string());
    }

    /// Returns `true` if the section exists.
    #[must_use]
    pub fn contains_section(&self, section: &str) -> bool {
        self.sections.contains_key(section)
    }

    /// Returns `true` if the key exists in the section.
    #[must_use]
    pub fn contains_key(&self, section: &str, key: &str) -> bool {
        self.get(section, key).is_some()
    }

    /// Removes a key from a section, returning its value if it existed.
    pub fn remove_key(&mut self, section: &str, key: &str) -> Option<String> {
        self.sections
            .get_mut(section)
            .and_then(|pairs| pairs.shift_remove(key))
    }

    /// Removes a whole section with its keys.
    pub fn remove_section(&mut self, section: &str) -> Option<IndexMap<String, String>> {
        self.sections.shift_remove(section)
    }

    /// Merges another store into this one. Sections are combined;
    /// conflicting keys take the other store's value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xini::Ini;
    ///
    /// let mut base = Ini::new();
    /// base.set("app", "mode", "debug");
    ///
    /// let mut overlay = Ini::new();
    /// overlay.set("app", "mode", "release");
    ///
    /// base.merge(overlay);
    /// assert_eq!(base.get("app", "mode"), Some("release"));
    /// ```
    pub fn merge(&mut self, other: Ini) {
        for (section, pairs) in other.sections {
            let target = self.sections.entry(section).or_default();
            for (key, value) in pairs {
                target.insert(key, value);
            }
        }
    }

    /// Iterates over `(section, pairs)` in insertion order.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &IndexMap<String, String>)> {
        self.sections
            .iter()
            .map(|(name, pairs)| (name.as_str(), pairs))
    }

    /// Returns the number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Returns `true` if the store has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Decodes a key's value as an array literal. An absent key decodes
    /// as the empty array.
    #[must_use]
    pub fn get_array(&self, section: &str, key: &str) -> Vec<String> {
        array::parse_array(self.get_raw(section, key))
    }

    /// Decodes a key's value as a dictionary literal with the canonical
    /// comma separator. An absent key decodes as the empty map.
    #[must_use]
    pub fn get_dict(&self, section: &str, key: &str) -> BTreeMap<String, String> {
        dict::parse_dict(self.get_raw(section, key))
    }

    /// Decodes a key's value as a dictionary literal using the given
    /// options.
    #[must_use]
    pub fn get_dict_with_options(
        &self,
        section: &str,
        key: &str,
        options: &DictOptions,
    ) -> BTreeMap<String, String> {
        dict::parse_dict_with_options(self.get_raw(section, key), options)
    }

    /// Decodes a key's value as an integer literal.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLiteral`](crate::Error::InvalidLiteral) if
    /// the value (or the empty string, for an absent key) is not a valid
    /// numeral.
    pub fn get_int(&self, section: &str, key: &str) -> Result<i64> {
        num::parse_int(self.get_raw(section, key))
    }

    /// Encodes a sequence as an array literal and stores it.
    pub fn set_array<S: AsRef<str>>(&mut self, section: &str, key: &str, elements: &[S]) {
        self.set(section, key, &array::render_array(elements));
    }

    /// Encodes a mapping as a dictionary literal and stores it.
    pub fn set_dict(&mut self, section: &str, key: &str, dictionary: &BTreeMap<String, String>) {
        self.set(section, key, &dict::render_dict(dictionary));
    }

    /// Encodes an integer as a hex literal and stores it.
    pub fn set_int_hex(&mut self, section: &str, key: &str, value: i64) {
        self.set(section, key, &num::render_hex(value));
    }

    /// Encodes an integer as a full-width binary literal and stores it.
    pub fn set_int_binary(&mut self, section: &str, key: &str, value: i64) {
        self.set(section, key, &num::render_binary(value));
    }

    /// Writes the store to an I/O stream in `[section]` / `key=value`
    /// form.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if writing fails.
    pub fn to_writer<W: io::Write>(&self, mut writer: W) -> Result<()> {
        writer.write_all(self.to_string().as_bytes())?;
        Ok(())
    }

    /// Writes the store to a file, replacing its contents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the file cannot be
    /// written.
    pub fn to_path<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        std::fs::write(path, self.to_string())?;
        Ok(())
    }
}

impl FromStr for Ini {
    type Err = crate::Error;

    /// Parses INI text. The line scanner is lenient and this never fails;
    /// the `Result` exists to satisfy the `FromStr` contract.
    fn from_str(s: &str) -> Result<Self> {
        Ok(Self::parse_raw(s))
    }
}

impl fmt::Display for Ini {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (section, pairs) in &self.sections {
            writeln!(f, "[{}]", section)?;
            for (key, value) in pairs {
                writeln!(f, "{}={}", key, value)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections_and_pairs() {
        let ini: Ini = "[a]\nk=v\n[b]\nk2=v2".parse().unwrap();
        assert_eq!(ini.get("a", "k"), Some("v"));
        assert_eq!(ini.get("b", "k2"), Some("v2"));
        assert_eq!(ini.get("a", "missing"), None);
        assert_eq!(ini.get_raw("a", "missing"), "");
    }

    #[test]
    fn skips_comments_blank_lines_and_bare_lines() {
        let ini: Ini = "; header\n\n[s]\n; note\nnoequals\nk=v".parse().unwrap();
        assert_eq!(ini.get("s", "k"), Some("v"));
        assert!(!ini.contains_key("s", "noequals"));
    }

    #[test]
    fn keys_before_any_section_land_in_unnamed_section() {
        let ini: Ini = "k=v\n[s]\nk2=v2".parse().unwrap();
        assert_eq!(ini.get("", "k"), Some("v"));
    }

    #[test]
    fn values_are_stored_verbatim() {
        // No trimming around `=`, and a value may itself contain `=`.
        let ini: Ini = "[s]\nk = v \neq=a=b".parse().unwrap();
        assert_eq!(ini.get("s", "k "), Some(" v "));
        assert_eq!(ini.get("s", "eq"), Some("a=b"));
    }

    #[test]
    fn later_duplicate_key_overwrites() {
        let ini: Ini = "[s]\nk=first\nk=second".parse().unwrap();
        assert_eq!(ini.get("s", "k"), Some("second"));
    }

    #[test]
    fn crlf_input_is_accepted() {
        let ini: Ini = "[s]\r\nk=v\r\n".parse().unwrap();
        assert_eq!(ini.get("s", "k"), Some("v"));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let mut ini = Ini::new();
        ini.set("b", "y", "2");
        ini.set("a", "x", "1");

        let rendered = ini.to_string();
        assert_eq!(rendered, "[b]\ny=2\n[a]\nx=1\n");
        assert_eq!(rendered.parse::<Ini>().unwrap(), ini);
    }

    #[test]
    fn remove_and_exists() {
        let mut ini: Ini = "[s]\nk=v".parse().unwrap();
        assert!(ini.contains_section("s"));
        assert!(ini.contains_key("s", "k"));

        assert_eq!(ini.remove_key("s", "k"), Some("v".to_string()));
        assert!(!ini.contains_key("s", "k"));

        assert!(ini.remove_section("s").is_some());
        assert!(!ini.contains_section("s"));
    }

    #[test]
    fn merge_is_last_write_wins() {
        let mut base: Ini = "[s]\na=1\nb=2".parse().unwrap();
        let overlay: Ini = "[s]\nb=20\n[t]\nc=3".parse().unwrap();

        base.merge(overlay);
        assert_eq!(base.get("s", "a"), Some("1"));
        assert_eq!(base.get("s", "b"), Some("20"));
        assert_eq!(base.get("t", "c"), Some("3"));
    }

    #[test]
    fn typed_accessors_compose_with_codecs() {
        let mut ini: Ini = "[s]\narr=[a, b]\ndict={k: v}\nnum=0x1A".parse().unwrap();

        assert_eq!(ini.get_array("s", "arr"), vec!["a", "b"]);
        assert_eq!(
            ini.get_dict("s", "dict").get("k").map(String::as_str),
            Some("v")
        );
        assert_eq!(ini.get_int("s", "num").unwrap(), 26);

        ini.set_array("s", "arr2", &["x", "y"]);
        assert_eq!(ini.get("s", "arr2"), Some("[x, y]"));

        ini.set_int_hex("s", "hex", -26);
        assert_eq!(ini.get("s", "hex"), Some("0xFFFFFFFFFFFFFFE6"));

        ini.set_int_binary("s", "bin", 5);
        assert_eq!(ini.get_int("s", "bin").unwrap(), 5);
    }

    #[test]
    fn absent_key_decodes_as_empty_collections() {
        let ini = Ini::new();
        assert!(ini.get_array("s", "k").is_empty());
        assert!(ini.get_dict("s", "k").is_empty());
        assert!(ini.get_int("s", "k").is_err());
    }

    #[test]
    fn serde_round_trip_through_json() {
        let ini: Ini = "[s]\nk=v".parse().unwrap();
        let json = serde_json::to_string(&ini).unwrap();
        let back: Ini = serde_json::from_str(&json).unwrap();
        assert_eq!(ini, back);
    }
}
