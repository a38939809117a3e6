//! INI literal grammar reference.
//!
//! This module documents the micro-format grammar used for structured
//! values embedded inside INI `key=value` lines, as implemented by this
//! library.
//!
//! # Overview
//!
//! The outer INI layer is a plain line-oriented format:
//!
//! ```text
//! ; comment
//! [section]
//! key=value
//! ```
//!
//! - Lines are split on the first `=`; keys and values are stored
//!   verbatim (no trimming).
//! - `[name]` lines switch the current section; keys before any header
//!   belong to the unnamed section `""`.
//! - Empty lines and lines starting with `;` are ignored; lines without
//!   `=` are skipped.
//!
//! Values are opaque strings at this layer. Three literal micro-formats
//! give individual values structure.
//!
//! # Array literals
//!
//! ```text
//! [element, element2, element3]
//! ```
//!
//! - Ordered, duplicates allowed, `[]` is the empty array.
//! - Elements are split on `,` and trimmed of leading/trailing ASCII
//!   spaces (U+0020 only; tabs and newlines are preserved).
//! - No escaping: an element cannot contain `,` or `]`.
//! - Lenient parsing: the frame is assumed, not validated. Malformed
//!   input degrades to a best-effort result.
//!
//! # Dictionary literals
//!
//! ```text
//! {key: value, key2: value2}
//! ```
//!
//! - Pairs are split on the separator (`,` canonical, `;` variant), then
//!   on the **first** `:`; key and value are trimmed of ASCII spaces
//!   independently.
//! - Keys are unique; a later duplicate silently overwrites.
//! - A pair without `:` becomes a key with an empty value.
//! - Rendering is deterministic in key-sorted order.
//! - **Lossy boundary**: a value whose trimmed form ends in `}` loses
//!   that final brace when parsed, because it cannot be told apart from
//!   the closing frame. `{k: v}}` parses to `k → v`, so a value ending
//!   in `}` does not round-trip. There is no escape syntax to fix this.
//!
//! # Integer literals
//!
//! ```text
//! 0b0000000000000000000000000000000000000000000000000000000000000101
//! 0x1A
//! 42
//! ```
//!
//! | Notation | Prefix | Digits | Rendered form |
//! |----------|--------|--------|---------------|
//! | Binary | `0b` (lowercase) | `0`/`1` | full 64-bit two's-complement pattern |
//! | Hex | `0x` (lowercase) | `0-9a-fA-F` | uppercase, no padding |
//! | Decimal | none | `0-9`, optional sign | not rendered by this codec |
//!
//! - Values are signed 64-bit. Negative hex and binary renderings show
//!   the full-width two's-complement digits, never a `-0x…` form.
//! - Parsing runs a weak decimal probe first (the input must start with
//!   a digit after optional whitespace and sign), then consumes digits
//!   greedily in the dispatched base; trailing junk after at least one
//!   valid digit is ignored. `notanumber` fails the probe; `0xGARBAGE`
//!   passes the probe but fails hex digit parsing.
//!
//! # Round-trip guarantees
//!
//! - Arrays: exact, provided no element contains `,` or `]` or has
//!   leading/trailing spaces.
//! - Dictionaries: exact under the same constraints for `:` and the
//!   separator, and provided no value ends in `}`.
//! - Integers: hex and binary renderings parse back to the same value
//!   for every `i64`; the binary form is fixed-width, not minimal.

// This module contains only documentation; no implementation code
