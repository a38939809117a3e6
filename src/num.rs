//! Integer literal codec.
//!
//! Parses and renders the based-integer micro-format embedded in INI
//! values. Three notations are distinguished by a two-character prefix:
//!
//! ```text
//! 0b101                  binary
//! 0x1A                   hexadecimal
//! 42                     decimal (no prefix)
//! ```
//!
//! Prefixes are lowercase only; `0X1A` is classified as decimal. Values
//! are fixed-width signed 64-bit ([`i64`]). Negative values render in hex
//! and binary as their full 64-bit two's-complement digit pattern, never
//! as a `-0x…` form, and parsing recovers them by reading the pattern
//! back through the unsigned range.
//!
//! Parsing is `strtol`-flavored for compatibility with the configuration
//! files this format comes from:
//!
//! - A **weak decimal probe** runs first: the input must begin, after
//!   optional ASCII whitespace and an optional sign, with a decimal
//!   digit. Every prefixed literal passes because it starts with `0`;
//!   `notanumber` is rejected before any base dispatch.
//! - After dispatch, digits are consumed greedily from the start of the
//!   remainder; once at least one digit was read, anything from the first
//!   invalid digit onward is ignored.
//!
//! ## Examples
//!
//! ```rust
//! use xini::{parse_int, render_binary, render_hex};
//!
//! assert_eq!(parse_int("0x1A").unwrap(), 26);
//! assert_eq!(parse_int("0b101").unwrap(), 5);
//! assert_eq!(parse_int("42").unwrap(), 42);
//!
//! assert_eq!(render_hex(26), "0x1A");
//! assert_eq!(parse_int(&render_binary(-1)).unwrap(), -1);
//! ```

use crate::{Error, Result};

/// The notation of an integer literal, detected from its prefix.
///
/// # Examples
///
/// ```rust
/// use xini::Radix;
///
/// assert_eq!(Radix::classify("0b101"), Radix::Binary);
/// assert_eq!(Radix::classify("0x1A"), Radix::Hex);
/// assert_eq!(Radix::classify("42"), Radix::Decimal);
/// // Prefixes are lowercase only.
/// assert_eq!(Radix::classify("0X1A"), Radix::Decimal);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Radix {
    Binary,
    Hex,
    Decimal,
}

impl Radix {
    /// Classifies a literal by its prefix: `0b` (lowercase) is binary,
    /// `0x` (lowercase) is hex, anything else is decimal.
    #[must_use]
    pub fn classify(input: &str) -> Radix {
        if input.starts_with("0b") {
            Radix::Binary
        } else if input.starts_with("0x") {
            Radix::Hex
        } else {
            Radix::Decimal
        }
    }

    /// Returns the numeric base of this notation.
    #[must_use]
    pub const fn base(&self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Hex => 16,
            Radix::Decimal => 10,
        }
    }
}

/// The weak validity probe: does a base-10 conversion of the whole input
/// find at least one digit to consume? Prefixed literals always pass
/// because they start with `0`.
fn decimal_probe(input: &str) -> bool {
    let s = input.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let s = s
        .strip_prefix('+')
        .or_else(|| s.strip_prefix('-'))
        .unwrap_or(s);
    s.starts_with(|c: char| c.is_ascii_digit())
}

/// Greedily consumes digits of `base` from the start of `digits`,
/// accumulating the full unsigned 64-bit pattern.
fn parse_pattern(literal: &str, digits: &str, base: u32) -> Result<u64> {
    let mut value: u64 = 0;
    let mut any = false;

    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(base) else { break };
        value = value
            .checked_mul(u64::from(base))
            .and_then(|v| v.checked_add(u64::from(digit)))
            .ok_or_else(|| Error::invalid_literal(literal, "out of range for a 64-bit integer"))?;
        any = true;
    }

    if !any {
        return Err(Error::invalid_literal(
            literal,
            "no digits to parse in the dispatched base",
        ));
    }
    Ok(value)
}

/// Greedy signed decimal parse: optional ASCII whitespace, optional sign,
/// then digits up to the first non-digit.
fn parse_decimal(literal: &str) -> Result<i64> {
    let s = literal.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, s) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };

    let mut value: i64 = 0;
    let mut any = false;

    for ch in s.chars() {
        let Some(digit) = ch.to_digit(10) else { break };
        let digit = i64::from(digit);
        value = value
            .checked_mul(10)
            .and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })
            .ok_or_else(|| Error::invalid_literal(literal, "out of range for a 64-bit integer"))?;
        any = true;
    }

    if !any {
        return Err(Error::invalid_literal(
            literal,
            "no digits to parse in the dispatched base",
        ));
    }
    Ok(value)
}

/// Parses an integer literal in any of the three notations.
///
/// The whole input is first checked with the weak decimal probe, then
/// dispatched by [`Radix::classify`]: the recognized prefix is stripped
/// and the remainder is read in the corresponding base. Hex and binary
/// digits accumulate into the full 64-bit two's-complement pattern, so
/// `0xFFFFFFFFFFFFFFE6` parses to `-26`.
///
/// # Examples
///
/// ```rust
/// use xini::parse_int;
///
/// assert_eq!(parse_int("0b101").unwrap(), 5);
/// assert_eq!(parse_int("0x1A").unwrap(), 26);
/// assert_eq!(parse_int("-42").unwrap(), -42);
/// assert_eq!(parse_int("0xFFFFFFFFFFFFFFE6").unwrap(), -26);
/// assert!(parse_int("notanumber").is_err());
/// ```
///
/// # Errors
///
/// Returns [`Error::InvalidLiteral`] when the probe fails, when the
/// dispatched base finds no digit at the start of the remainder, or when
/// the digits exceed 64 bits of significance.
pub fn parse_int(input: &str) -> Result<i64> {
    if !decimal_probe(input) {
        return Err(Error::invalid_literal(
            input,
            "not a numeral under the decimal probe",
        ));
    }

    match Radix::classify(input) {
        Radix::Binary => {
            let digits = input.strip_prefix("0b").unwrap_or(input);
            parse_pattern(input, digits, 2).map(|pattern| pattern as i64)
        }
        Radix::Hex => {
            let digits = input.strip_prefix("0x").unwrap_or(input);
            parse_pattern(input, digits, 16).map(|pattern| pattern as i64)
        }
        Radix::Decimal => parse_decimal(input),
    }
}

/// Renders a value as a binary literal: `0b` followed by the full 64-bit
/// two's-complement bit pattern, most significant bit first.
///
/// The output is always 66 characters long; binary rendering trades
/// minimality for an unambiguous fixed width.
///
/// # Examples
///
/// ```rust
/// use xini::render_binary;
///
/// let literal = render_binary(5);
/// assert_eq!(literal.len(), 66);
/// assert!(literal.starts_with("0b"));
/// assert!(literal.ends_with("101"));
///
/// assert_eq!(render_binary(-1), format!("0b{}", "1".repeat(64)));
/// ```
#[must_use]
pub fn render_binary(value: i64) -> String {
    format!("0b{:064b}", value as u64)
}

/// Renders a value as a hex literal: `0x` followed by uppercase hex
/// digits, no padding. Negative values show the hex digits of their
/// 64-bit two's-complement pattern, never a `-0x…` form.
///
/// # Examples
///
/// ```rust
/// use xini::render_hex;
///
/// assert_eq!(render_hex(26), "0x1A");
/// assert_eq!(render_hex(0), "0x0");
/// assert_eq!(render_hex(-26), "0xFFFFFFFFFFFFFFE6");
/// ```
#[must_use]
pub fn render_hex(value: i64) -> String {
    format!("0x{:X}", value as u64)
}
