//! Error types for INI parsing and literal decoding.
//!
//! Most of the crate is deliberately lenient: the line scanner and the
//! lenient literal parsers never fail, matching classic INI tooling where a
//! malformed value degrades to a best-effort result instead of aborting a
//! whole configuration load. Errors are reserved for the places where a
//! wrong answer cannot be represented as a degraded result:
//!
//! - **Integer literals**: a non-numeric value has no best-effort reading,
//!   so [`parse_int`](crate::parse_int) reports [`Error::InvalidLiteral`].
//! - **Strict literal parsing**: the `*_strict` variants report
//!   [`Error::MalformedLiteral`] when the `[`…`]` / `{`…`}` frame is
//!   missing.
//! - **File I/O**: reading or writing a store surfaces [`Error::Io`].
//!
//! ## Examples
//!
//! ```rust
//! use xini::{parse_int, Error};
//!
//! let result = parse_int("notanumber");
//! assert!(matches!(result, Err(Error::InvalidLiteral { .. })));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// An integer literal that is not a numeral under the applicable base.
    #[error("invalid integer literal `{literal}`: {msg}")]
    InvalidLiteral { literal: String, msg: String },

    /// A strict-mode array/dictionary literal missing its delimiter frame.
    #[error("malformed {kind} literal `{literal}`: {msg}")]
    MalformedLiteral {
        kind: &'static str,
        literal: String,
        msg: String,
    },

    /// IO error while reading or writing a store.
    #[error("IO error: {0}")]
    Io(String),

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Creates an invalid-integer-literal error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xini::Error;
    ///
    /// let err = Error::invalid_literal("abc", "no digits to parse");
    /// assert!(err.to_string().contains("abc"));
    /// ```
    pub fn invalid_literal(literal: &str, msg: &str) -> Self {
        Error::InvalidLiteral {
            literal: literal.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates a malformed-literal error for strict-mode array/dictionary
    /// parsing. `kind` names the literal family (`"array"` or
    /// `"dictionary"`).
    pub fn malformed_literal(kind: &'static str, literal: &str, msg: &str) -> Self {
        Error::MalformedLiteral {
            kind,
            literal: literal.to_string(),
            msg: msg.to_string(),
        }
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a generic error with a display message.
    pub fn message<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
