//! Payload carried by `Error` tokens.
//!
//! The tokenizer never returns `Result::Err`; failures become
//! [`TokenKind::Error`](crate::TokenKind::Error) tokens holding a
//! [`LexError`], and the caller decides whether they are fatal.

use std::fmt;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

use crate::token::Position;

/// Numeral system of an integer literal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Radix {
    Binary,
    Octal,
    Decimal,
    Hex,
}

impl Radix {
    /// The base as a number, for `from_str_radix`.
    pub const fn base(self) -> u32 {
        match self {
            Radix::Binary => 2,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hex => 16,
        }
    }

    /// Radix selected by the marker following a leading `0`.
    pub const fn from_marker(marker: char) -> Option<Radix> {
        match marker {
            'b' => Some(Radix::Binary),
            'o' => Some(Radix::Octal),
            'x' => Some(Radix::Hex),
            _ => None,
        }
    }

    /// Returns `true` if `ch` is a digit of this radix (separators excluded).
    pub fn is_digit(self, ch: char) -> bool {
        ch.is_digit(self.base())
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Radix::Binary => "binary",
            Radix::Octal => "octal",
            Radix::Decimal => "decimal",
            Radix::Hex => "hexadecimal",
        })
    }
}

/// Why a token could not be produced.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A code point that starts no token. The token spans just this code point.
    #[error("unexpected {ch:?} at byte {pos}")]
    Unexpected { ch: char, pos: Position },

    /// A `_` digit separator that is not between two digits.
    #[error("misplaced digit separator at byte {pos}")]
    MisplacedSeparator { pos: Position },

    /// Integer text matched the grammar but did not convert (overflow,
    /// empty digit run, lone sign).
    #[error("error parsing {radix} integer: {source}")]
    Integer {
        radix: Radix,
        #[source]
        source: ParseIntError,
    },

    /// Float text matched the grammar but did not convert (lone `.`,
    /// empty exponent).
    #[error("error parsing floating-point number: {source}")]
    Float {
        #[source]
        source: ParseFloatError,
    },

    /// Float text converted to an infinite value.
    #[error("floating-point number out of range")]
    FloatOutOfRange,
}

impl LexError {
    /// Returns `true` for failures raised while converting a numeric literal.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, LexError::Unexpected { .. })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "test assertions use unwrap for clarity")]
mod tests {
    use super::*;

    #[test]
    fn radix_bases() {
        assert_eq!(Radix::Binary.base(), 2);
        assert_eq!(Radix::Octal.base(), 8);
        assert_eq!(Radix::Decimal.base(), 10);
        assert_eq!(Radix::Hex.base(), 16);
    }

    #[test]
    fn radix_markers() {
        assert_eq!(Radix::from_marker('b'), Some(Radix::Binary));
        assert_eq!(Radix::from_marker('o'), Some(Radix::Octal));
        assert_eq!(Radix::from_marker('x'), Some(Radix::Hex));
        assert_eq!(Radix::from_marker('X'), None);
        assert_eq!(Radix::from_marker('d'), None);
    }

    #[test]
    fn radix_digits() {
        assert!(Radix::Binary.is_digit('1'));
        assert!(!Radix::Binary.is_digit('2'));
        assert!(Radix::Octal.is_digit('7'));
        assert!(!Radix::Octal.is_digit('8'));
        assert!(Radix::Hex.is_digit('f'));
        assert!(Radix::Hex.is_digit('F'));
        assert!(!Radix::Hex.is_digit('g'));
        assert!(!Radix::Decimal.is_digit('_'));
    }

    #[test]
    fn unexpected_message() {
        let err = LexError::Unexpected { ch: '@', pos: 3 };
        assert_eq!(err.to_string(), "unexpected '@' at byte 3");
        assert!(!err.is_numeric());
    }

    #[test]
    fn integer_error_wraps_source() {
        use std::error::Error as _;

        let source = "99999999999999999999".parse::<i64>().unwrap_err();
        let err = LexError::Integer {
            radix: Radix::Decimal,
            source: source.clone(),
        };
        assert!(err.to_string().starts_with("error parsing decimal integer: "));
        assert_eq!(err.source().map(ToString::to_string), Some(source.to_string()));
        assert!(err.is_numeric());
    }
}
