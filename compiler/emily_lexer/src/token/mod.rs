//! Token model: the closed vocabulary of token kinds and the token record.
//!
//! Discriminants are grouped so they stay stable as the language grows:
//!
//! - `0`: end of input
//! - `1`: trivia
//! - `2..=4`: literals and identifiers
//! - `5..=6`: punctuation
//! - `255`: error sentinel (pinned at `u8::MAX`)

use std::fmt;
use std::ops::Range;

use crate::error::LexError;

/// Unsigned byte offset into the source buffer.
///
/// Multi-byte code points occupy more than one `Position` unit.
pub type Position = usize;

/// Classification of a token.
///
/// `#[repr(u8)]` with explicit discriminants. New kinds take the next free
/// value below [`TokenKind::Error`], which stays at `u8::MAX`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    /// End of input. Always has an empty span at the buffer length.
    Nil = 0,
    /// A run of whitespace.
    Blank = 1,
    /// Integer literal: `42`, `-7`, `0xFF`, `0o17`, `0b1010`, `1_000`.
    Integer = 2,
    /// Floating-point literal: `3.14`, `.5`, `1e10`, `-3.14E10`.
    Float = 3,
    /// Identifier: `println`, `_tmp`, `naïve`.
    Ident = 4,
    /// `(`
    LParen = 5,
    /// `)`
    RParen = 6,
    /// Unrecognized input or a literal that failed to convert.
    Error = 255,
}

impl TokenKind {
    /// Debug name of the kind.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Nil => "Nil",
            TokenKind::Blank => "Blank",
            TokenKind::Integer => "Integer",
            TokenKind::Float => "Float",
            TokenKind::Ident => "Ident",
            TokenKind::LParen => "LParen",
            TokenKind::RParen => "RParen",
            TokenKind::Error => "Error",
        }
    }

    /// Stable numeric value of the kind.
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` for kinds whose tokens carry a [`Value`] payload.
    pub const fn has_payload(self) -> bool {
        matches!(
            self,
            TokenKind::Integer | TokenKind::Float | TokenKind::Ident | TokenKind::Error
        )
    }

    /// Returns `true` for kinds a parser usually skips.
    pub const fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Blank)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Literal payload of a token.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// No payload (`Nil`, `Blank`, punctuation).
    None,
    Integer(i64),
    Float(f64),
    /// Identifier text, copied out of the source buffer.
    Ident(String),
    /// Why the token could not be classified or converted.
    Error(LexError),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => Ok(()),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) => write!(f, "{x:?}"),
            Value::Ident(name) => f.write_str(name),
            Value::Error(err) => write!(f, "{err}"),
        }
    }
}

/// A classified token with its byte span in the source.
///
/// # Invariant
///
/// `start <= end`. For [`TokenKind::Nil`], `start == end == source.len()`.
/// `value` is [`Value::None`] unless `kind.has_payload()`.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: Position,
    pub end: Position,
    pub value: Value,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, start: Position, end: Position, value: Value) -> Self {
        debug_assert!(start <= end, "token start {start} exceeds end {end}");
        debug_assert!(
            kind.has_payload() || value == Value::None,
            "{kind} token must not carry a payload"
        );
        Token {
            kind,
            start,
            end,
            value,
        }
    }

    /// Byte range of the token in the source.
    #[inline]
    pub fn span(&self) -> Range<Position> {
        self.start..self.end
    }

    /// Length of the token in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for zero-length tokens (only `Nil`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns `true` if this is the terminal `Nil` token.
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.kind == TokenKind::Nil
    }

    /// The source text covered by this token.
    ///
    /// `source` must be the buffer the token was produced from.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span()]
    }

    /// The error payload, if this is an `Error` token.
    pub fn error(&self) -> Option<&LexError> {
        match &self.value {
            Value::Error(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}..{}", self.kind, self.start, self.end)?;
        if self.value != Value::None {
            write!(f, " {}", self.value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests;
