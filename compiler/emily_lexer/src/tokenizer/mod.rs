//! Token-pull interface over a source buffer.
//!
//! [`Tokenizer::next_token`] consumes one code point, peeks one more, and
//! dispatches on the pair:
//!
//! | leading code point                 | routine              |
//! |------------------------------------|----------------------|
//! | punctuation in [`symbols`]         | single-symbol token  |
//! | `_` or a letter                    | identifier           |
//! | whitespace                         | blank run            |
//! | `0` followed by `o`, `x` or `b`    | radix-prefixed integer |
//! | `+`, `-`, `.` or a decimal digit   | decimal / float      |
//! | anything else                      | `Error`              |
//!
//! No mode survives between calls; the window's two offsets are the only
//! state. Every path consumes at least one code point before it can fail, so
//! an unrecognized code point becomes exactly one `Error` token and the next
//! call resumes right after it.
//!
//! [`symbols`]: crate::symbols

use std::iter::FusedIterator;

use tracing::{debug, trace};
use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

use crate::error::{LexError, Radix};
use crate::numeric;
use crate::symbols;
use crate::token::{Token, TokenKind, Value};
use crate::window::Window;

/// Pull-based tokenizer over a borrowed source string.
///
/// Once the input is exhausted every call returns a `Nil` token at the end
/// of the buffer.
#[derive(Clone, Debug)]
pub struct Tokenizer<'a> {
    window: Window<'a>,
}

impl<'a> Tokenizer<'a> {
    /// Create a tokenizer positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Tokenizer {
            window: Window::new(source),
        }
    }

    /// Produce the next token.
    pub fn next_token(&mut self) -> Token {
        let Some(first) = self.window.next_char() else {
            return self.emit(TokenKind::Nil, Value::None);
        };
        let lookahead = self.window.peek();

        if let Some(kind) = symbols::lookup(first) {
            return self.emit(kind, Value::None);
        }

        match first {
            c if is_ident_start(c) => self.identifier(),
            c if c.is_whitespace() => self.blank(),
            '0' => match lookahead.and_then(Radix::from_marker) {
                Some(radix) => self.prefixed_integer(radix),
                None => self.decimal(first),
            },
            '+' | '-' | '.' => self.decimal(first),
            c if c.is_ascii_digit() => self.decimal(first),
            c => {
                let pos = self.window.start();
                self.emit_error(LexError::Unexpected { ch: c, pos })
            }
        }
    }

    // ─── Scan routines ──────────────────────────────────────────────

    fn blank(&mut self) -> Token {
        self.window.take_while(char::is_whitespace);
        self.emit(TokenKind::Blank, Value::None)
    }

    fn identifier(&mut self) -> Token {
        self.window.take_while(is_ident_continue);
        let name = self.window.text_in_window().to_owned();
        self.emit(TokenKind::Ident, Value::Ident(name))
    }

    /// Leading `0` is consumed; the marker is next.
    fn prefixed_integer(&mut self, radix: Radix) -> Token {
        self.window.take(1);
        self.window.take_while(|c| c == '_' || radix.is_digit(c));
        let result = numeric::parse_prefixed(self.window.text_in_window(), radix, self.window.start());
        self.emit_integer(result)
    }

    /// `first` is already consumed and is a sign, a dot, or a digit.
    fn decimal(&mut self, first: char) -> Token {
        let mut seen_dot = first == '.';
        if !seen_dot {
            self.window.take_while(is_decimal_digit);
            seen_dot = self.window.take_if(&['.']);
        }
        if seen_dot {
            self.window.take_while(is_decimal_digit);
        }

        let seen_exponent = self.window.take_if(&['e', 'E']);
        if seen_exponent {
            self.exponent_sign();
            self.window.take_while(is_decimal_digit);
        }

        let text = self.window.text_in_window();
        let start = self.window.start();
        if seen_dot || seen_exponent {
            match numeric::parse_float(text, start) {
                Ok(value) => self.emit(TokenKind::Float, Value::Float(value)),
                Err(err) => self.emit_error(err),
            }
        } else {
            self.emit_integer(numeric::parse_decimal(text, start))
        }
    }

    /// Consume an exponent sign only when a digit follows it.
    fn exponent_sign(&mut self) {
        if self.window.take_if(&['+', '-'])
            && !self.window.peek().is_some_and(|c| c.is_ascii_digit())
        {
            self.window.rewind(1);
        }
    }

    // ─── Emission ───────────────────────────────────────────────────

    fn emit_integer(&mut self, result: Result<i64, LexError>) -> Token {
        match result {
            Ok(value) => self.emit(TokenKind::Integer, Value::Integer(value)),
            Err(err) => self.emit_error(err),
        }
    }

    fn emit_error(&mut self, err: LexError) -> Token {
        debug!(
            start = self.window.start(),
            end = self.window.end(),
            error = %err,
            "lex error"
        );
        self.emit(TokenKind::Error, Value::Error(err))
    }

    /// Commit the window and package it as a token.
    fn emit(&mut self, kind: TokenKind, value: Value) -> Token {
        let (start, end) = self.window.advance();
        trace!(%kind, start, end, "token");
        Token::new(kind, start, end, value)
    }
}

impl<'a> IntoIterator for Tokenizer<'a> {
    type Item = Token;
    type IntoIter = Tokens<'a>;

    fn into_iter(self) -> Tokens<'a> {
        Tokens {
            tokenizer: self,
            done: false,
        }
    }
}

/// Iterator over every token of a source, ending with the single `Nil`.
///
/// Created by [`Tokenizer::into_iter`] or [`tokenize_iter`](crate::tokenize_iter).
#[derive(Clone, Debug)]
pub struct Tokens<'a> {
    tokenizer: Tokenizer<'a>,
    done: bool,
}

impl Iterator for Tokens<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }
        let token = self.tokenizer.next_token();
        self.done = token.is_nil();
        Some(token)
    }
}

impl FusedIterator for Tokens<'_> {}

// ─── Character classes ──────────────────────────────────────────────

/// `_` or any Unicode letter (general category `L`).
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.general_category_group() == GeneralCategoryGroup::Letter
}

/// Identifier start, or any Unicode decimal digit (general category `Nd`).
///
/// Other numerals such as `²`, `½` or `Ⅻ` end an identifier.
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.general_category() == GeneralCategory::DecimalNumber
}

/// ASCII decimal digit or `_` separator.
#[inline]
fn is_decimal_digit(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}
