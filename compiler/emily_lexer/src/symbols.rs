//! Single-code-point punctuation table.
//!
//! Consulted before every other classification rule, so punctuation always
//! wins over any rule that could match the same code point.

use crate::token::TokenKind;

/// Immutable punctuation mapping.
pub static SYMBOLS: &[(char, TokenKind)] = &[('(', TokenKind::LParen), (')', TokenKind::RParen)];

/// Look up the kind of a punctuation code point.
///
/// The table is a handful of entries, so a linear probe is constant time.
#[inline]
pub fn lookup(ch: char) -> Option<TokenKind> {
    SYMBOLS
        .iter()
        .find(|&&(sym, _)| sym == ch)
        .map(|&(_, kind)| kind)
}
