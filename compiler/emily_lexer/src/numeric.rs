//! Conversion of committed literal text into numeric values.
//!
//! The scanner accepts `_` anywhere in a digit run; placement is checked
//! here, before conversion. A separator must sit between two digits of the
//! literal's radix, or directly after a radix prefix (`0x_ff`).

use std::borrow::Cow;

use crate::error::{LexError, Radix};
use crate::token::Position;

/// Length of a radix prefix (`0x`, `0o`, `0b`).
const PREFIX_LEN: usize = 2;

/// Convert a radix-prefixed literal such as `0xB33F_cafe`.
///
/// `text` includes the prefix; `start` is its offset in the source.
pub(crate) fn parse_prefixed(text: &str, radix: Radix, start: Position) -> Result<i64, LexError> {
    let digits = text.get(PREFIX_LEN..).unwrap_or_default();
    let digits = strip_separators(digits, radix, start + PREFIX_LEN, true)?;
    i64::from_str_radix(&digits, radix.base()).map_err(|source| LexError::Integer { radix, source })
}

/// Convert a base-10 integer literal with an optional leading sign.
///
/// A leading `0` is still decimal.
pub(crate) fn parse_decimal(text: &str, start: Position) -> Result<i64, LexError> {
    let cleaned = strip_separators(text, Radix::Decimal, start, false)?;
    cleaned.parse::<i64>().map_err(|source| LexError::Integer {
        radix: Radix::Decimal,
        source,
    })
}

/// Convert a floating-point literal. Infinite results are rejected.
pub(crate) fn parse_float(text: &str, start: Position) -> Result<f64, LexError> {
    let cleaned = strip_separators(text, Radix::Decimal, start, false)?;
    let value = cleaned
        .parse::<f64>()
        .map_err(|source| LexError::Float { source })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LexError::FloatOutOfRange)
    }
}

/// Validate separator placement and remove the separators.
///
/// `offset` is the source position of `text[0]`, used for error positions.
/// `after_prefix` allows a separator as the very first character.
fn strip_separators(
    text: &str,
    radix: Radix,
    offset: Position,
    after_prefix: bool,
) -> Result<Cow<'_, str>, LexError> {
    if !text.contains('_') {
        return Ok(Cow::Borrowed(text));
    }

    let mut out = String::with_capacity(text.len());
    let mut prev: Option<char> = None;
    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if ch == '_' {
            let follows_digit = prev.map_or(after_prefix, |p| radix.is_digit(p));
            let precedes_digit = chars.peek().is_some_and(|&(_, next)| radix.is_digit(next));
            if !(follows_digit && precedes_digit) {
                return Err(LexError::MisplacedSeparator { pos: offset + i });
            }
        } else {
            out.push(ch);
        }
        prev = Some(ch);
    }
    Ok(Cow::Owned(out))
}
