//! Two-offset cursor over a borrowed source string.
//!
//! The window tracks a `start..end` byte range. `start` marks the beginning
//! of the span that has not been committed yet; `end` is the scan cursor.
//! Scan routines grow the span with [`peek`](Window::peek) and the `take_*`
//! family, back out of a tentative read with [`rewind`](Window::rewind), and
//! commit the span with [`advance`](Window::advance).
//!
//! Offsets are bytes, but every movement decodes whole code points, so both
//! offsets always sit on UTF-8 character boundaries.

use crate::token::Position;

/// Cursor over a borrowed UTF-8 buffer.
///
/// # Invariant
///
/// `start <= end <= buf.len()`, and both offsets are character boundaries.
#[derive(Clone, Copy, Debug)]
pub struct Window<'a> {
    buf: &'a str,
    start: Position,
    end: Position,
}

impl<'a> Window<'a> {
    /// Create an empty window at the beginning of `buf`.
    pub fn new(buf: &'a str) -> Self {
        Window {
            buf,
            start: 0,
            end: 0,
        }
    }

    /// The code point the next call to [`next_char`](Self::next_char) would
    /// consume, or `None` at end of buffer.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.remaining_text().chars().next()
    }

    /// Consume one code point, advancing `end` by its encoded width.
    ///
    /// Returns `None` and leaves the cursor in place at end of buffer.
    #[inline]
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.end += ch.len_utf8();
        Some(ch)
    }

    /// Consume up to `n` code points. Stops early at end of buffer.
    pub fn take(&mut self, n: usize) {
        for _ in 0..n {
            if self.next_char().is_none() {
                break;
            }
        }
    }

    /// Consume code points while `pred` holds for the next one.
    ///
    /// The first code point that fails `pred` is left unconsumed.
    #[inline]
    pub fn take_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(ch) = self.peek() {
            if !pred(ch) {
                break;
            }
            self.end += ch.len_utf8();
        }
    }

    /// Consume the next code point only if it is one of `candidates`.
    ///
    /// Returns whether a code point was consumed.
    pub fn take_if(&mut self, candidates: &[char]) -> bool {
        match self.peek() {
            Some(ch) if candidates.contains(&ch) => {
                self.end += ch.len_utf8();
                true
            }
            _ => false,
        }
    }

    /// Move `end` back by `n` code points.
    ///
    /// # Contract
    ///
    /// The window must hold at least `n` code points; rewinding past `start`
    /// is a caller bug. Release builds clamp at `start`.
    pub fn rewind(&mut self, n: usize) {
        for _ in 0..n {
            debug_assert!(!self.is_empty(), "rewind past window start {}", self.start);
            let Some(ch) = self.text_in_window().chars().next_back() else {
                return;
            };
            self.end -= ch.len_utf8();
        }
    }

    /// Commit the current span and start a new, empty one at `end`.
    ///
    /// Returns the committed `(start, end)` pair.
    pub fn advance(&mut self) -> (Position, Position) {
        let span = (self.start, self.end);
        self.start = self.end;
        span
    }

    /// The uncommitted text, `start..end`.
    #[inline]
    pub fn text_in_window(&self) -> &'a str {
        &self.buf[self.start..self.end]
    }

    /// Everything after the cursor, `end..`.
    #[inline]
    pub fn remaining_text(&self) -> &'a str {
        &self.buf[self.end..]
    }

    /// Length of the uncommitted span in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if nothing has been consumed since the last commit.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Bytes left after the cursor.
    #[inline]
    pub fn remaining_len(&self) -> usize {
        self.buf.len() - self.end
    }

    /// Offset where the uncommitted span begins.
    #[inline]
    pub fn start(&self) -> Position {
        self.start
    }

    /// Offset of the scan cursor.
    #[inline]
    pub fn end(&self) -> Position {
        self.end
    }
}
