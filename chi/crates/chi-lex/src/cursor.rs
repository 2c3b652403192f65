//! Character cursor for traversing source code.
//!
//! The [`Cursor`] owns the scan position: the current code point, its byte
//! offset, the offset of the next read, and the 1-based line/column of the
//! current code point. It only ever moves forward.

use crate::unicode::decode_at;

/// A forward-only cursor over UTF-8 source text.
///
/// End of input is reported as `None`, which no code point (not even
/// U+0000) can be confused with.
///
/// # Example
///
/// ```
/// use chi_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("$a = 1;");
/// assert_eq!(cursor.current(), Some('$'));
/// assert_eq!(cursor.peek(), Some('a'));
/// assert_eq!(cursor.peek_at(1), Some(' '));
///
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('a'));
/// assert_eq!(cursor.column(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current code point, `None` at end of input.
    ch: Option<char>,

    /// Byte offset of the current code point.
    position: usize,

    /// Byte offset just past the current code point.
    read_position: usize,

    /// Line of the current code point (1-based).
    line: u32,

    /// Column of the current code point (1-based, in code points).
    column: u32,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned on the first code point of `source`.
    pub fn new(source: &'a str) -> Self {
        let (ch, width) = match decode_at(source, 0) {
            Some((c, w)) => (Some(c), w),
            None => (None, 0),
        };
        Self {
            source,
            ch,
            position: 0,
            read_position: width,
            line: 1,
            column: 1,
        }
    }

    /// Returns the current code point, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.ch
    }

    /// Returns the code point after the current one without advancing.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        decode_at(self.source, self.read_position).map(|(c, _)| c)
    }

    /// Returns the code point `n` positions beyond [`peek`](Self::peek).
    ///
    /// `peek_at(0)` is the same as `peek()`.
    ///
    /// ```
    /// use chi_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new("===");
    /// assert_eq!(cursor.peek_at(0), Some('='));
    /// assert_eq!(cursor.peek_at(1), Some('='));
    /// assert_eq!(cursor.peek_at(2), None);
    /// ```
    pub fn peek_at(&self, n: usize) -> Option<char> {
        let mut offset = self.read_position;
        for _ in 0..n {
            let (_, width) = decode_at(self.source, offset)?;
            offset += width;
        }
        decode_at(self.source, offset).map(|(c, _)| c)
    }

    /// Consumes the current code point and decodes the next one.
    ///
    /// A newline moves to column 1 of the next line; anything else moves one
    /// column right. Does nothing at end of input.
    #[inline]
    pub fn advance(&mut self) {
        let Some(c) = self.ch else {
            return;
        };

        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        self.position = self.read_position;
        match decode_at(self.source, self.position) {
            Some((next, width)) => {
                self.ch = Some(next);
                self.read_position = self.position + width;
            },
            None => {
                self.ch = None;
                self.read_position = self.position;
            },
        }
    }

    /// Consumes the current code point if it is `expected`.
    ///
    /// ```
    /// use chi_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("->");
    /// assert!(!cursor.match_char('>'));
    /// assert!(cursor.match_char('-'));
    /// assert!(cursor.match_char('>'));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn match_char(&mut self, expected: char) -> bool {
        if self.ch == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a maximal run of code points satisfying `pred`.
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        while let Some(c) = self.ch {
            if !pred(c) {
                break;
            }
            self.advance();
        }
    }

    /// Returns true once every code point has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.ch.is_none()
    }

    /// Byte offset of the current code point.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Line of the current code point (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the current code point (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Source text from byte `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.source
    }
}
