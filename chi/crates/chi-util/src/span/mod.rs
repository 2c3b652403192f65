//! Span module - Source location tracking.
//!
//! A [`Position`] is a human-readable `(line, column)` pair. A [`Span`] adds
//! the byte range it covers in the source buffer.
//!
//! # Examples
//!
//! ```
//! use chi_util::span::{Position, Span};
//!
//! let span = Span::new(10, 13, 2, 5);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.position(), Position::new(2, 5));
//! ```

use std::fmt;

/// A 1-based `(line, column)` location.
///
/// Positions order lexicographically: first by line, then by column.
///
/// ```
/// use chi_util::span::Position;
///
/// assert!(Position::new(1, 9) < Position::new(2, 1));
/// assert!(Position::new(3, 2) < Position::new(3, 4));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in code points)
    pub column: u32,
}

impl Position {
    /// Create a new position
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }

    /// The first position of any buffer
    pub const START: Position = Position { line: 1, column: 1 };
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source location span
///
/// `start` and `end` are byte offsets (end exclusive); `line` and `column`
/// locate the first code point of the range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// ```
    /// use chi_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert!(Span::DUMMY.is_empty());
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset (exclusive)
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a single byte offset.
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span covers no bytes.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// The `(line, column)` of the first code point.
    #[inline]
    pub const fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }

    /// Extract the covered text from `source`.
    ///
    /// Returns `None` if the range is out of bounds or not on char
    /// boundaries.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} ({}..{})", self.line, self.column, self.start, self.end)
    }
}
