//! Structured lexer error.
//!
//! [`LexerError`] is what a strict scan returns instead of a passthrough
//! illegal token.

use thiserror::Error;

use crate::diagnostic::Diagnostic;
use crate::span::Position;

/// A lexical error at a source position.
///
/// ```
/// use chi_util::LexerError;
///
/// let err = LexerError::new("unexpected character '#'", 3, 7);
/// assert_eq!(
///     err.to_string(),
///     "lexer error at line 3, column 7: unexpected character '#'"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("lexer error at line {line}, column {column}: {message}")]
pub struct LexerError {
    /// Human-readable description
    pub message: String,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based)
    pub column: u32,
}

impl LexerError {
    /// Create a new lexer error
    pub fn new(message: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            message: message.into(),
            line,
            column,
        }
    }

    /// The `(line, column)` the error refers to.
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl From<&Diagnostic> for LexerError {
    fn from(diagnostic: &Diagnostic) -> Self {
        Self::new(
            diagnostic.message.clone(),
            diagnostic.span.line,
            diagnostic.span.column,
        )
    }
}

impl From<Diagnostic> for LexerError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self::new(diagnostic.message, diagnostic.span.line, diagnostic.span.column)
    }
}

/// Result type alias for strict lexing
pub type LexResult<T> = std::result::Result<T, LexerError>;
