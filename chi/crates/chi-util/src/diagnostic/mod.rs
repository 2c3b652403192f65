//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! The lexer never aborts on bad input. Instead it records a [`Diagnostic`]
//! in a [`Handler`] and keeps scanning; callers that want a hard failure
//! turn the first error into a [`LexerError`](crate::LexerError).
//!
//! # Examples
//!
//! ```
//! use chi_util::diagnostic::{Diagnostic, Handler, E_LEXER_UNTERMINATED_STRING};
//! use chi_util::Span;
//!
//! let handler = Handler::new();
//! handler.emit(
//!     Diagnostic::error("unterminated string literal", Span::new(0, 6, 1, 1))
//!         .with_code(E_LEXER_UNTERMINATED_STRING)
//!         .with_note("string opened here"),
//! );
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.error_count(), 1);
//! ```

mod codes;
mod level;

pub use codes::DiagnosticCode;
pub use codes::{
    E_LEXER_INCOMPLETE_OPERATOR, E_LEXER_INVALID_VARIABLE, E_LEXER_UNEXPECTED_CHAR,
    E_LEXER_UNTERMINATED_COMMENT, E_LEXER_UNTERMINATED_STRING, W_LEXER_HEREDOC_UNSUPPORTED,
};
pub use level::Level;

use crate::Span;
use std::cell::RefCell;
use std::fmt;

/// A diagnostic message with severity and location
#[derive(Clone, Debug, PartialEq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Additional notes for context
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// Create a new diagnostic
    pub fn new(level: Level, message: impl Into<String>, span: Span) -> Self {
        Self {
            level,
            code: None,
            message: message.into(),
            span,
            notes: Vec::new(),
        }
    }

    /// Create an error diagnostic
    pub fn error(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Error, message, span)
    }

    /// Create a warning diagnostic
    pub fn warning(message: impl Into<String>, span: Span) -> Self {
        Self::new(Level::Warning, message, span)
    }

    /// Set the diagnostic code
    pub fn with_code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a note to the diagnostic
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Returns true if this diagnostic is an error.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.level.is_error()
    }
}

impl fmt::Display for Diagnostic {
    /// Renders as `error[E1001]: message (line L, column C)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(
            f,
            ": {} (line {}, column {})",
            self.message, self.span.line, self.span.column
        )?;
        for note in &self.notes {
            write!(f, "\n  = note: {}", note)?;
        }
        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// Diagnostics are kept in emission order. The handler uses interior
/// mutability so a shared reference is enough to report into it.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new, empty handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn emit(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics.borrow().iter().any(Diagnostic::is_error)
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Total number of recorded diagnostics
    pub fn len(&self) -> usize {
        self.diagnostics.borrow().len()
    }

    /// Returns true if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// The first error recorded, if any
    pub fn first_error(&self) -> Option<Diagnostic> {
        self.diagnostics
            .borrow()
            .iter()
            .find(|d| d.is_error())
            .cloned()
    }

    /// The first error recorded at or after index `mark`.
    ///
    /// Take `mark` from [`len`](Self::len) before an operation to find the
    /// first error that operation produced.
    pub fn first_error_since(&self, mark: usize) -> Option<Diagnostic> {
        self.diagnostics
            .borrow()
            .iter()
            .skip(mark)
            .find(|d| d.is_error())
            .cloned()
    }

    /// Snapshot of all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Clear all diagnostics
    pub fn clear(&self) {
        self.diagnostics.borrow_mut().clear();
    }
}
