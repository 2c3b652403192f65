//! Diagnostic codes for categorizing lexer errors and warnings.
//!
//! ```
//! use chi_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 1002);
//! assert_eq!(code.as_str(), "E1002");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes render as `{prefix}{number:04}`: `E` for errors, `W` for warnings.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Lexer - Unexpected character
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Lexer - Unterminated string literal
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);
    /// E1003: Lexer - Unterminated block comment
    pub const E_LEXER_UNTERMINATED_COMMENT: Self = Self::new("E", 1003);
    /// E1004: Lexer - `$` not followed by a variable name
    pub const E_LEXER_INVALID_VARIABLE: Self = Self::new("E", 1004);
    /// E1005: Lexer - Operator prefix without its continuation (`&`, `|`)
    pub const E_LEXER_INCOMPLETE_OPERATOR: Self = Self::new("E", 1005);

    /// W1001: Lexer - Heredoc body is not scanned
    pub const W_LEXER_HEREDOC_UNSUPPORTED: Self = Self::new("W", 1001);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Standalone constant exports for convenience
pub const E_LEXER_UNEXPECTED_CHAR: DiagnosticCode = DiagnosticCode::E_LEXER_UNEXPECTED_CHAR;
pub const E_LEXER_UNTERMINATED_STRING: DiagnosticCode =
    DiagnosticCode::E_LEXER_UNTERMINATED_STRING;
pub const E_LEXER_UNTERMINATED_COMMENT: DiagnosticCode =
    DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT;
pub const E_LEXER_INVALID_VARIABLE: DiagnosticCode = DiagnosticCode::E_LEXER_INVALID_VARIABLE;
pub const E_LEXER_INCOMPLETE_OPERATOR: DiagnosticCode =
    DiagnosticCode::E_LEXER_INCOMPLETE_OPERATOR;
pub const W_LEXER_HEREDOC_UNSUPPORTED: DiagnosticCode =
    DiagnosticCode::W_LEXER_HEREDOC_UNSUPPORTED;
