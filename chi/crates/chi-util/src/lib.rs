//! chi-util - Foundation types shared by the chi crates
//!
//! This crate holds the pieces that are not specific to any one phase:
//!
//! - [`span`] - source positions and byte ranges
//! - [`diagnostic`] - severity levels, diagnostic codes, diagnostics and the
//!   [`Handler`] that collects them
//! - [`error`] - the structured [`LexerError`] raised by strict scans
//!
//! # Example
//!
//! ```
//! use chi_util::{Diagnostic, Handler, LexerError, Span};
//! use chi_util::diagnostic::E_LEXER_UNEXPECTED_CHAR;
//!
//! let handler = Handler::new();
//! handler.emit(
//!     Diagnostic::error("unexpected character '#'", Span::new(4, 5, 1, 5))
//!         .with_code(E_LEXER_UNEXPECTED_CHAR),
//! );
//!
//! let err = LexerError::from(handler.first_error().unwrap());
//! assert_eq!(
//!     err.to_string(),
//!     "lexer error at line 1, column 5: unexpected character '#'"
//! );
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticCode, Handler, Level};
pub use error::{LexResult, LexerError};
pub use span::{Position, Span};
