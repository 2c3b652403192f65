//! Quoted string lexing.
//!
//! Double quotes, single quotes and backticks share one scanner. Escape
//! sequences are not interpreted: the literal is the raw text between the
//! quotes, backslashes included.

use chi_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a string opened by `quote`.
    ///
    /// A backslash protects the code point after it, so `\"` does not close
    /// a double-quoted string.
    pub(crate) fn lex_string(&mut self, quote: char) -> Token {
        self.cursor.advance();
        let content_start = self.cursor.position();

        loop {
            match self.cursor.current() {
                Some(c) if c == quote => {
                    let content = self.cursor.slice_from(content_start);
                    self.cursor.advance();
                    return self.token(TokenKind::String, content);
                },
                Some('\\') => {
                    self.cursor.advance();
                    self.cursor.advance();
                },
                Some(_) => self.cursor.advance(),
                None => break,
            }
        }

        self.report_error(
            DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            "unterminated string literal".to_string(),
        );
        let content = self.cursor.slice_from(content_start);
        self.token(TokenKind::String, content)
    }
}
