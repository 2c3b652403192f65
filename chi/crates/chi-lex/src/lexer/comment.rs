//! Comment lexing.
//!
//! Comments are returned as [`TokenKind::Comment`] tokens rather than
//! skipped. The literal is the comment body without its delimiters.

use chi_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes a `//` comment up to, but not including, the next `\n`.
    pub(crate) fn lex_line_comment(&mut self) -> Token {
        self.cursor.advance();
        self.cursor.advance();

        let content_start = self.cursor.position();
        self.cursor.eat_while(|c| c != '\n');
        let content = self.cursor.slice_from(content_start);
        self.token(TokenKind::Comment, content)
    }

    /// Lexes a `/* ... */` comment. Block comments do not nest.
    pub(crate) fn lex_block_comment(&mut self) -> Token {
        self.cursor.advance();
        self.cursor.advance();

        let content_start = self.cursor.position();
        loop {
            match self.cursor.current() {
                Some('*') if self.cursor.peek() == Some('/') => {
                    let content_end = self.cursor.position();
                    self.cursor.advance();
                    self.cursor.advance();
                    let content = &self.cursor.source()[content_start..content_end];
                    return self.token(TokenKind::Comment, content);
                },
                Some(_) => self.cursor.advance(),
                None => break,
            }
        }

        self.report_error(
            DiagnosticCode::E_LEXER_UNTERMINATED_COMMENT,
            "unterminated block comment".to_string(),
        );
        let content = self.cursor.slice_from(content_start);
        self.token(TokenKind::Comment, content)
    }
}
