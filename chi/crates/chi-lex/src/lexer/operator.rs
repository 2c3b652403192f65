//! Operator and punctuation lexing.
//!
//! Every function here is entered with the cursor on the first character of
//! the operator and consumes the longest spelling that matches.

use chi_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes assignment, equality, or identity.
    ///
    /// Handles: `=`, `==`, `===`
    pub(crate) fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            if self.cursor.match_char('=') {
                TokenKind::Identical
            } else {
                TokenKind::Eq
            }
        } else {
            TokenKind::Assign
        };
        self.token_from_start(kind)
    }

    /// Lexes negation, inequality, or non-identity.
    ///
    /// Handles: `!`, `!=`, `!==`
    pub(crate) fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            if self.cursor.match_char('=') {
                TokenKind::NotIdentical
            } else {
                TokenKind::NotEq
            }
        } else {
            TokenKind::Bang
        };
        self.token_from_start(kind)
    }

    /// Lexes less-than, less-or-equal, or a heredoc opener.
    ///
    /// Handles: `<`, `<=`, `<<<`. A lone `<<` is two `<` tokens.
    pub(crate) fn lex_less(&mut self) -> Token {
        if self.cursor.peek() == Some('<') && self.cursor.peek_at(1) == Some('<') {
            return self.lex_heredoc();
        }

        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::Lte
        } else {
            TokenKind::Lt
        };
        self.token_from_start(kind)
    }

    /// Lexes greater-than or greater-or-equal.
    ///
    /// Handles: `>`, `>=`
    pub(crate) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('=') {
            TokenKind::Gte
        } else {
            TokenKind::Gt
        };
        self.token_from_start(kind)
    }

    /// Lexes logical and. A single `&` is illegal.
    pub(crate) fn lex_ampersand(&mut self) -> Token {
        self.lex_doubled('&', TokenKind::LogicalAnd)
    }

    /// Lexes logical or. A single `|` is illegal.
    pub(crate) fn lex_pipe(&mut self) -> Token {
        self.lex_doubled('|', TokenKind::LogicalOr)
    }

    fn lex_doubled(&mut self, c: char, kind: TokenKind) -> Token {
        self.cursor.advance();
        if self.cursor.match_char(c) {
            return self.token_from_start(kind);
        }
        self.report_error(
            DiagnosticCode::E_LEXER_INCOMPLETE_OPERATOR,
            format!("expected `{c}{c}`, found `{c}`"),
        );
        self.token_from_start(TokenKind::Illegal)
    }

    /// Lexes question mark or null coalescing.
    ///
    /// Handles: `?`, `??`
    pub(crate) fn lex_question(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('?') {
            TokenKind::Coalesce
        } else {
            TokenKind::Question
        };
        self.token_from_start(kind)
    }

    /// Lexes colon or scope resolution.
    ///
    /// Handles: `:`, `::`
    pub(crate) fn lex_colon(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char(':') {
            TokenKind::DoubleColon
        } else {
            TokenKind::Colon
        };
        self.token_from_start(kind)
    }

    /// Lexes minus or arrow.
    ///
    /// Handles: `-`, `->`
    pub(crate) fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.match_char('>') {
            TokenKind::Arrow
        } else {
            TokenKind::Minus
        };
        self.token_from_start(kind)
    }

    /// Lexes slash or a comment.
    ///
    /// Handles: `/`, `//`, `/* */`
    pub(crate) fn lex_slash(&mut self) -> Token {
        match self.cursor.peek() {
            Some('/') => self.lex_line_comment(),
            Some('*') => self.lex_block_comment(),
            _ => self.single(TokenKind::Slash),
        }
    }
}
