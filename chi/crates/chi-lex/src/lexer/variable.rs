//! Variable lexing.

use chi_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::unicode::{is_ident_continue, is_ident_start};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `$name`. The literal keeps the `$`.
    ///
    /// A `$` that is not followed by an identifier start is illegal on its
    /// own; whatever follows is scanned as the next token.
    pub(crate) fn lex_dollar(&mut self) -> Token {
        self.cursor.advance();

        if !self.cursor.current().is_some_and(is_ident_start) {
            self.report_error(
                DiagnosticCode::E_LEXER_INVALID_VARIABLE,
                "expected variable name after `$`".to_string(),
            );
            return self.token_from_start(TokenKind::Illegal);
        }

        self.cursor.eat_while(is_ident_continue);
        self.token_from_start(TokenKind::Variable)
    }
}
