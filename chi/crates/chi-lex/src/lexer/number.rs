//! Number literal lexing.
//!
//! Supports decimal integers (`42`) and decimal floats with an optional
//! exponent (`3.14`, `1.5e-3`). There are no radix prefixes or digit
//! separators.

use crate::token::{Token, TokenKind};
use crate::unicode::is_digit;
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes an integer or float literal. The cursor is on a digit.
    pub(crate) fn lex_number(&mut self) -> Token {
        self.cursor.eat_while(is_digit);

        let is_float =
            self.cursor.current() == Some('.') && self.cursor.peek().is_some_and(is_digit);
        if !is_float {
            return self.token_from_start(TokenKind::Int);
        }

        self.cursor.advance();
        self.cursor.eat_while(is_digit);
        self.lex_exponent();
        self.token_from_start(TokenKind::Float)
    }

    /// Consumes `e`/`E`, an optional sign, and digits, but only if at least
    /// one digit follows. Otherwise leaves the cursor untouched.
    fn lex_exponent(&mut self) {
        if !matches!(self.cursor.current(), Some('e' | 'E')) {
            return;
        }

        let digits_follow = match self.cursor.peek() {
            Some('+' | '-') => self.cursor.peek_at(1).is_some_and(is_digit),
            Some(c) => is_digit(c),
            None => false,
        };
        if !digits_follow {
            return;
        }

        self.cursor.advance();
        if matches!(self.cursor.current(), Some('+' | '-')) {
            self.cursor.advance();
        }
        self.cursor.eat_while(is_digit);
    }
}
