//! Core lexer implementation.
//!
//! This module contains the Lexer struct, the dispatcher, and error
//! reporting shared by the literal scanners.

use std::iter::FusedIterator;

use chi_util::{Diagnostic, DiagnosticCode, Handler, LexResult, LexerError, Span};

use crate::config::LexerConfig;
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};
use crate::unicode::{is_digit, is_ident_start, is_whitespace};

/// Lexer for PHP-like source code.
///
/// Each call to [`next_token`](Self::next_token) skips whitespace, scans one
/// token and returns it. Once the input is exhausted every further call
/// returns the same EOF token.
///
/// # Example
///
/// ```
/// use chi_lex::{Lexer, TokenKind};
///
/// let mut lexer = Lexer::new("$a = 1;");
/// let token = lexer.next_token();
/// assert_eq!(token.kind, TokenKind::Variable);
/// assert_eq!(token.literal, "$a");
/// assert_eq!((token.line, token.column), (1, 1));
/// ```
pub struct Lexer<'a> {
    /// Character cursor for source traversal.
    pub(crate) cursor: Cursor<'a>,

    /// Scan configuration.
    config: LexerConfig,

    /// Diagnostics recorded while scanning.
    handler: Handler,

    /// Byte offset where the current token starts.
    pub(crate) token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a lenient lexer for `source`.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, LexerConfig::default())
    }

    /// Creates a lexer for `source` with an explicit configuration.
    pub fn with_config(source: &'a str, config: LexerConfig) -> Self {
        Self {
            cursor: Cursor::new(source),
            config,
            handler: Handler::new(),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source code.
    ///
    /// Never fails: unrecognised input becomes a [`TokenKind::Illegal`]
    /// token and unterminated literals are cut at the end of input. Both
    /// are also recorded in [`handler`](Self::handler).
    pub fn next_token(&mut self) -> Token {
        self.cursor.eat_while(is_whitespace);

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(c) = self.cursor.current() else {
            return self.token(TokenKind::Eof, "");
        };

        let token = match c {
            '+' => self.single(TokenKind::Plus),
            '*' => self.single(TokenKind::Asterisk),
            '%' => self.single(TokenKind::Mod),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '.' => self.single(TokenKind::Dot),
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '=' => self.lex_equals(),
            '!' => self.lex_bang(),
            '<' => self.lex_less(),
            '>' => self.lex_greater(),
            '&' => self.lex_ampersand(),
            '|' => self.lex_pipe(),
            '?' => self.lex_question(),
            ':' => self.lex_colon(),
            '-' => self.lex_minus(),
            '/' => self.lex_slash(),
            '"' | '\'' | '`' => self.lex_string(c),
            '$' => self.lex_dollar(),
            c if is_ident_start(c) => self.lex_identifier(),
            c if is_digit(c) => self.lex_number(),
            c => {
                self.cursor.advance();
                self.report_error(
                    DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
                    format!("unexpected character {:?}", c),
                );
                self.token(TokenKind::Illegal, c.to_string())
            },
        };

        log::trace!("{}", token);
        token
    }

    /// Returns the next token, or the first error it produced in strict mode.
    ///
    /// In lenient mode this never fails and behaves like
    /// [`next_token`](Self::next_token).
    ///
    /// ```
    /// use chi_lex::{Lexer, LexerConfig};
    ///
    /// let mut lexer = Lexer::with_config("1 # 2", LexerConfig::strict());
    /// assert!(lexer.try_next_token().is_ok());
    /// let err = lexer.try_next_token().unwrap_err();
    /// assert_eq!((err.line, err.column), (1, 3));
    /// ```
    pub fn try_next_token(&mut self) -> LexResult<Token> {
        let mark = self.handler.len();
        let token = self.next_token();
        if self.config.is_strict() {
            if let Some(diagnostic) = self.handler.first_error_since(mark) {
                return Err(LexerError::from(diagnostic));
            }
        }
        Ok(token)
    }

    /// Consumes one code point and returns it as a token of `kind`.
    pub(crate) fn single(&mut self, kind: TokenKind) -> Token {
        self.cursor.advance();
        self.token_from_start(kind)
    }

    /// Token of `kind` whose literal is everything consumed since the start.
    pub(crate) fn token_from_start(&self, kind: TokenKind) -> Token {
        let literal = self.cursor.slice_from(self.token_start);
        self.token(kind, literal)
    }

    /// Token of `kind` positioned at the start of the current token.
    pub(crate) fn token(&self, kind: TokenKind, literal: impl Into<String>) -> Token {
        Token::new(
            kind,
            literal,
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Span from the start of the current token to the cursor.
    fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Records a lexical error at the current token.
    pub(crate) fn report_error(&mut self, code: DiagnosticCode, message: String) {
        let span = self.current_span();
        log::debug!("{} at {}: {}", code, span.position(), message);
        self.handler
            .emit(Diagnostic::error(message, span).with_code(code));
    }

    /// Records a warning at the current token.
    pub(crate) fn report_warning(&mut self, code: DiagnosticCode, message: String) {
        let span = self.current_span();
        log::warn!("{} at {}: {}", code, span.position(), message);
        self.handler
            .emit(Diagnostic::warning(message, span).with_code(code));
    }

    /// Diagnostics recorded so far.
    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// The configuration this lexer was created with.
    pub fn config(&self) -> &LexerConfig {
        &self.config
    }

    /// Current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Current byte offset in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    /// Yields every token before EOF, then `None` forever.
    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

impl<'a> FusedIterator for Lexer<'a> {}
