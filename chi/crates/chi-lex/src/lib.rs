//! chi-lex - Lexical analyzer for a PHP-like scripting language
//!
//! This crate turns source text into a stream of [`Token`]s that a parser can
//! consume. Scanning is pull-based: every call to [`Lexer::next_token`]
//! returns the next token, and once the input is exhausted it returns the
//! same EOF token forever.
//!
//! # Example Usage
//!
//! ```
//! use chi_lex::{Lexer, TokenKind};
//!
//! let mut lexer = Lexer::new("if ($x == 0) { }");
//! assert_eq!(lexer.next_token().kind, TokenKind::If);
//!
//! // Lexer implements Iterator and stops before EOF
//! let kinds: Vec<_> = Lexer::new("$a = 1;").map(|t| t.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [TokenKind::Variable, TokenKind::Assign, TokenKind::Int, TokenKind::Semicolon]
//! );
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, the token value and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character classes for identifiers, digits and whitespace
//! - [`config`] - Lenient/strict mode and its TOML form
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! Reserved words are matched case-sensitively: `class` is a keyword, `Class`
//! is an identifier. See [`token::KEYWORDS`] for the full list.
//!
//! ## Literals
//!
//! - **Integer**: `42`
//! - **Float**: `3.14`, `1.5e-3`
//! - **String**: `"a"`, `'b'`, `` `c` `` (escapes are kept verbatim)
//! - **Variable**: `$name`
//!
//! ## Operators
//!
//! - **Arithmetic**: `+`, `-`, `*`, `/`, `%`
//! - **Comparison**: `==`, `!=`, `===`, `!==`, `<`, `>`, `<=`, `>=`
//! - **Logical**: `&&`, `||`, `!`, `??`
//! - **Access**: `->`, `::`
//!
//! ## Special
//!
//! - **Comment**: `// ...` and `/* ... */` are returned as tokens
//! - **Heredoc**: only the `<<<NAME` opening line is recognised
//! - **Illegal**: anything that does not start a token
//!
//! # Errors
//!
//! Scanning never aborts. Problems are recorded as diagnostics in
//! [`Lexer::handler`]; in [`Mode::Strict`] the first one is also returned
//! from [`Lexer::try_next_token`] and [`tokenize_strict`].

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod cursor;
pub mod lexer;
pub mod token;
pub mod unicode;

#[cfg(test)]
mod edge_cases;

// Re-export main types for convenience
pub use chi_util::{LexResult, LexerError};
pub use config::{ConfigError, LexerConfig, Mode};
pub use cursor::Cursor;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token, TokenKind};
pub use unicode::{is_digit, is_ident_continue, is_ident_start, is_whitespace};

/// Scans all of `source` leniently.
///
/// The result always ends with exactly one EOF token.
///
/// ```
/// use chi_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize("echo 1;");
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
/// ```
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }
    log::debug!(
        "tokenized {} bytes into {} tokens ({} diagnostics)",
        source.len(),
        tokens.len(),
        lexer.handler().len()
    );
    tokens
}

/// Scans all of `source`, stopping at the first illegal token or
/// unterminated literal.
///
/// ```
/// use chi_lex::tokenize_strict;
///
/// assert!(tokenize_strict("$a = 'b';").is_ok());
///
/// let err = tokenize_strict("$a = 'b").unwrap_err();
/// assert_eq!(err.message, "unterminated string literal");
/// assert_eq!((err.line, err.column), (1, 6));
/// ```
pub fn tokenize_strict(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::with_config(source, LexerConfig::strict());
    let mut tokens = Vec::new();
    loop {
        let token = lexer.try_next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            return Ok(tokens);
        }
    }
}
