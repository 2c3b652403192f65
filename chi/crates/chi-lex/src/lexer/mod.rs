//! Lexer module.
//!
//! The implementation is split by responsibility:
//! - `core` - the Lexer struct, whitespace skipping and dispatch
//! - `operator` - single-character tokens and maximal-munch operators
//! - `identifier` - identifiers and keywords
//! - `number` - integer and float literals
//! - `string` - double, single and backtick quoted strings
//! - `variable` - `$name` variables
//! - `comment` - line and block comments
//! - `heredoc` - heredoc/nowdoc opening lines

mod comment;
mod core;
mod heredoc;
mod identifier;
mod number;
mod operator;
mod string;
mod variable;

pub use self::core::Lexer;
