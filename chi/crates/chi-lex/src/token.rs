//! Token definitions and the keyword table.
//!
//! A [`Token`] is an immutable value: its [`TokenKind`], the literal text it
//! was scanned from, and the 1-based line/column of its first code point.
//!
//! Keywords are matched by exact spelling. `class` is [`TokenKind::Class`];
//! `Class` is an ordinary [`TokenKind::Ident`].

use std::fmt;
use std::sync::LazyLock;

use chi_util::Position;
use rustc_hash::FxHashMap;

/// The closed set of token kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Special
    /// End of input. Returned forever once reached.
    Eof,
    /// A code point or prefix that does not start any token.
    Illegal,
    /// `// ...` or `/* ... */`
    Comment,

    // Identifiers and literals
    /// `main`, `x`, `Class`
    Ident,
    /// `123`
    Int,
    /// `3.14`, `1.5e-3`
    Float,
    /// `"..."`, `'...'` or `` `...` ``
    String,
    /// `$name`
    Variable,
    /// The opening line of a heredoc/nowdoc, `<<<EOT`
    HeredocStart,

    // Operators
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `!`
    Bang,
    /// `*`
    Asterisk,
    /// `/`
    Slash,
    /// `%`
    Mod,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Lte,
    /// `>=`
    Gte,
    /// `==`
    Eq,
    /// `!=`
    NotEq,
    /// `===`
    Identical,
    /// `!==`
    NotIdentical,
    /// `&&`
    LogicalAnd,
    /// `||`
    LogicalOr,
    /// `??`
    Coalesce,
    /// `->`
    Arrow,
    /// `::`
    DoubleColon,

    // Delimiters
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `?`
    Question,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,

    // Declarations and modifiers
    /// `function`
    Function,
    /// `class`
    Class,
    /// `interface`
    Interface,
    /// `trait`
    Trait,
    /// `extends`
    Extends,
    /// `implements`
    Implements,
    /// `public`
    Public,
    /// `private`
    Private,
    /// `protected`
    Protected,
    /// `static`
    Static,
    /// `abstract`
    Abstract,
    /// `final`
    Final,
    /// `const`
    Const,

    // Control flow
    /// `if`
    If,
    /// `else`
    Else,
    /// `elseif`
    ElseIf,
    /// `switch`
    Switch,
    /// `case`
    Case,
    /// `default`
    Default,
    /// `while`
    While,
    /// `do`
    Do,
    /// `for`
    For,
    /// `foreach`
    Foreach,
    /// `break`
    Break,
    /// `continue`
    Continue,
    /// `return`
    Return,
    /// `try`
    Try,
    /// `catch`
    Catch,
    /// `finally`
    Finally,
    /// `throw`
    Throw,
    /// `new`
    New,
    /// `clone`
    Clone,
    /// `instanceof`
    Instanceof,

    // Language constructs
    /// `echo`
    Echo,
    /// `print`
    Print,
    /// `include`
    Include,
    /// `include_once`
    IncludeOnce,
    /// `require`
    Require,
    /// `require_once`
    RequireOnce,
    /// `use`
    Use,
    /// `namespace`
    Namespace,
    /// `as`
    As,

    // Literal keywords
    /// `null`
    Null,
    /// `true`
    True,
    /// `false`
    False,

    // Built-in type names
    /// `array`
    Array,
    /// `callable`
    Callable,
    /// `bool`
    Bool,
    /// `int`
    IntType,
    /// `float`
    FloatType,
    /// `string`
    StringType,
    /// `object`
    Object,
}

impl TokenKind {
    /// Upper-case name used in token tables, e.g. `"NOT_IDENTICAL"`.
    pub const fn name(self) -> &'static str {
        use TokenKind::*;
        match self {
            Eof => "EOF",
            Illegal => "ILLEGAL",
            Comment => "COMMENT",
            Ident => "IDENT",
            Int => "INT",
            Float => "FLOAT",
            String => "STRING",
            Variable => "VARIABLE",
            HeredocStart => "HEREDOC_START",
            Assign => "ASSIGN",
            Plus => "PLUS",
            Minus => "MINUS",
            Bang => "BANG",
            Asterisk => "ASTERISK",
            Slash => "SLASH",
            Mod => "MOD",
            Lt => "LT",
            Gt => "GT",
            Lte => "LTE",
            Gte => "GTE",
            Eq => "EQ",
            NotEq => "NOT_EQ",
            Identical => "IDENTICAL",
            NotIdentical => "NOT_IDENTICAL",
            LogicalAnd => "LOGICAL_AND",
            LogicalOr => "LOGICAL_OR",
            Coalesce => "COALESCE",
            Arrow => "ARROW",
            DoubleColon => "DOUBLE_COLON",
            Comma => "COMMA",
            Semicolon => "SEMICOLON",
            Colon => "COLON",
            Dot => "DOT",
            Question => "QUESTION",
            LParen => "LPAREN",
            RParen => "RPAREN",
            LBrace => "LBRACE",
            RBrace => "RBRACE",
            LBracket => "LBRACKET",
            RBracket => "RBRACKET",
            Function => "FUNCTION",
            Class => "CLASS",
            Interface => "INTERFACE",
            Trait => "TRAIT",
            Extends => "EXTENDS",
            Implements => "IMPLEMENTS",
            Public => "PUBLIC",
            Private => "PRIVATE",
            Protected => "PROTECTED",
            Static => "STATIC",
            Abstract => "ABSTRACT",
            Final => "FINAL",
            Const => "CONST",
            If => "IF",
            Else => "ELSE",
            ElseIf => "ELSEIF",
            Switch => "SWITCH",
            Case => "CASE",
            Default => "DEFAULT",
            While => "WHILE",
            Do => "DO",
            For => "FOR",
            Foreach => "FOREACH",
            Break => "BREAK",
            Continue => "CONTINUE",
            Return => "RETURN",
            Try => "TRY",
            Catch => "CATCH",
            Finally => "FINALLY",
            Throw => "THROW",
            New => "NEW",
            Clone => "CLONE",
            Instanceof => "INSTANCEOF",
            Echo => "ECHO",
            Print => "PRINT",
            Include => "INCLUDE",
            IncludeOnce => "INCLUDE_ONCE",
            Require => "REQUIRE",
            RequireOnce => "REQUIRE_ONCE",
            Use => "USE",
            Namespace => "NAMESPACE",
            As => "AS",
            Null => "NULL",
            True => "TRUE",
            False => "FALSE",
            Array => "ARRAY",
            Callable => "CALLABLE",
            Bool => "BOOL",
            IntType => "INT_TYPE",
            FloatType => "FLOAT_TYPE",
            StringType => "STRING_TYPE",
            Object => "OBJECT",
        }
    }

    /// Returns true for reserved words.
    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    /// Returns true for operators (not delimiters).
    pub const fn is_operator(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Assign
                | Plus
                | Minus
                | Bang
                | Asterisk
                | Slash
                | Mod
                | Lt
                | Gt
                | Lte
                | Gte
                | Eq
                | NotEq
                | Identical
                | NotIdentical
                | LogicalAnd
                | LogicalOr
                | Coalesce
                | Arrow
                | DoubleColon
        )
    }

    /// Returns true for tokens that carry scanned content.
    pub const fn is_literal(self) -> bool {
        use TokenKind::*;
        matches!(
            self,
            Ident | Int | Float | String | Variable | Comment | HeredocStart
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified slice of source text.
///
/// `literal` is the exact source text, except for strings and comments,
/// whose delimiters are trimmed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Source text the token stands for
    pub literal: String,
    /// Line of the first code point (1-based)
    pub line: u32,
    /// Column of the first code point (1-based)
    pub column: u32,
}

impl Token {
    /// Create a new token
    pub fn new(kind: TokenKind, literal: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            kind,
            literal: literal.into(),
            line,
            column,
        }
    }

    /// The terminal token at `(line, column)`.
    pub fn eof(line: u32, column: u32) -> Self {
        Self::new(TokenKind::Eof, "", line, column)
    }

    /// Returns true for the terminal token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// `(line, column)` of the first code point.
    #[inline]
    pub fn position(&self) -> Position {
        Position::new(self.line, self.column)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}:{}] {} '{}'",
            self.line, self.column, self.kind, self.literal
        )
    }
}

/// Every reserved word with the kind it maps to.
pub const KEYWORDS: &[(&str, TokenKind)] = &[
    ("function", TokenKind::Function),
    ("class", TokenKind::Class),
    ("interface", TokenKind::Interface),
    ("trait", TokenKind::Trait),
    ("extends", TokenKind::Extends),
    ("implements", TokenKind::Implements),
    ("public", TokenKind::Public),
    ("private", TokenKind::Private),
    ("protected", TokenKind::Protected),
    ("static", TokenKind::Static),
    ("abstract", TokenKind::Abstract),
    ("final", TokenKind::Final),
    ("const", TokenKind::Const),
    ("if", TokenKind::If),
    ("else", TokenKind::Else),
    ("elseif", TokenKind::ElseIf),
    ("switch", TokenKind::Switch),
    ("case", TokenKind::Case),
    ("default", TokenKind::Default),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("for", TokenKind::For),
    ("foreach", TokenKind::Foreach),
    ("break", TokenKind::Break),
    ("continue", TokenKind::Continue),
    ("return", TokenKind::Return),
    ("try", TokenKind::Try),
    ("catch", TokenKind::Catch),
    ("finally", TokenKind::Finally),
    ("throw", TokenKind::Throw),
    ("new", TokenKind::New),
    ("clone", TokenKind::Clone),
    ("instanceof", TokenKind::Instanceof),
    ("echo", TokenKind::Echo),
    ("print", TokenKind::Print),
    ("include", TokenKind::Include),
    ("include_once", TokenKind::IncludeOnce),
    ("require", TokenKind::Require),
    ("require_once", TokenKind::RequireOnce),
    ("use", TokenKind::Use),
    ("namespace", TokenKind::Namespace),
    ("as", TokenKind::As),
    ("null", TokenKind::Null),
    ("true", TokenKind::True),
    ("false", TokenKind::False),
    ("array", TokenKind::Array),
    ("callable", TokenKind::Callable),
    ("bool", TokenKind::Bool),
    ("int", TokenKind::IntType),
    ("float", TokenKind::FloatType),
    ("string", TokenKind::StringType),
    ("object", TokenKind::Object),
];

/// Keyword lookup table, built on first use and read-only afterwards.
static KEYWORD_TABLE: LazyLock<FxHashMap<&'static str, TokenKind>> =
    LazyLock::new(|| KEYWORDS.iter().copied().collect());

/// Looks up the exact spelling `ident` in the keyword table.
///
/// ```
/// use chi_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("foreach"), Some(TokenKind::Foreach));
/// assert_eq!(keyword_from_ident("Foreach"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORD_TABLE.get(ident).copied()
}
