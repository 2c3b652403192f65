//! End-to-end tests for the public chi-lex API.

use std::thread;

use chi_lex::{
    keyword_from_ident, tokenize, tokenize_strict, Lexer, LexerConfig, LexerError, Mode, Token,
    TokenKind,
};

fn assert_tokens(source: &str, expected: &[(TokenKind, &str)]) {
    let actual: Vec<_> = tokenize(source)
        .into_iter()
        .map(|t| (t.kind, t.literal))
        .collect();
    let expected: Vec<_> = expected
        .iter()
        .map(|&(kind, literal)| (kind, literal.to_string()))
        .collect();
    assert_eq!(actual, expected, "{:?}", source);
}

#[test]
fn test_small_script() {
    use TokenKind::*;
    let source = "<?php\n$total = $a + $b * 2.5;\necho \"total: $total\";\n";
    let tokens = tokenize(source);

    // `<?php` is not special: `<`, `?`, then the identifier `php`.
    assert_eq!(tokens[0].kind, Lt);
    assert_eq!(tokens[1].kind, Question);
    assert_eq!(tokens[2], Token::new(Ident, "php", 1, 3));

    assert_eq!(tokens[3], Token::new(Variable, "$total", 2, 1));
    assert_eq!(tokens[9], Token::new(Float, "2.5", 2, 20));
    assert_eq!(tokens[11], Token::new(Echo, "echo", 3, 1));
    assert_eq!(tokens[12], Token::new(String, "total: $total", 3, 6));
    assert_eq!(tokens.last(), Some(&Token::eof(4, 1)));
}

#[test]
fn test_operator_table() {
    use TokenKind::*;
    assert_tokens(
        "= == === ! != !== < <= > >= && || ?? ? : :: -> - / * + % .",
        &[
            (Assign, "="),
            (Eq, "=="),
            (Identical, "==="),
            (Bang, "!"),
            (NotEq, "!="),
            (NotIdentical, "!=="),
            (Lt, "<"),
            (Lte, "<="),
            (Gt, ">"),
            (Gte, ">="),
            (LogicalAnd, "&&"),
            (LogicalOr, "||"),
            (Coalesce, "??"),
            (Question, "?"),
            (Colon, ":"),
            (DoubleColon, "::"),
            (Arrow, "->"),
            (Minus, "-"),
            (Slash, "/"),
            (Asterisk, "*"),
            (Plus, "+"),
            (Mod, "%"),
            (Dot, "."),
            (Eof, ""),
        ],
    );
}

#[test]
fn test_comments_are_tokens() {
    use TokenKind::*;
    assert_tokens(
        "a /* b */ c // d\ne",
        &[
            (Ident, "a"),
            (Comment, " b "),
            (Ident, "c"),
            (Comment, " d"),
            (Ident, "e"),
            (Eof, ""),
        ],
    );
}

#[test]
fn test_variables_and_illegal_dollars() {
    use TokenKind::*;
    assert_tokens(
        "$x1_2 $5",
        &[(Variable, "$x1_2"), (Illegal, "$"), (Int, "5"), (Eof, "")],
    );
}

#[test]
fn test_keyword_case() {
    assert_tokens(
        "class Class",
        &[
            (TokenKind::Class, "class"),
            (TokenKind::Ident, "Class"),
            (TokenKind::Eof, ""),
        ],
    );
    assert_eq!(keyword_from_ident("require_once"), Some(TokenKind::RequireOnce));
}

#[test]
fn test_heredoc_stub() {
    use TokenKind::*;
    let mut lexer = Lexer::new("$s = <<<EOT\nhi\nEOT;\n");
    let tokens: Vec<_> = (&mut lexer).collect();
    assert_eq!(tokens[2], Token::new(HeredocStart, "<<<EOT", 1, 6));
    assert_eq!(tokens[3], Token::new(Ident, "hi", 2, 1));
    assert_eq!(tokens[4], Token::new(Ident, "EOT", 3, 1));
    assert_eq!(lexer.handler().warning_count(), 1);
    assert!(!lexer.handler().has_errors());
}

#[test]
fn test_lenient_mode_collects_all_errors() {
    let mut lexer = Lexer::new("# 'open");
    let tokens: Vec<_> = (&mut lexer).collect();
    assert_eq!(tokens.len(), 2);
    assert_eq!(lexer.handler().error_count(), 2);

    let rendered: Vec<_> = lexer
        .handler()
        .diagnostics()
        .iter()
        .map(|d| d.to_string())
        .collect();
    assert_eq!(
        rendered,
        vec![
            "error[E1001]: unexpected character '#' (line 1, column 1)",
            "error[E1002]: unterminated string literal (line 1, column 3)",
        ]
    );
}

#[test]
fn test_strict_mode_from_toml() {
    let config = LexerConfig::from_toml_str("mode = \"strict\"").unwrap();
    assert_eq!(config.mode, Mode::Strict);

    let mut lexer = Lexer::with_config("ok |", config);
    assert_eq!(lexer.try_next_token().map(|t| t.kind), Ok(TokenKind::Ident));
    assert_eq!(
        lexer.try_next_token(),
        Err(LexerError::new("expected `||`, found `|`", 1, 4))
    );
}

#[test]
fn test_tokenize_strict_stops_at_first_error() {
    let err = tokenize_strict("$a = 1;\n$b = \"x").unwrap_err();
    assert_eq!(
        err.to_string(),
        "lexer error at line 2, column 6: unterminated string literal"
    );
}

#[test]
fn test_independent_lexers_on_threads() {
    let sources = ["if ($a) { echo 1; }", "while (true) { break; }"];
    let expected: Vec<_> = sources.iter().map(|s| tokenize(s)).collect();

    let handles: Vec<_> = sources
        .iter()
        .map(|&source| thread::spawn(move || tokenize(source)))
        .collect();

    for (handle, expected) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn test_lexer_is_send() {
    fn assert_send<T: Send>() {}
    assert_send::<Lexer<'static>>();
    assert_send::<Token>();
}
