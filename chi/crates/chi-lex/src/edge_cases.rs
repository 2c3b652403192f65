//! Edge case tests for chi-lex

#[cfg(test)]
mod tests {
    use crate::{tokenize, Lexer, LexerConfig, Token, TokenKind};

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).into_iter().map(|t| t.kind).collect()
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn test_edge_whitespace_only() {
        assert!(lex_all("  \t\r\n\n ").is_empty());
    }

    #[test]
    fn test_edge_single_char_ident() {
        assert_eq!(lex_all("x")[0], Token::new(TokenKind::Ident, "x", 1, 1));
    }

    #[test]
    fn test_edge_long_identifier() {
        let name = "a".repeat(10000);
        let t = lex_all(&format!("$x = {};", name));
        assert_eq!(t[2].literal, name);
        assert_eq!(t[3].column, 10006);
    }

    #[test]
    fn test_edge_long_number() {
        let digits = "9".repeat(500);
        let t = lex_all(&digits);
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::Int);
        assert_eq!(t[0].literal.len(), 500);
    }

    #[test]
    fn test_edge_nul_is_illegal_not_eof() {
        let t = lex_all("a\0b");
        assert_eq!(t.len(), 3);
        assert_eq!(t[1], Token::new(TokenKind::Illegal, "\0", 1, 2));
        assert_eq!(t[2].literal, "b");
    }

    #[test]
    fn test_edge_bom_is_illegal() {
        assert_eq!(kinds("\u{FEFF}x"), vec![TokenKind::Illegal, TokenKind::Ident]);
    }

    #[test]
    fn test_edge_columns_count_code_points() {
        let t = lex_all("'é' $x");
        assert_eq!(t[1], Token::new(TokenKind::Variable, "$x", 1, 5));
    }

    #[test]
    fn test_edge_emoji_in_string() {
        let t = lex_all("\"😀\" 1");
        assert_eq!(t[0].literal, "😀");
        assert_eq!(t[1].column, 5);
    }

    #[test]
    fn test_edge_crlf_line_endings() {
        let t = lex_all("a\r\nb\r\nc");
        let positions: Vec<_> = t.iter().map(|t| (t.line, t.column)).collect();
        assert_eq!(positions, vec![(1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_edge_tabs_count_one_column() {
        let t = lex_all("\t\tx");
        assert_eq!(t[0].column, 3);
    }

    #[test]
    fn test_edge_operators_without_spaces() {
        use TokenKind::*;
        assert_eq!(
            kinds("$a===$b!==$c??$d->e::f"),
            vec![
                Variable,
                Identical,
                Variable,
                NotIdentical,
                Variable,
                Coalesce,
                Variable,
                Arrow,
                Ident,
                DoubleColon,
                Ident,
            ]
        );
    }

    #[test]
    fn test_edge_comment_markers_inside_string() {
        let t = lex_all("\"// not /* a comment\"");
        assert_eq!(t.len(), 1);
        assert_eq!(t[0].kind, TokenKind::String);
    }

    #[test]
    fn test_edge_quote_inside_comment() {
        let t = lex_all("// it's\nx");
        assert_eq!(t.len(), 2);
        assert_eq!(t[1].literal, "x");
    }

    #[test]
    fn test_edge_slash_star_at_end() {
        assert_eq!(kinds("/*"), vec![TokenKind::Comment]);
        assert_eq!(lex_all("/*")[0].literal, "");
    }

    #[test]
    fn test_edge_trailing_operator_prefixes() {
        assert_eq!(kinds("="), vec![TokenKind::Assign]);
        assert_eq!(kinds("!"), vec![TokenKind::Bang]);
        assert_eq!(kinds("<"), vec![TokenKind::Lt]);
        assert_eq!(kinds("-"), vec![TokenKind::Minus]);
        assert_eq!(kinds(":"), vec![TokenKind::Colon]);
        assert_eq!(kinds("?"), vec![TokenKind::Question]);
    }

    #[test]
    fn test_edge_dollar_before_whitespace() {
        let t = lex_all("$ x");
        assert_eq!(t[0], Token::new(TokenKind::Illegal, "$", 1, 1));
        assert_eq!(t[1], Token::new(TokenKind::Ident, "x", 1, 3));
    }

    #[test]
    fn test_edge_number_then_identifier() {
        assert_eq!(kinds("123abc"), vec![TokenKind::Int, TokenKind::Ident]);
    }

    #[test]
    fn test_edge_heredoc_without_newline() {
        let t = lex_all("<<<");
        assert_eq!(t, vec![Token::new(TokenKind::HeredocStart, "<<<", 1, 1)]);
    }

    #[test]
    fn test_edge_eof_after_unterminated_string() {
        let mut lexer = Lexer::new("'abc\ndef");
        let token = lexer.next_token();
        assert_eq!(token.literal, "abc\ndef");
        let eof = lexer.next_token();
        assert_eq!(eof, Token::eof(2, 4));
        assert_eq!(lexer.next_token(), eof);
    }

    #[test]
    fn test_edge_every_diagnostic_has_token_position() {
        let mut lexer = Lexer::new("a # b\n  & c\n$");
        let tokens: Vec<_> = (&mut lexer).collect();
        let illegal: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Illegal)
            .map(|t| (t.line, t.column))
            .collect();
        let reported: Vec<_> = lexer
            .handler()
            .diagnostics()
            .iter()
            .map(|d| (d.span.line, d.span.column))
            .collect();
        assert_eq!(illegal, vec![(1, 3), (2, 3), (3, 1)]);
        assert_eq!(reported, illegal);
    }

    #[test]
    fn test_edge_strict_mode_resumes_after_error() {
        let mut lexer = Lexer::with_config("# x", LexerConfig::strict());
        assert!(lexer.try_next_token().is_err());
        let token = lexer.try_next_token().unwrap();
        assert_eq!(token.literal, "x");
    }

    #[test]
    fn test_edge_iterator_and_tokenize_agree() {
        let source = "function f($a) { return $a % 2; }";
        let mut from_tokenize = tokenize(source);
        assert!(from_tokenize.pop().is_some_and(|t| t.is_eof()));
        assert_eq!(lex_all(source), from_tokenize);
    }
}
