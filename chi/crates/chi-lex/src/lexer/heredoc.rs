//! Heredoc and nowdoc openers.
//!
//! Only the opening line is recognised. The body and closing identifier are
//! scanned as ordinary tokens, and a warning is recorded each time.

use chi_util::DiagnosticCode;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<'a> Lexer<'a> {
    /// Lexes `<<<` through the end of the line, leaving the newline.
    pub(crate) fn lex_heredoc(&mut self) -> Token {
        self.cursor.eat_while(|c| c != '\n');
        let token = self.token_from_start(TokenKind::HeredocStart);
        self.report_warning(
            DiagnosticCode::W_LEXER_HEREDOC_UNSUPPORTED,
            "heredoc body is not scanned".to_string(),
        );
        token
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heredoc_opening_line() {
        let mut lexer = Lexer::new("<<<EOT\nbody\nEOT;");
        assert_eq!(
            lexer.next_token(),
            Token::new(TokenKind::HeredocStart, "<<<EOT", 1, 1)
        );
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "body", 2, 1));
    }

    #[test]
    fn test_nowdoc_opening_line() {
        let token = Lexer::new("<<<'EOT'").next_token();
        assert_eq!(token.kind, TokenKind::HeredocStart);
        assert_eq!(token.literal, "<<<'EOT'");
    }

    #[test]
    fn test_heredoc_records_warning_only() {
        let mut lexer = Lexer::new("<<<X");
        lexer.next_token();
        assert!(!lexer.handler().has_errors());
        assert_eq!(lexer.handler().warning_count(), 1);
        assert_eq!(
            lexer.handler().diagnostics()[0].code,
            Some(DiagnosticCode::W_LEXER_HEREDOC_UNSUPPORTED)
        );
    }

    #[test]
    fn test_heredoc_is_not_an_error_in_strict_mode() {
        let mut lexer = Lexer::with_config("<<<X", crate::LexerConfig::strict());
        assert_eq!(
            lexer.try_next_token().map(|t| t.kind),
            Ok(TokenKind::HeredocStart)
        );
    }

    #[test]
    fn test_heredoc_after_code() {
        let kinds: Vec<_> = Lexer::new("$s = <<<EOT\n")
            .map(|t| t.kind)
            .collect();
        assert_eq!(
            kinds,
            vec![TokenKind::Variable, TokenKind::Assign, TokenKind::HeredocStart]
        );
    }
}
