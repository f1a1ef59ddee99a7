// src/lexer/strings.rs
//
// String literal scanning: single-line literals, triple-quoted multiline
// strings, and `r"""..."""` raw strings. Interpolation is detected here only
// to pick the token kind; splitting `{...}` holes into expressions happens
// in the parser once expressions exist.

use crate::errors::LexError;
use crate::token::{Leaf, Token};

use super::{LexRule, LexState};

/// Scans all string literal forms.
///
/// - `"..."` must close before the end of its line and yields
///   [`Leaf::StringLiteral`], or [`Leaf::InterpLiteral`] when the body holds
///   an unescaped `{`.
/// - `"""..."""` may span lines and yields the multiline kinds.
/// - `r"""..."""` spans lines too but keeps the single-line kinds: the `r`
///   prefix opts out of multiline semantics even though the delimiter is
///   triple.
pub struct StringRule;

/// Promote a token kind when an unescaped `{` is seen. Latches: an already
/// interpolated kind stays interpolated.
fn promote(ty: Leaf) -> Leaf {
    match ty {
        Leaf::StringLiteral => Leaf::InterpLiteral,
        Leaf::MultilineLiteral => Leaf::MultilineInterpLiteral,
        other => other,
    }
}

impl StringRule {
    /// Body scan for single-line literals: ends at the closing quote, fails
    /// at a newline or end of source.
    fn analyze_literal<'src>(
        &self,
        state: &mut LexState<'src>,
        mut ty: Leaf,
    ) -> Result<Token<'src>, LexError> {
        loop {
            match state.peek() {
                None | Some(b'\n') => return Err(self.unterminated(state)),
                Some(b'"') => break,
                Some(b'{') if state.prev() != Some(b'\\') => {
                    ty = promote(ty);
                    state.advance();
                }
                Some(_) => {
                    state.advance();
                }
            }
        }
        state.advance(); // closing quote
        Ok(state.make_token(ty))
    }

    /// Body scan for triple-quoted forms. The body runs to the next quote
    /// run, which must be exactly the three-quote delimiter.
    fn analyze_multiline<'src>(
        &self,
        state: &mut LexState<'src>,
        mut ty: Leaf,
    ) -> Result<Token<'src>, LexError> {
        loop {
            match state.peek() {
                None => return Err(self.unterminated(state)),
                Some(b'"') => break,
                Some(b'{') if state.prev() != Some(b'\\') => {
                    ty = promote(ty);
                    state.advance();
                }
                Some(_) => {
                    state.advance();
                }
            }
        }

        let mut quotes = 0;
        while state.peek() == Some(b'"') && quotes < 4 {
            state.advance();
            quotes += 1;
        }
        if quotes != 3 {
            return Err(self.unterminated(state));
        }
        Ok(state.make_token(ty))
    }

    fn unterminated(&self, state: &LexState<'_>) -> LexError {
        tracing::debug!(
            line = state.start_line,
            col = state.start_column,
            "lexer error: unterminated string"
        );
        let span = state.token_span().into();
        // Multiline kinds report their own error so the fix (add `"""`) is
        // named correctly.
        if state.lexeme().starts_with("\"\"\"") {
            LexError::UnterminatedMultiline { span }
        } else {
            LexError::UnterminatedString { span }
        }
    }
}

impl LexRule for StringRule {
    fn litmus(&self, rest: &str) -> bool {
        rest.starts_with("r\"\"\"") || rest.starts_with('"')
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexError> {
        state.start_token();

        if state.peek() == Some(b'r') {
            // Raw string: the litmus verified all three quotes.
            state.advance(); // 'r'
            state.advance();
            state.advance();
            state.advance();
            return self.analyze_multiline(state, Leaf::StringLiteral);
        }

        if state.remaining().starts_with("\"\"\"") {
            state.advance();
            state.advance();
            state.advance();
            return self.analyze_multiline(state, Leaf::MultilineLiteral);
        }

        state.advance(); // opening quote
        if state.peek() == Some(b'"') {
            // Empty literal.
            state.advance();
            return Ok(state.make_token(Leaf::StringLiteral));
        }
        self.analyze_literal(state, Leaf::StringLiteral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Result<Token<'_>, LexError> {
        StringRule.tokenize(&mut LexState::new(source))
    }

    #[test]
    fn litmus_accepts_quote_and_raw_prefix() {
        assert!(StringRule.litmus("\"hi\""));
        assert!(StringRule.litmus("r\"\"\"hi\"\"\""));
        assert!(!StringRule.litmus("r\"hi\""));
        assert!(!StringRule.litmus("x\"hi\""));
        assert!(!StringRule.litmus(""));
    }

    #[test]
    fn scans_plain_literal() {
        let token = scan("\"Hello, World!\"").unwrap();
        assert_eq!(token.ty, Leaf::StringLiteral);
        assert_eq!(token.lexeme, "\"Hello, World!\"");
    }

    #[test]
    fn scans_empty_literal() {
        let token = scan("\"\"").unwrap();
        assert_eq!(token.ty, Leaf::StringLiteral);
        assert_eq!(token.lexeme, "\"\"");
    }

    #[test]
    fn interpolation_promotes_literal() {
        let token = scan("\"hi {name}\"").unwrap();
        assert_eq!(token.ty, Leaf::InterpLiteral);
        assert_eq!(token.lexeme, "\"hi {name}\"");
    }

    #[test]
    fn escaped_brace_does_not_promote() {
        let token = scan("\"hi \\{name}\"").unwrap();
        assert_eq!(token.ty, Leaf::StringLiteral);
    }

    #[test]
    fn literal_fails_at_newline_or_eos() {
        assert!(matches!(
            scan("\"hi\nthere\""),
            Err(LexError::UnterminatedString { .. })
        ));
        assert!(matches!(
            scan("\"hi"),
            Err(LexError::UnterminatedString { .. })
        ));
    }

    #[test]
    fn scans_multiline_literal() {
        let token = scan("\"\"\"line one\nline two\"\"\"").unwrap();
        assert_eq!(token.ty, Leaf::MultilineLiteral);
        assert_eq!(token.lexeme, "\"\"\"line one\nline two\"\"\"");
    }

    #[test]
    fn interpolation_promotes_multiline() {
        let token = scan("\"\"\"hi {name}\"\"\"").unwrap();
        assert_eq!(token.ty, Leaf::MultilineInterpLiteral);
        assert_eq!(token.lexeme, "\"\"\"hi {name}\"\"\"");
    }

    #[test]
    fn multiline_tracks_lines_through_body() {
        let mut state = LexState::new("\"\"\"a\nbb\"\"\";");
        let token = StringRule.tokenize(&mut state).unwrap();
        assert_eq!(token.span.line, 0);
        assert_eq!(token.span.end_line, 1);
        // "bb" plus the closing quotes.
        assert_eq!(token.span.end_column, 5);
        assert_eq!(state.peek(), Some(b';'));
    }

    #[test]
    fn multiline_requires_triple_closure() {
        assert!(matches!(
            scan("\"\"\"unclosed"),
            Err(LexError::UnterminatedMultiline { .. })
        ));
        // A shorter quote run does not close the string.
        assert!(matches!(
            scan("\"\"\"a\"b\"\"\""),
            Err(LexError::UnterminatedMultiline { .. })
        ));
    }

    #[test]
    fn raw_string_keeps_single_line_kinds() {
        let token = scan("r\"\"\"a\nb\"\"\"").unwrap();
        assert_eq!(token.ty, Leaf::StringLiteral);
        assert_eq!(token.lexeme, "r\"\"\"a\nb\"\"\"");

        let token = scan("r\"\"\"hi {name}\"\"\"").unwrap();
        assert_eq!(token.ty, Leaf::InterpLiteral);
    }

    #[test]
    fn unclosed_raw_string_reports_string_error() {
        assert!(matches!(
            scan("r\"\"\"unclosed"),
            Err(LexError::UnterminatedString { .. })
        ));
    }
}
