// src/lexer/character.rs

use crate::errors::LexError;
use crate::token::{Leaf, Token};

use super::{LexRule, LexState};

/// Scans character literals: `'a'`, escapes like `'\n'`, and unicode
/// escapes of one to four hex digits (`'\uB'`, `'\uBeeF'`).
///
/// The scan is syntactic only; no escape is decoded to a value here.
pub struct CharacterRule;

impl CharacterRule {
    fn tokenize_unicode<'src>(
        &self,
        state: &mut LexState<'src>,
    ) -> Result<Token<'src>, LexError> {
        state.advance(); // 'u'

        // An immediate closing quote means zero digits.
        if state.peek() == Some(b'\'') {
            return Err(self.invalid_unicode(state));
        }

        // Up to five reads: at most four hex digits plus the closing quote.
        let mut digits = 0;
        for _ in 0..5 {
            match state.advance() {
                Some(b'\'') => return Ok(state.make_token(Leaf::CharLiteral)),
                Some(b) if b.is_ascii_hexdigit() => {
                    digits += 1;
                    if digits > 4 {
                        return Err(self.invalid_unicode(state));
                    }
                }
                _ => return Err(self.invalid_unicode(state)),
            }
        }
        Err(self.invalid_unicode(state))
    }

    fn invalid_unicode(&self, state: &LexState<'_>) -> LexError {
        tracing::debug!(
            line = state.start_line,
            col = state.start_column,
            "lexer error: invalid unicode escape"
        );
        LexError::InvalidUnicode {
            span: state.token_span().into(),
        }
    }

    fn invalid_character(&self, state: &LexState<'_>) -> LexError {
        tracing::debug!(
            line = state.start_line,
            col = state.start_column,
            "lexer error: invalid character literal"
        );
        LexError::InvalidCharacter {
            span: state.token_span().into(),
        }
    }
}

impl LexRule for CharacterRule {
    fn litmus(&self, rest: &str) -> bool {
        rest.starts_with('\'')
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexError> {
        state.start_token();
        state.advance(); // opening quote

        if state.peek() == Some(b'\\') {
            state.advance(); // backslash
            match state.peek() {
                Some(b'u') => return self.tokenize_unicode(state),
                // An escape with nothing behind it is not a character.
                Some(b'\'') | None => return Err(self.invalid_character(state)),
                _ => {}
            }
        }

        // One code unit, then the closing quote.
        if state.advance().is_none() {
            return Err(self.invalid_character(state));
        }
        match state.advance() {
            Some(b'\'') => Ok(state.make_token(Leaf::CharLiteral)),
            _ => Err(self.invalid_character(state)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Result<Token<'_>, LexError> {
        CharacterRule.tokenize(&mut LexState::new(source))
    }

    #[test]
    fn litmus_requires_single_quote() {
        assert!(CharacterRule.litmus("'a'"));
        assert!(!CharacterRule.litmus("a'"));
        assert!(!CharacterRule.litmus(""));
    }

    #[test]
    fn scans_plain_character() {
        let token = scan("'a'").unwrap();
        assert_eq!(token.ty, Leaf::CharLiteral);
        assert_eq!(token.lexeme, "'a'");
    }

    #[test]
    fn scans_escaped_character() {
        assert_eq!(scan("'\\n'").unwrap().lexeme, "'\\n'");
        assert_eq!(scan("'\\t'").unwrap().lexeme, "'\\t'");
        assert_eq!(scan("'\\\\'").unwrap().lexeme, "'\\\\'");
    }

    #[test]
    fn scans_unicode_escapes() {
        assert_eq!(scan("'\\uB'").unwrap().lexeme, "'\\uB'");
        assert_eq!(scan("'\\uBe'").unwrap().lexeme, "'\\uBe'");
        assert_eq!(scan("'\\uBee'").unwrap().lexeme, "'\\uBee'");
        assert_eq!(scan("'\\uBeeF'").unwrap().lexeme, "'\\uBeeF'");
    }

    #[test]
    fn unicode_escape_limited_to_four_digits() {
        assert!(matches!(
            scan("'\\uDEADBEEF'"),
            Err(LexError::InvalidUnicode { .. })
        ));
        assert!(matches!(
            scan("'\\u12345'"),
            Err(LexError::InvalidUnicode { .. })
        ));
    }

    #[test]
    fn unicode_escape_requires_digits() {
        assert!(matches!(scan("'\\u'"), Err(LexError::InvalidUnicode { .. })));
        assert!(matches!(
            scan("'\\uZ'"),
            Err(LexError::InvalidUnicode { .. })
        ));
    }

    #[test]
    fn unterminated_forms_are_invalid() {
        assert!(matches!(scan("'a"), Err(LexError::InvalidCharacter { .. })));
        assert!(matches!(scan("'ab'"), Err(LexError::InvalidCharacter { .. })));
        assert!(matches!(scan("'"), Err(LexError::InvalidCharacter { .. })));
        assert!(matches!(
            scan("'\\uBee"),
            Err(LexError::InvalidUnicode { .. })
        ));
    }

    #[test]
    fn orphaned_escape_is_invalid() {
        assert!(matches!(scan("'\\'"), Err(LexError::InvalidCharacter { .. })));
        // A quote directly behind the backslash reads as an empty escape.
        assert!(matches!(
            scan("'\\''"),
            Err(LexError::InvalidCharacter { .. })
        ));
    }
}
