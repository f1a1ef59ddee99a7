// src/lexer/word.rs

use crate::errors::LexError;
use crate::token::{Leaf, Token};

use super::{LexRule, LexState};

/// Scans keywords and identifiers.
///
/// Both are words: a run of ASCII letters, digits, and underscores starting
/// with a letter or underscore. The scanned lexeme is classified against the
/// keyword table; anything unknown is an identifier.
pub struct WordRule;

fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

impl LexRule for WordRule {
    fn litmus(&self, rest: &str) -> bool {
        rest.as_bytes()
            .first()
            .is_some_and(|&b| b.is_ascii_alphabetic() || b == b'_')
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexError> {
        state.start_token();
        state.advance();
        while state.peek().is_some_and(is_word_byte) {
            state.advance();
        }

        let ty = Leaf::keyword_type(state.lexeme()).unwrap_or(Leaf::Identifier);
        Ok(state.make_token(ty))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Token<'_> {
        WordRule.tokenize(&mut LexState::new(source)).unwrap()
    }

    #[test]
    fn litmus_accepts_letters_and_underscore() {
        assert!(WordRule.litmus("abc"));
        assert!(WordRule.litmus("_private"));
        assert!(WordRule.litmus("Z9"));
        assert!(!WordRule.litmus("9z"));
        assert!(!WordRule.litmus("#"));
        assert!(!WordRule.litmus(""));
    }

    #[test]
    fn classifies_keywords() {
        assert_eq!(scan("using").ty, Leaf::KwUsing);
        assert_eq!(scan("module").ty, Leaf::KwModule);
        assert_eq!(scan("uint32").ty, Leaf::KwUint32);
        assert_eq!(scan("return").ty, Leaf::KwReturn);
        assert_eq!(scan("null").ty, Leaf::NullLiteral);
        assert_eq!(scan("true").ty, Leaf::TrueLiteral);
        assert_eq!(scan("false").ty, Leaf::FalseLiteral);
    }

    #[test]
    fn unknown_words_are_identifiers() {
        let token = scan("mystr");
        assert_eq!(token.ty, Leaf::Identifier);
        assert_eq!(token.lexeme, "mystr");
        assert_eq!(scan("usings").ty, Leaf::Identifier);
        assert_eq!(scan("_").ty, Leaf::Identifier);
        assert_eq!(scan("int128").ty, Leaf::Identifier);
    }

    #[test]
    fn stops_at_non_word_byte() {
        let mut state = LexState::new("name.field");
        let token = WordRule.tokenize(&mut state).unwrap();
        assert_eq!(token.lexeme, "name");
        assert_eq!(state.peek(), Some(b'.'));
    }

    #[test]
    fn keywords_embedded_in_words_stay_identifiers() {
        assert_eq!(scan("variable").ty, Leaf::Identifier);
        assert_eq!(scan("if_else").ty, Leaf::Identifier);
    }
}
