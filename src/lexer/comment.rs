// src/lexer/comment.rs

use crate::errors::LexError;
use crate::token::{Leaf, Token};

use super::{LexRule, LexState};

/// Scans `#` comments running to the end of the line.
///
/// Comments are tokenized rather than silently skipped so downstream tools
/// can recover them (documentation extraction, formatters); the parser is
/// free to discard them.
pub struct CommentRule;

impl LexRule for CommentRule {
    fn litmus(&self, rest: &str) -> bool {
        rest.starts_with('#')
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexError> {
        state.start_token();
        state.advance(); // '#'
        while let Some(b) = state.peek() {
            if b == b'\n' {
                break;
            }
            state.advance();
        }
        Ok(state.make_token(Leaf::Comment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn litmus_requires_hash() {
        assert!(CommentRule.litmus("# hello"));
        assert!(CommentRule.litmus("#"));
        assert!(!CommentRule.litmus("x # hello"));
        assert!(!CommentRule.litmus(""));
    }

    #[test]
    fn scans_to_end_of_line() {
        let mut state = LexState::new("# a comment\nnext");
        let token = CommentRule.tokenize(&mut state).unwrap();
        assert_eq!(token.ty, Leaf::Comment);
        assert_eq!(token.lexeme, "# a comment");
        assert_eq!(state.peek(), Some(b'\n'));
    }

    #[test]
    fn scans_to_end_of_source() {
        let mut state = LexState::new("# trailing");
        let token = CommentRule.tokenize(&mut state).unwrap();
        assert_eq!(token.lexeme, "# trailing");
        assert!(state.is_at_end());
    }
}
