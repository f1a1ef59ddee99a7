// src/lexer/operator.rs

use crate::errors::LexError;
use crate::token::{Leaf, Token};

use super::{LexRule, LexState};

/// Scans operators and delimiters with greedy longest-match: a lead byte may
/// double (`++`), triple (`...`), and/or take a trailing `=` (`<<=`).
///
/// This rule never fails; combinations outside the operator table (such as
/// `.=`) become [`Leaf::Unknown`] tokens for the parser to report.
pub struct OperatorRule;

const PUNCTUATION: &[u8] = b"+-*/%=.?~&|^<>!(){}[],;:";

impl OperatorRule {
    /// The lead byte may be doubled; otherwise fall through to trailing `=`.
    fn tokenize_double<'src>(&self, state: &mut LexState<'src>, ty: Leaf) -> Token<'src> {
        if state.prev() != state.peek() {
            return self.tokenize_equals(state, ty);
        }
        state.advance();
        match ty {
            // True doubles.
            Leaf::Plus => state.make_token(Leaf::PlusPlus),
            Leaf::Minus => state.make_token(Leaf::MinusMinus),

            // The access operator is the only one that may triple.
            Leaf::Dot => self.tokenize_triple(state, Leaf::DotDot),

            // Doubles that may still take a trailing `=`.
            Leaf::Ampersand => self.tokenize_equals(state, Leaf::AmpAmp),
            Leaf::Pipe => self.tokenize_equals(state, Leaf::PipePipe),
            Leaf::Lt => self.tokenize_equals(state, Leaf::LessLess),
            Leaf::Gt => self.tokenize_equals(state, Leaf::GreaterGreater),

            _ => state.make_token(Leaf::Unknown),
        }
    }

    fn tokenize_triple<'src>(&self, state: &mut LexState<'src>, ty: Leaf) -> Token<'src> {
        if state.prev() != state.peek() {
            return state.make_token(ty);
        }
        state.advance();
        state.make_token(Leaf::Ellipsis)
    }

    fn tokenize_equals<'src>(&self, state: &mut LexState<'src>, ty: Leaf) -> Token<'src> {
        if state.peek() != Some(b'=') {
            return state.make_token(ty);
        }
        state.advance();
        let ty = match ty {
            Leaf::Plus => Leaf::PlusEq,
            Leaf::Minus => Leaf::MinusEq,
            Leaf::Star => Leaf::StarEq,
            Leaf::Slash => Leaf::SlashEq,
            Leaf::Percent => Leaf::PercentEq,
            Leaf::Eq => Leaf::EqEq,
            Leaf::Tilde => Leaf::TildeEq,
            Leaf::Ampersand => Leaf::AmpEq,
            Leaf::Pipe => Leaf::PipeEq,
            Leaf::Caret => Leaf::CaretEq,
            Leaf::LessLess => Leaf::LessLessEq,
            Leaf::GreaterGreater => Leaf::GreaterGreaterEq,
            Leaf::Bang => Leaf::BangEq,
            Leaf::AmpAmp => Leaf::AmpAmpEq,
            Leaf::PipePipe => Leaf::PipePipeEq,
            Leaf::Lt => Leaf::LtEq,
            Leaf::Gt => Leaf::GtEq,
            _ => Leaf::Unknown,
        };
        state.make_token(ty)
    }
}

impl LexRule for OperatorRule {
    fn litmus(&self, rest: &str) -> bool {
        rest.as_bytes()
            .first()
            .is_some_and(|b| PUNCTUATION.contains(b))
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexError> {
        state.start_token();
        let Some(first) = state.advance() else {
            return Ok(state.make_token(Leaf::Unknown));
        };

        let token = match first {
            // Possible doubles or trailing equals.
            b'+' => self.tokenize_double(state, Leaf::Plus),
            b'-' => self.tokenize_double(state, Leaf::Minus),
            b'&' => self.tokenize_double(state, Leaf::Ampersand),
            b'|' => self.tokenize_double(state, Leaf::Pipe),
            b'<' => self.tokenize_double(state, Leaf::Lt),
            b'>' => self.tokenize_double(state, Leaf::Gt),
            b'.' => self.tokenize_double(state, Leaf::Dot),
            b'*' => self.tokenize_equals(state, Leaf::Star),
            b'/' => self.tokenize_equals(state, Leaf::Slash),
            b'%' => self.tokenize_equals(state, Leaf::Percent),
            b'=' => self.tokenize_equals(state, Leaf::Eq),
            b'~' => self.tokenize_equals(state, Leaf::Tilde),
            b'^' => self.tokenize_equals(state, Leaf::Caret),
            b'!' => self.tokenize_equals(state, Leaf::Bang),

            // Actual singles.
            b'?' => state.make_token(Leaf::Question),
            b'(' => state.make_token(Leaf::LParen),
            b')' => state.make_token(Leaf::RParen),
            b'{' => state.make_token(Leaf::LBrace),
            b'}' => state.make_token(Leaf::RBrace),
            b'[' => state.make_token(Leaf::LBracket),
            b']' => state.make_token(Leaf::RBracket),
            b',' => state.make_token(Leaf::Comma),
            b';' => state.make_token(Leaf::Semicolon),
            b':' => state.make_token(Leaf::Colon),

            _ => state.make_token(Leaf::Unknown),
        };
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(source: &str) -> Token<'_> {
        OperatorRule.tokenize(&mut LexState::new(source)).unwrap()
    }

    #[test]
    fn litmus_accepts_punctuation() {
        for b in PUNCTUATION {
            let s = (*b as char).to_string();
            assert!(OperatorRule.litmus(&s), "rejected {s:?}");
        }
        assert!(!OperatorRule.litmus("a"));
        assert!(!OperatorRule.litmus("9"));
        assert!(!OperatorRule.litmus(""));
    }

    #[test]
    fn scans_arithmetic_family() {
        assert_eq!(scan("+").ty, Leaf::Plus);
        assert_eq!(scan("+=").ty, Leaf::PlusEq);
        assert_eq!(scan("++").ty, Leaf::PlusPlus);
        assert_eq!(scan("-").ty, Leaf::Minus);
        assert_eq!(scan("-=").ty, Leaf::MinusEq);
        assert_eq!(scan("--").ty, Leaf::MinusMinus);
        assert_eq!(scan("*=").ty, Leaf::StarEq);
        assert_eq!(scan("/=").ty, Leaf::SlashEq);
        assert_eq!(scan("%=").ty, Leaf::PercentEq);
    }

    #[test]
    fn scans_assignment_and_comparison() {
        assert_eq!(scan("=").ty, Leaf::Eq);
        assert_eq!(scan("==").ty, Leaf::EqEq);
        assert_eq!(scan("!").ty, Leaf::Bang);
        assert_eq!(scan("!=").ty, Leaf::BangEq);
        assert_eq!(scan("<").ty, Leaf::Lt);
        assert_eq!(scan(">").ty, Leaf::Gt);
        assert_eq!(scan("<=").ty, Leaf::LtEq);
        assert_eq!(scan(">=").ty, Leaf::GtEq);
    }

    #[test]
    fn scans_bitwise_family() {
        assert_eq!(scan("~").ty, Leaf::Tilde);
        assert_eq!(scan("~=").ty, Leaf::TildeEq);
        assert_eq!(scan("^").ty, Leaf::Caret);
        assert_eq!(scan("^=").ty, Leaf::CaretEq);
        assert_eq!(scan("&").ty, Leaf::Ampersand);
        assert_eq!(scan("&=").ty, Leaf::AmpEq);
        assert_eq!(scan("|").ty, Leaf::Pipe);
        assert_eq!(scan("|=").ty, Leaf::PipeEq);
        assert_eq!(scan("<<").ty, Leaf::LessLess);
        assert_eq!(scan("<<=").ty, Leaf::LessLessEq);
        assert_eq!(scan(">>").ty, Leaf::GreaterGreater);
        assert_eq!(scan(">>=").ty, Leaf::GreaterGreaterEq);
    }

    #[test]
    fn scans_logical_family() {
        assert_eq!(scan("&&").ty, Leaf::AmpAmp);
        assert_eq!(scan("&&=").ty, Leaf::AmpAmpEq);
        assert_eq!(scan("||").ty, Leaf::PipePipe);
        assert_eq!(scan("||=").ty, Leaf::PipePipeEq);
    }

    #[test]
    fn scans_access_cascade_ellipsis() {
        assert_eq!(scan(".").ty, Leaf::Dot);
        assert_eq!(scan("..").ty, Leaf::DotDot);
        assert_eq!(scan("...").ty, Leaf::Ellipsis);
        // A fourth dot is a separate token.
        let mut state = LexState::new("....");
        let token = OperatorRule.tokenize(&mut state).unwrap();
        assert_eq!(token.ty, Leaf::Ellipsis);
        assert_eq!(state.peek(), Some(b'.'));
    }

    #[test]
    fn scans_delimiters() {
        assert_eq!(scan("(").ty, Leaf::LParen);
        assert_eq!(scan(")").ty, Leaf::RParen);
        assert_eq!(scan("[").ty, Leaf::LBracket);
        assert_eq!(scan("]").ty, Leaf::RBracket);
        assert_eq!(scan("{").ty, Leaf::LBrace);
        assert_eq!(scan("}").ty, Leaf::RBrace);
        assert_eq!(scan(",").ty, Leaf::Comma);
        assert_eq!(scan(";").ty, Leaf::Semicolon);
        assert_eq!(scan(":").ty, Leaf::Colon);
        assert_eq!(scan("?").ty, Leaf::Question);
    }

    #[test]
    fn greedy_match_takes_longest() {
        let mut state = LexState::new("<<=1");
        let token = OperatorRule.tokenize(&mut state).unwrap();
        assert_eq!(token.ty, Leaf::LessLessEq);
        assert_eq!(token.lexeme, "<<=");
        assert_eq!(state.peek(), Some(b'1'));
    }

    #[test]
    fn unrecognized_combination_is_unknown() {
        let token = scan(".=");
        assert_eq!(token.ty, Leaf::Unknown);
        assert_eq!(token.lexeme, ".=");
    }
}
