// src/lexer/numbers.rs
//
// Numeric literal rules: binary, octal, decimal, and hexadecimal. One rule
// per radix; the dispatcher's probe order (binary, octal, decimal, hex)
// resolves the shared `0` prefix, with a lone `0` falling to the decimal
// rule.

use crate::errors::LexError;
use crate::token::{Leaf, Token};

use super::{LexRule, LexState};

fn is_octal(b: u8) -> bool {
    (b'0'..=b'7').contains(&b)
}

fn debug_invalid(state: &LexState<'_>, what: &'static str) {
    tracing::debug!(
        line = state.start_line,
        col = state.start_column,
        "lexer error: invalid {what} literal"
    );
}

/// Scans `0b...` binary integer literals.
pub struct BinaryRule;

impl LexRule for BinaryRule {
    fn litmus(&self, rest: &str) -> bool {
        rest.starts_with("0b")
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexError> {
        state.start_token();
        state.advance(); // '0'
        state.advance(); // 'b'

        // The prefix must be followed by at least one binary digit.
        if !state.peek().is_some_and(|b| b == b'0' || b == b'1') {
            debug_invalid(state, "binary");
            return Err(LexError::InvalidBinary {
                span: state.token_span().into(),
            });
        }

        while state.peek().is_some_and(|b| b == b'0' || b == b'1') {
            state.advance();
        }
        Ok(state.make_token(Leaf::IntLiteral))
    }
}

/// Scans `0...` octal integer literals (a zero followed by digits 0-7).
pub struct OctalRule;

impl LexRule for OctalRule {
    fn litmus(&self, rest: &str) -> bool {
        let bytes = rest.as_bytes();
        bytes.first() == Some(&b'0') && bytes.get(1).copied().is_some_and(is_octal)
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexError> {
        state.start_token();
        state.advance(); // '0'

        // Unreachable through the dispatcher (the litmus saw an octal digit),
        // but the rule keeps its own contract for direct callers.
        if !state.peek().is_some_and(is_octal) {
            debug_invalid(state, "octal");
            return Err(LexError::InvalidOctal {
                span: state.token_span().into(),
            });
        }

        while state.peek().is_some_and(is_octal) {
            state.advance();
        }
        Ok(state.make_token(Leaf::IntLiteral))
    }
}

/// Scans decimal integer and floating-point literals.
///
/// A digit run is an integer unless a `.` with a digit behind it follows, in
/// which case the fraction is consumed and the literal is a float. A
/// trailing `.` with no digit after it is left for the operator rule.
pub struct DecimalRule;

impl LexRule for DecimalRule {
    fn litmus(&self, rest: &str) -> bool {
        let bytes = rest.as_bytes();
        let Some(&first) = bytes.first() else {
            return false;
        };
        if !first.is_ascii_digit() {
            return false;
        }

        // A leading zero belongs to the binary, octal, or hexadecimal rules
        // unless it stands alone or starts a fraction.
        if first == b'0'
            && let Some(&second) = bytes.get(1)
        {
            return second != b'b' && second != b'x' && !second.is_ascii_digit();
        }
        true
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexError> {
        state.start_token();
        state.advance();
        while state.peek().is_some_and(|b| b.is_ascii_digit()) {
            state.advance();
        }

        if state.peek() == Some(b'.') && state.peek_next().is_some_and(|b| b.is_ascii_digit()) {
            state.advance(); // '.'
            while state.peek().is_some_and(|b| b.is_ascii_digit()) {
                state.advance();
            }
            return Ok(state.make_token(Leaf::FloatLiteral));
        }

        Ok(state.make_token(Leaf::IntLiteral))
    }
}

/// Scans `0x...` hexadecimal integer literals.
pub struct HexadecimalRule;

impl LexRule for HexadecimalRule {
    fn litmus(&self, rest: &str) -> bool {
        rest.starts_with("0x")
    }

    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexError> {
        state.start_token();
        state.advance(); // '0'
        state.advance(); // 'x'

        if !state.peek().is_some_and(|b| b.is_ascii_hexdigit()) {
            debug_invalid(state, "hexadecimal");
            return Err(LexError::InvalidHexadecimal {
                span: state.token_span().into(),
            });
        }

        while state.peek().is_some_and(|b| b.is_ascii_hexdigit()) {
            state.advance();
        }
        Ok(state.make_token(Leaf::IntLiteral))
    }
}
