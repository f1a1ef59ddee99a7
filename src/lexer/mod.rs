// src/lexer/mod.rs
//
// Lexical analysis for Damson source code.
//
// The lexer is a thin dispatcher over an ordered set of scanning rules. Each
// rule owns one lexeme family (comments, words, one numeric radix, ...) and
// exposes a cheap `litmus` prefix test plus a `tokenize` scanner. The
// dispatcher skips whitespace, probes the rules in a fixed order, and runs
// the first one whose litmus accepts the remaining source.

mod character;
mod comment;
mod numbers;
mod operator;
mod strings;
mod word;

pub use character::CharacterRule;
pub use comment::CommentRule;
pub use numbers::{BinaryRule, DecimalRule, HexadecimalRule, OctalRule};
pub use operator::OperatorRule;
pub use strings::StringRule;
pub use word::WordRule;

use crate::errors::LexError;
use crate::token::{Leaf, Span, Token};

/// Cursor over a source buffer shared by every lexical rule.
///
/// Tracks the read position plus the origin of the token currently being
/// scanned. Lines and columns are 0-based; `advance` bumps the line counter
/// on `\n` only, so `\r` and form feed advance the column like any other
/// byte. The state is restartable: a lexer can be rebuilt around it at any
/// token boundary.
#[derive(Clone)]
pub struct LexState<'src> {
    pub(crate) source: &'src str,
    pub(crate) bytes: &'src [u8],
    pub(crate) current: usize,
    pub(crate) start: usize,
    pub(crate) line: u32,
    pub(crate) column: u32,
    pub(crate) start_line: u32,
    pub(crate) start_column: u32,
}

impl<'src> LexState<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            current: 0,
            start: 0,
            line: 0,
            column: 0,
            start_line: 0,
            start_column: 0,
        }
    }

    /// Whether the cursor has reached the end of the source.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.bytes.len()
    }

    /// The byte at the cursor, without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.bytes.get(self.current).copied()
    }

    /// The byte one past the cursor.
    #[inline]
    pub fn peek_next(&self) -> Option<u8> {
        self.bytes.get(self.current + 1).copied()
    }

    /// The byte just before the cursor.
    #[inline]
    pub fn prev(&self) -> Option<u8> {
        self.current.checked_sub(1).map(|i| self.bytes[i])
    }

    /// Consume and return the byte at the cursor. A `\n` increments the line
    /// counter and resets the column; everything else advances the column.
    #[inline]
    pub fn advance(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.current += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        Some(b)
    }

    /// View of the source from the cursor to the end.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.current..]
    }

    /// Snapshot the current position as the origin of the next token.
    pub fn start_token(&mut self) {
        self.start = self.current;
        self.start_line = self.line;
        self.start_column = self.column;
    }

    /// The text scanned since `start_token`.
    pub fn lexeme(&self) -> &'src str {
        &self.source[self.start..self.current]
    }

    /// Span from the token origin to the cursor.
    pub fn token_span(&self) -> Span {
        Span::new_with_end(
            self.start,
            self.current,
            self.start_line,
            self.start_column,
            self.line,
            self.column,
        )
    }

    /// Build a token of the given kind from the scanned text.
    pub fn make_token(&self, ty: Leaf) -> Token<'src> {
        Token::new(ty, self.lexeme(), self.token_span())
    }
}

impl std::fmt::Debug for LexState<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LexState")
            .field("current", &self.current)
            .field("line", &self.line)
            .field("column", &self.column)
            .field("remaining", &self.remaining())
            .finish()
    }
}

/// A pluggable scanner for one lexeme family.
///
/// `litmus` is an O(1) prefix test over the remaining source and must not
/// touch the state; `tokenize` runs only after the dispatcher saw `litmus`
/// accept, and scans exactly one token.
pub trait LexRule {
    fn litmus(&self, rest: &str) -> bool;
    fn tokenize<'src>(&self, state: &mut LexState<'src>) -> Result<Token<'src>, LexError>;
}

/// Rule probe order. Greedy and significant: octal must run before decimal
/// so `0123` is claimed by the octal rule, and the word rule outranks the
/// string rule so a leading `r` is always a word start.
static RULES: [&(dyn LexRule + Sync); 9] = [
    &CommentRule,
    &WordRule,
    &BinaryRule,
    &OctalRule,
    &DecimalRule,
    &HexadecimalRule,
    &CharacterRule,
    &StringRule,
    &OperatorRule,
];

fn dispatch<'src>(
    rules: &[&(dyn LexRule + Sync)],
    state: &mut LexState<'src>,
) -> Result<Token<'src>, LexError> {
    while state.peek().is_some_and(|b| b.is_ascii_whitespace()) {
        state.advance();
    }

    if state.is_at_end() {
        state.start_token();
        return Ok(state.make_token(Leaf::Eos));
    }

    let rest = state.remaining();
    for rule in rules {
        if rule.litmus(rest) {
            return rule.tokenize(state);
        }
    }

    state.start_token();
    state.advance();
    tracing::debug!(
        line = state.start_line,
        col = state.start_column,
        "lexer error: no rule matches"
    );
    Err(LexError::NoRuleMatches {
        span: state.token_span().into(),
    })
}

/// The Damson lexer: produces one token per call, in strict source order,
/// ending with an endless tail of [`Leaf::Eos`] tokens.
#[derive(Debug)]
pub struct Lexer<'src> {
    state: LexState<'src>,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            state: LexState::new(source),
        }
    }

    /// Resume lexing from an existing cursor.
    pub fn from_state(state: LexState<'src>) -> Self {
        Self { state }
    }

    /// The source buffer being lexed.
    pub fn source(&self) -> &'src str {
        self.state.source
    }

    /// Scan the next token. Errors describe the malformed lexeme and leave
    /// the cursor after the consumed prefix; the caller may keep pulling.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        dispatch(&RULES, &mut self.state)
    }
}
